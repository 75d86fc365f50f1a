use thiserror::Error;

/// Why a subscription request did not go through
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    #[error("Subscription service unavailable: {0}")]
    Unavailable(String),
}

/// Mailing-list backend the capture form submits to
pub trait SubscriptionService {
    fn subscribe(&mut self, email: &str) -> Result<(), SubscriptionError>;
}

/// Stand-in backend that accepts every address without contacting anything
#[derive(Debug, Clone, Default)]
pub struct PlaceholderSubscription {
    accepted: usize,
}

impl PlaceholderSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of submits accepted so far. Addresses themselves are not kept.
    pub fn accepted_count(&self) -> usize {
        self.accepted
    }
}

impl SubscriptionService for PlaceholderSubscription {
    fn subscribe(&mut self, email: &str) -> Result<(), SubscriptionError> {
        self.accepted += 1;
        tracing::debug!(
            len = email.len(),
            total = self.accepted,
            "Placeholder subscription accepted address"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_accepts_anything() {
        let mut service = PlaceholderSubscription::new();
        assert!(service.subscribe("a@b.com").is_ok());
        assert!(service.subscribe("not an address").is_ok());
        assert!(service.subscribe("").is_ok());
        assert_eq!(service.accepted_count(), 3);
    }
}
