use std::time::Duration;

use tracing::{debug, info, warn};

use super::subscription::{SubscriptionError, SubscriptionService};
use super::surface::FormSurface;
use crate::config::FormConfig;
use crate::timer::{TimerHandle, TimerService};

/// Result of one submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Subscribed,
    Failed(SubscriptionError),
}

impl SubmitOutcome {
    pub fn is_subscribed(&self) -> bool {
        matches!(self, SubmitOutcome::Subscribed)
    }

    pub fn into_result(self) -> crate::Result<()> {
        match self {
            SubmitOutcome::Subscribed => Ok(()),
            SubmitOutcome::Failed(e) => Err(e.into()),
        }
    }
}

/// Handles submits of the email capture form
///
/// The address is not validated. On success the input is cleared; on failure
/// it is kept so the visitor can retry. Either way the message hides itself
/// after `message_hide_ms`.
pub struct CaptureForm<F, T, P> {
    config: FormConfig,
    surface: F,
    timer: T,
    service: P,
    hide_timer: Option<TimerHandle>,
}

impl<F, T, P> CaptureForm<F, T, P>
where
    F: FormSurface,
    T: TimerService,
    P: SubscriptionService,
{
    pub fn new(config: FormConfig, surface: F, timer: T, service: P) -> Self {
        Self {
            config,
            surface,
            timer,
            service,
            hide_timer: None,
        }
    }

    /// Consume a submit signal. The host must not run any default action of its own.
    pub fn submit(&mut self) -> SubmitOutcome {
        let email = self.surface.read_input();

        let outcome = match self.service.subscribe(&email) {
            Ok(()) => {
                info!("Email capture submitted");
                self.surface
                    .show_message(&self.config.success_message, &self.config.success_color);
                self.surface.clear_input();
                SubmitOutcome::Subscribed
            }
            Err(e) => {
                warn!(error = %e, "Email capture failed");
                self.surface
                    .show_message(&self.config.error_message, &self.config.error_color);
                SubmitOutcome::Failed(e)
            }
        };

        self.schedule_hide();
        outcome
    }

    /// Handle a fired timer. Returns false if the handle is not ours.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.hide_timer != Some(handle) {
            return false;
        }
        self.hide_timer = None;
        self.surface.hide_message();
        debug!("Form message hidden");
        true
    }

    /// Whether a message is currently waiting to be hidden
    pub fn is_message_visible(&self) -> bool {
        self.hide_timer.is_some()
    }

    /// Cancel the pending hide, if any
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.hide_timer.take() {
            self.timer.cancel(handle);
        }
    }

    pub fn surface(&self) -> &F {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut F {
        &mut self.surface
    }

    pub fn service(&self) -> &P {
        &self.service
    }

    fn schedule_hide(&mut self) {
        // A new message gets the full delay
        self.cancel_pending();
        let delay = Duration::from_millis(self.config.message_hide_ms);
        self.hide_timer = Some(self.timer.schedule_once(delay));
    }
}
