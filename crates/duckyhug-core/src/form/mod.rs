//! Email capture form
//!
//! The form reads an address, hands it to a [`SubscriptionService`] and shows
//! a confirmation (or failure) message that hides itself after a delay.

mod handler;
mod subscription;
mod surface;

pub use handler::{CaptureForm, SubmitOutcome};
pub use subscription::{PlaceholderSubscription, SubscriptionError, SubscriptionService};
pub use surface::FormSurface;
