pub mod carousel;
pub mod config;
pub mod error;
pub mod form;
pub mod timer;

pub use carousel::{CarouselController, CarouselEvent, Control, Offset, RecordingSurface, RenderSurface};
pub use config::{AppConfig, Axis, BookEntry, CarouselConfig, FormConfig};
pub use error::{Error, Result};
pub use form::{CaptureForm, FormSurface, PlaceholderSubscription, SubmitOutcome, SubscriptionService};
pub use timer::{ManualTimer, TimerFired, TimerHandle, TimerService, TokioTimer};
