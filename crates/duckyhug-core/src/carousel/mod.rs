//! Book carousel: a fixed-size window over an ordered list of items
//!
//! - `surface` - the rendering capability the controller drives
//! - `controller` - index bookkeeping, navigation and auto-scroll

mod controller;
mod surface;

pub use controller::{CarouselController, CarouselEvent};
pub use surface::{Control, Offset, RecordingSurface, RenderSurface};
