use std::fmt;

use crate::config::Axis;

/// Navigation affordances whose enabled state the controller maintains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Previous,
    Next,
}

/// Visual offset of the item stack, in the same units as the item stride
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0, y: 0 };

    /// Offset of `amount` along `axis`
    pub fn along(axis: Axis, amount: i32) -> Self {
        match axis {
            Axis::Horizontal => Self { x: amount, y: 0 },
            Axis::Vertical => Self { x: 0, y: amount },
        }
    }

    /// The component on `axis`
    pub fn on(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}, {})", self.x, self.y)
    }
}

/// Where the carousel is drawn
pub trait RenderSurface {
    /// Apply the scroll position of the item stack
    fn set_offset(&mut self, offset: Offset);

    /// Enable or disable a navigation control
    fn set_control_enabled(&mut self, control: Control, enabled: bool);
}

/// Surface that only remembers what it was told
///
/// Used by headless drivers and tests. It also implements
/// [`FormSurface`](crate::form::FormSurface) so a single value can back both
/// components.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub offset: Offset,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    /// Number of `set_offset` calls received
    pub renders: usize,
    pub input: String,
    /// Visible message and its color
    pub message: Option<(String, String)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Previous => self.previous_enabled,
            Control::Next => self.next_enabled,
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
        self.renders += 1;
    }

    fn set_control_enabled(&mut self, control: Control, enabled: bool) {
        match control {
            Control::Previous => self.previous_enabled = enabled,
            Control::Next => self.next_enabled = enabled,
        }
    }
}
