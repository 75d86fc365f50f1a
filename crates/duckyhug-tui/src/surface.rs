//! Terminal implementations of the core surfaces
//!
//! The controllers write into these; widgets read from them when drawing.

use ratatui::style::Color;

use duckyhug_core::{Control, FormSurface, Offset, RenderSurface};

use crate::theme::parse_hex_color;

#[derive(Debug, Clone, Default)]
pub struct CarouselSurface {
    pub offset: Offset,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl RenderSurface for CarouselSurface {
    fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    fn set_control_enabled(&mut self, control: Control, enabled: bool) {
        match control {
            Control::Previous => self.previous_enabled = enabled,
            Control::Next => self.next_enabled = enabled,
        }
    }
}

/// Message shown under the email input
#[derive(Debug, Clone, PartialEq)]
pub struct FormMessage {
    pub text: String,
    pub color: Color,
}

#[derive(Debug, Clone, Default)]
pub struct FormSurfaceState {
    pub input: String,
    pub message: Option<FormMessage>,
}

impl FormSurfaceState {
    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }
}

impl FormSurface for FormSurfaceState {
    fn read_input(&self) -> String {
        self.input.trim().to_string()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn show_message(&mut self, text: &str, color: &str) {
        let color = parse_hex_color(color).unwrap_or_else(|| {
            tracing::warn!(color, "Invalid message color, using default");
            Color::Reset
        });
        self.message = Some(FormMessage {
            text: text.to_string(),
            color,
        });
    }

    fn hide_message(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_surface_parses_color() {
        let mut surface = FormSurfaceState::default();
        surface.show_message("hello", "#2B5F6F");
        assert_eq!(
            surface.message,
            Some(FormMessage {
                text: "hello".to_string(),
                color: Color::Rgb(0x2b, 0x5f, 0x6f),
            })
        );

        surface.show_message("bad", "not-a-color");
        assert_eq!(surface.message.as_ref().map(|m| m.color), Some(Color::Reset));

        surface.hide_message();
        assert!(surface.message.is_none());
    }

    #[test]
    fn test_form_surface_input_editing() {
        let mut surface = FormSurfaceState::default();
        for c in " a@b.com".chars() {
            surface.push_char(c);
        }
        surface.pop_char();
        assert_eq!(surface.read_input(), "a@b.co");

        surface.clear_input();
        assert_eq!(surface.read_input(), "");
    }
}
