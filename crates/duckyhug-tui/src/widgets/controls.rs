use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use duckyhug_core::{Axis, Control};

use crate::app::App;
use crate::theme::Theme;

/// Previous / next buttons, greyed out when the controller disabled them
pub struct ControlsWidget;

impl ControlsWidget {
    pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
        let surface = app.carousel.surface();
        let axis = app.carousel.config().axis;

        Self::button(
            frame,
            app.hit.previous,
            label(axis, Control::Previous),
            surface.previous_enabled,
            theme,
        );
        Self::button(
            frame,
            app.hit.next,
            label(axis, Control::Next),
            surface.next_enabled,
            theme,
        );
    }

    fn button(frame: &mut Frame, area: Rect, text: &str, enabled: bool, theme: &Theme) {
        let style = if enabled {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.grey)
        };

        let button = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(button, area);
    }
}

fn label(axis: Axis, control: Control) -> &'static str {
    match (axis, control) {
        (Axis::Vertical, Control::Previous) => "▲ Prev",
        (Axis::Vertical, Control::Next) => "▼ Next",
        (Axis::Horizontal, Control::Previous) => "◀ Prev",
        (Axis::Horizontal, Control::Next) => "Next ▶",
    }
}
