use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::truncate;
use crate::app::App;
use crate::theme::Theme;

/// Email input plus the confirmation message underneath it
pub struct CaptureFormWidget;

impl CaptureFormWidget {
    const PLACEHOLDER: &'static str = "your@email.com";

    pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
        let area = app.hit.form;
        let focused = app.is_input_mode();

        let outer = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.bg2))
            .title(Span::styled(
                " Join the Story Circle ",
                Style::default().fg(theme.accent),
            ))
            .style(Style::default().bg(theme.bg0));
        frame.render_widget(outer, area);

        let surface = app.form.surface();
        let input_area = app.hit.email;
        let border_color = if focused { theme.accent } else { theme.grey };

        let text = if surface.input.is_empty() && !focused {
            Span::styled(Self::PLACEHOLDER, Style::default().fg(theme.grey))
        } else {
            Span::styled(surface.input.clone(), Style::default().fg(theme.fg0))
        };
        let hint = if focused { " Enter to join " } else { " Tab to type " };

        let input = Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title_bottom(Span::styled(hint, Style::default().fg(theme.grey))),
        );
        frame.render_widget(input, input_area);

        if focused && input_area.width > 2 {
            let max_x = input_area.x + input_area.width - 2;
            let x = (input_area.x + 1 + surface.input.width() as u16).min(max_x);
            frame.set_cursor_position(Position::new(x, input_area.y + 1));
        }

        let message_row = input_area.y + input_area.height;
        if message_row < area.y + area.height {
            let message_area = Rect {
                x: area.x + 1,
                y: message_row,
                width: area.width.saturating_sub(2),
                height: 1,
            };
            let line = if let Some(message) = &surface.message {
                Line::from(Span::styled(
                    truncate(&message.text, message_area.width as usize),
                    Style::default()
                        .fg(message.color)
                        .add_modifier(Modifier::BOLD),
                ))
            } else if let Some(status) = &app.status_message {
                Line::from(Span::styled(status.clone(), Style::default().fg(theme.paused)))
            } else {
                Line::default()
            };
            frame.render_widget(Paragraph::new(line), message_area);
        }
    }
}
