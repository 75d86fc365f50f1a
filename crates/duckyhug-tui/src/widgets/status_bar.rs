use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::theme::Theme;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let mode_str = app.mode_label();
        let mode_color = match mode_str {
            "PAUSED" => theme.paused,
            "AUTO" => theme.accent,
            _ => theme.grey,
        };

        let focus_str = match app.focus {
            Focus::Carousel => "Books",
            Focus::EmailInput => "Email",
        };

        let range = app.carousel.visible_range();
        let status_text = if range.is_empty() {
            format!(" {} | no books ", focus_str)
        } else {
            format!(
                " {} | Books {}-{} of {} | position {}/{} ",
                focus_str,
                range.start + 1,
                range.end,
                app.carousel.total_items(),
                app.carousel.current_index(),
                app.carousel.max_index(),
            )
        };

        let help_hint = " q:quit j/k:next/prev tab:email ";
        let used = mode_str.width() + 2 + status_text.width() + help_hint.width();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", mode_str),
                Style::default()
                    .fg(theme.bg0)
                    .bg(mode_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg1)),
            Span::styled(help_hint, Style::default().fg(theme.grey).bg(theme.bg1)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
