use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use duckyhug_core::Axis;

use super::truncate;
use crate::app::App;
use crate::theme::Theme;

/// Draws the visible window of book cards
///
/// The first visible card is derived from the offset the controller last
/// rendered, not from the controller's index directly.
pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        if app.books.is_empty() {
            let empty = Paragraph::new("No books configured")
                .style(Style::default().fg(theme.grey).bg(theme.bg0));
            frame.render_widget(empty, area);
            return;
        }

        let config = app.carousel.config();
        let first = first_visible(
            app.carousel.surface().offset.on(config.axis),
            config.item_stride,
        );
        let slots = config.visible_count.max(1);

        let direction = match config.axis {
            Axis::Vertical => Direction::Vertical,
            Axis::Horizontal => Direction::Horizontal,
        };
        let cells = Layout::default()
            .direction(direction)
            .constraints(vec![Constraint::Ratio(1, slots as u32); slots])
            .split(area);

        let border_color = if app.carousel.is_paused() {
            theme.paused
        } else {
            theme.card_border
        };

        for (slot, cell) in cells.iter().enumerate() {
            let index = first + slot;
            let Some(book) = app.books.get(index) else {
                break;
            };

            let inner_width = cell.width.saturating_sub(4) as usize;
            let label = format!(" {}/{} ", index + 1, app.books.len());
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title(Span::styled(label, Style::default().fg(theme.grey)));

            let lines = vec![
                Line::from(Span::styled(
                    truncate(&book.title, inner_width),
                    Style::default()
                        .fg(theme.card_title)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    book.tagline.clone(),
                    Style::default().fg(theme.fg1),
                )),
            ];

            let card = Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(theme.bg1));
            frame.render_widget(card, *cell);
        }
    }
}

/// Index of the first card in view for an offset along the carousel axis
fn first_visible(offset: i32, stride: i32) -> usize {
    if stride <= 0 {
        return 0;
    }
    (-offset / stride).max(0) as usize
}
