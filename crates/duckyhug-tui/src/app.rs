use std::sync::Arc;

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use tracing::debug;

use duckyhug_core::{
    AppConfig, Axis, BookEntry, CaptureForm, CarouselController, CarouselEvent,
    PlaceholderSubscription, SubmitOutcome, TimerFired, TokioTimer,
};

use crate::input::Action;
use crate::surface::{CarouselSurface, FormSurfaceState};

pub type Carousel = CarouselController<CarouselSurface, TokioTimer>;
pub type Form = CaptureForm<FormSurfaceState, TokioTimer, PlaceholderSubscription>;

/// Which part of the screen receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Carousel,
    EmailInput,
}

/// Screen regions, recomputed on every draw and used for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub header: Rect,
    pub carousel: Rect,
    pub previous: Rect,
    pub next: Rect,
    pub form: Rect,
    pub email: Rect,
    pub status: Rect,
}

impl HitAreas {
    /// Width of a navigation button in columns
    const BUTTON_WIDTH: u16 = 12;
    /// Height of a navigation button in rows
    const BUTTON_HEIGHT: u16 = 3;

    pub fn compute(area: Rect, axis: Axis) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(area);

        let (previous, carousel, next) = match axis {
            Axis::Vertical => {
                let parts = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(Self::BUTTON_HEIGHT),
                        Constraint::Min(3),
                        Constraint::Length(Self::BUTTON_HEIGHT),
                    ])
                    .split(rows[1]);
                (
                    centered(parts[0], Self::BUTTON_WIDTH, Self::BUTTON_HEIGHT),
                    parts[1],
                    centered(parts[2], Self::BUTTON_WIDTH, Self::BUTTON_HEIGHT),
                )
            }
            Axis::Horizontal => {
                let parts = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Length(Self::BUTTON_WIDTH),
                        Constraint::Min(10),
                        Constraint::Length(Self::BUTTON_WIDTH),
                    ])
                    .split(rows[1]);
                (
                    centered(parts[0], Self::BUTTON_WIDTH, Self::BUTTON_HEIGHT),
                    parts[1],
                    centered(parts[2], Self::BUTTON_WIDTH, Self::BUTTON_HEIGHT),
                )
            }
        };

        let form = rows[2];
        let email = Rect {
            x: form.x + 1,
            y: form.y + 1,
            width: form.width.saturating_sub(2),
            height: 3.min(form.height.saturating_sub(1)),
        };

        Self {
            header: rows[0],
            carousel,
            previous,
            next,
            form,
            email,
            status: rows[3],
        }
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// State of the terminal showcase
pub struct App {
    pub config: Arc<AppConfig>,
    pub books: Vec<BookEntry>,
    pub carousel: Carousel,
    pub form: Form,
    pub focus: Focus,
    /// Whether the mouse is currently over the item stack
    pub hovering: bool,
    pub hit: HitAreas,
    pub should_quit: bool,
    pub status_message: Option<String>,
    timer: TokioTimer,
}

impl App {
    pub fn new(config: Arc<AppConfig>, timer: TokioTimer) -> Self {
        let books = config.books.clone();
        let carousel = CarouselController::new(
            config.carousel.clone(),
            books.len(),
            CarouselSurface::default(),
            timer.clone(),
        );
        let form = CaptureForm::new(
            config.form.clone(),
            FormSurfaceState::default(),
            timer.clone(),
            PlaceholderSubscription::new(),
        );

        Self {
            config,
            books,
            carousel,
            form,
            focus: Focus::Carousel,
            hovering: false,
            hit: HitAreas::default(),
            should_quit: false,
            status_message: None,
            timer,
        }
    }

    /// Initial render; auto-scroll starts if the terminal is wide enough
    pub fn start(&mut self, columns: u16) {
        let width = self.viewport_width(columns);
        debug!(columns, width, "Starting carousel");
        self.carousel.init(width);
    }

    /// Terminal columns expressed in viewport units
    pub fn viewport_width(&self, columns: u16) -> u32 {
        u32::from(columns).saturating_mul(self.config.ui.cell_width_px)
    }

    pub fn on_resize(&mut self, columns: u16) {
        let width = self.viewport_width(columns);
        self.carousel.handle_event(CarouselEvent::Resize(width));
    }

    pub fn on_timer(&mut self, TimerFired(handle): TimerFired) {
        if !self.carousel.on_timer(handle) && !self.form.on_timer(handle) {
            debug!(%handle, "Ignoring timer that no longer has an owner");
        }
    }

    /// Record the layout for this frame
    pub fn set_area(&mut self, area: Rect) {
        self.hit = HitAreas::compute(area, self.carousel.config().axis);
    }

    pub fn is_over_carousel(&self, column: u16, row: u16) -> bool {
        self.hit.carousel.contains(Position::new(column, row))
    }

    pub fn is_input_mode(&self) -> bool {
        self.focus == Focus::EmailInput
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Previous => self.carousel.click_previous(),
            Action::Next => self.carousel.click_next(),
            Action::HoverEnter => {
                self.hovering = true;
                self.carousel.handle_event(CarouselEvent::HoverEnter);
            }
            Action::HoverLeave => {
                self.hovering = false;
                self.carousel.handle_event(CarouselEvent::HoverLeave);
            }
            Action::FocusEmail => {
                self.focus = Focus::EmailInput;
                self.status_message = None;
            }
            Action::LeaveInput => self.focus = Focus::Carousel,
            Action::Submit => self.submit(),
            Action::InputChar(c) => self.form.surface_mut().push_char(c),
            Action::Backspace => self.form.surface_mut().pop_char(),
            Action::None => {}
        }
    }

    /// Label shown in the status bar for the auto-scroll state
    pub fn mode_label(&self) -> &'static str {
        if !self.carousel.is_auto_scrolling() {
            "MANUAL"
        } else if self.carousel.is_paused() {
            "PAUSED"
        } else {
            "AUTO"
        }
    }

    /// Cancel every timer before the terminal is restored
    pub fn shutdown(&mut self) {
        self.carousel.stop_auto_scroll();
        self.form.cancel_pending();
        self.timer.cancel_all();
    }

    fn submit(&mut self) {
        self.status_message = match self.form.submit() {
            SubmitOutcome::Subscribed => None,
            SubmitOutcome::Failed(e) => Some(e.to_string()),
        };
        self.focus = Focus::Carousel;
    }
}
