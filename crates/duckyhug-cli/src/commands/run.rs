use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::mpsc;

use duckyhug_core::{AppConfig, TimerFired, TokioTimer};
use duckyhug_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    widgets::{CaptureFormWidget, CarouselWidget, ControlsWidget, HeaderWidget, StatusBarWidget},
    App, Theme,
};

type Backend = CrosstermBackend<io::Stdout>;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("DuckyHug"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (timer, timer_rx) = TokioTimer::channel();
    let mut app = App::new(config, timer);
    let theme = Theme::default();

    let result = run_loop(&mut terminal, &mut app, &theme, timer_rx);

    app.shutdown();

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    theme: &Theme,
    mut timer_rx: mpsc::UnboundedReceiver<TimerFired>,
) -> Result<()> {
    let event_handler = EventHandler::new(app.config.ui.tick_rate_ms);

    let size = terminal.size()?;
    app.start(size.width);
    tracing::info!(columns = size.width, books = app.books.len(), "Showcase started");

    loop {
        // Process any fired timers (non-blocking)
        while let Ok(fired) = timer_rx.try_recv() {
            app.on_timer(fired);
        }

        terminal.draw(|frame| draw(frame, app, theme))?;

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    app.apply(action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, app);
                    app.apply(action);
                }
                AppEvent::Resize(width, _height) => app.on_resize(width),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            tracing::info!("Showcase closed");
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &mut App, theme: &Theme) {
    app.set_area(frame.area());
    let hit = app.hit;

    HeaderWidget::render(frame, hit.header, theme);
    CarouselWidget::render(frame, hit.carousel, app, theme);
    ControlsWidget::render(frame, app, theme);
    CaptureFormWidget::render(frame, app, theme);
    StatusBarWidget::render(frame, hit.status, app, theme);
}
