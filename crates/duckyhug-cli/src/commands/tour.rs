use std::time::Duration;

use anyhow::{bail, Result};

use duckyhug_core::{AppConfig, CarouselController, ManualTimer, RecordingSurface};

/// Drive the carousel on a virtual clock and print each tick
pub fn run(config: &AppConfig, steps: usize, items: Option<usize>, width: Option<u32>) -> Result<()> {
    let items = items.unwrap_or(config.books.len());
    if items == 0 {
        bail!("Nothing to show: the carousel has no items");
    }
    let width = width.unwrap_or(config.carousel.desktop_min_width);
    let period = Duration::from_millis(config.carousel.auto_scroll_period_ms);

    let timer = ManualTimer::new();
    let mut carousel = CarouselController::new(
        config.carousel.clone(),
        items,
        RecordingSurface::new(),
        timer.clone(),
    );
    carousel.init(width);

    println!(
        "{} items, {} visible, max index {}, viewport {} ({})",
        items,
        config.carousel.visible_count,
        carousel.max_index(),
        width,
        if carousel.is_auto_scrolling() {
            "auto-scroll on"
        } else {
            "auto-scroll off"
        }
    );

    for _ in 0..steps {
        timer.advance_with(period, |handle| {
            carousel.on_timer(handle);
        });

        let surface = carousel.surface();
        println!(
            "t={:>5.1}s  index={}  offset={}  prev={}  next={}",
            timer.now().as_secs_f64(),
            carousel.current_index(),
            surface.offset,
            on_off(surface.previous_enabled),
            on_off(surface.next_enabled),
        );
    }

    carousel.stop_auto_scroll();
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
