use std::ops::Range;
use std::time::Duration;

use tracing::{debug, info};

use super::surface::{Control, Offset, RenderSurface};
use crate::config::CarouselConfig;
use crate::timer::{TimerHandle, TimerService};

/// Signals a host delivers to the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Pointer entered the item stack
    HoverEnter,
    /// Pointer left the item stack
    HoverLeave,
    /// The "previous" control was clicked
    ClickPrevious,
    /// The "next" control was clicked
    ClickNext,
    /// Viewport width changed
    Resize(u32),
    /// A timer fired
    Timer(TimerHandle),
}

/// Owns the carousel index and drives a [`RenderSurface`]
///
/// `max_index` is fixed at construction (`total_items - visible_count`,
/// saturating at zero) and `current_index` never leaves `0..=max_index`.
/// Advancing past the end wraps to the start; retreating stops at zero.
pub struct CarouselController<S, T> {
    config: CarouselConfig,
    total_items: usize,
    max_index: usize,
    current_index: usize,
    is_paused: bool,
    auto_scroll: Option<TimerHandle>,
    surface: S,
    timer: T,
}

impl<S, T> CarouselController<S, T>
where
    S: RenderSurface,
    T: TimerService,
{
    pub fn new(config: CarouselConfig, total_items: usize, surface: S, timer: T) -> Self {
        let max_index = total_items.saturating_sub(config.visible_count);
        Self {
            config,
            total_items,
            max_index,
            current_index: 0,
            is_paused: false,
            auto_scroll: None,
            surface,
            timer,
        }
    }

    /// Render the initial position and start auto-scroll on wide viewports
    pub fn init(&mut self, viewport_width: u32) {
        self.render();
        if self.is_desktop(viewport_width) {
            self.start_auto_scroll();
        } else {
            debug!(viewport_width, "Viewport below desktop width, auto-scroll off");
        }
    }

    /// Push the current offset and control states to the surface
    pub fn render(&mut self) {
        let offset = self.offset();
        self.surface.set_offset(offset);
        self.surface
            .set_control_enabled(Control::Previous, self.current_index != 0);
        self.surface
            .set_control_enabled(Control::Next, self.current_index < self.max_index);
    }

    /// Move forward one item, wrapping to the first after the last
    pub fn advance(&mut self) {
        if self.current_index < self.max_index {
            self.current_index += 1;
        } else {
            self.current_index = 0;
        }
        debug!(index = self.current_index, "Carousel advanced");
        self.render();
    }

    /// Move back one item, stopping at the first
    pub fn retreat(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            debug!(index = self.current_index, "Carousel retreated");
        }
        self.render();
    }

    /// Schedule periodic advancement, replacing any running schedule
    pub fn start_auto_scroll(&mut self) {
        if let Some(previous) = self.auto_scroll.take() {
            self.timer.cancel(previous);
        }
        let handle = self.timer.schedule_repeating(self.period());
        self.auto_scroll = Some(handle);
        info!(%handle, period_ms = self.config.auto_scroll_period_ms, "Auto-scroll started");
    }

    pub fn stop_auto_scroll(&mut self) {
        if let Some(handle) = self.auto_scroll.take() {
            self.timer.cancel(handle);
            info!(%handle, "Auto-scroll stopped");
        }
    }

    /// Gate automatic advancement. The timer keeps running either way.
    pub fn set_paused(&mut self, paused: bool) {
        if self.is_paused != paused {
            debug!(paused, "Carousel pause changed");
        }
        self.is_paused = paused;
    }

    pub fn on_resize(&mut self, viewport_width: u32) {
        if self.is_desktop(viewport_width) {
            if self.auto_scroll.is_none() {
                self.start_auto_scroll();
            }
        } else {
            self.stop_auto_scroll();
        }
    }

    /// Manual "next": restarts the auto-scroll phase
    pub fn click_next(&mut self) {
        self.stop_auto_scroll();
        self.advance();
        self.start_auto_scroll();
    }

    /// Manual "previous": restarts the auto-scroll phase
    pub fn click_previous(&mut self) {
        self.stop_auto_scroll();
        self.retreat();
        self.start_auto_scroll();
    }

    /// Handle a fired timer. Returns false if the handle is not ours.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.auto_scroll != Some(handle) {
            return false;
        }
        if self.is_paused {
            debug!("Auto-scroll tick skipped while paused");
        } else {
            self.advance();
        }
        true
    }

    /// Dispatch a host event. Returns false only for timer events that belong elsewhere.
    pub fn handle_event(&mut self, event: CarouselEvent) -> bool {
        match event {
            CarouselEvent::HoverEnter => self.set_paused(true),
            CarouselEvent::HoverLeave => self.set_paused(false),
            CarouselEvent::ClickPrevious => self.click_previous(),
            CarouselEvent::ClickNext => self.click_next(),
            CarouselEvent::Resize(width) => self.on_resize(width),
            CarouselEvent::Timer(handle) => return self.on_timer(handle),
        }
        true
    }

    /// Offset for the current index
    pub fn offset(&self) -> Offset {
        let amount = i32::try_from(self.current_index)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.config.item_stride)
            .saturating_neg();
        Offset::along(self.config.axis, amount)
    }

    /// Indices of the items currently in view
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.current_index + self.config.visible_count).min(self.total_items);
        self.current_index..end
    }

    pub fn is_desktop(&self, viewport_width: u32) -> bool {
        viewport_width >= self.config.desktop_min_width
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.auto_scroll.is_some()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn period(&self) -> Duration {
        Duration::from_millis(self.config.auto_scroll_period_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::RecordingSurface;
    use crate::config::Axis;
    use crate::timer::ManualTimer;

    const SEC: Duration = Duration::from_secs(1);

    type Controller = CarouselController<RecordingSurface, ManualTimer>;

    fn controller(total_items: usize) -> (Controller, ManualTimer) {
        let timer = ManualTimer::new();
        let carousel = CarouselController::new(
            CarouselConfig::default(),
            total_items,
            RecordingSurface::new(),
            timer.clone(),
        );
        (carousel, timer)
    }

    /// Advance the shared clock and feed expiries back into the controller
    fn run_for(carousel: &mut Controller, timer: &ManualTimer, by: Duration) {
        timer.advance_with(by, |handle| {
            carousel.on_timer(handle);
        });
    }

    fn assert_controls_match(carousel: &Controller) {
        let surface = carousel.surface();
        assert_eq!(
            surface.is_enabled(Control::Previous),
            carousel.current_index() != 0
        );
        assert_eq!(
            surface.is_enabled(Control::Next),
            carousel.current_index() != carousel.max_index()
        );
    }

    #[test]
    fn test_max_index_from_items() {
        let (carousel, _) = controller(7);
        assert_eq!(carousel.max_index(), 4);
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_paused());
        assert!(!carousel.is_auto_scrolling());
    }

    #[test]
    fn test_max_index_saturates_with_few_items() {
        let (mut carousel, _) = controller(2);
        assert_eq!(carousel.max_index(), 0);

        carousel.advance();
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.surface().next_enabled);
        assert_eq!(carousel.visible_range(), 0..2);
    }

    #[test]
    fn test_advance_sequence_wraps() {
        let (mut carousel, _) = controller(7);
        let mut seen = Vec::new();
        for _ in 0..7 {
            carousel.advance();
            seen.push(carousel.current_index());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0, 1, 2]);
    }

    #[test]
    fn test_retreat_stops_at_zero() {
        let (mut carousel, _) = controller(7);
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.current_index(), 2);

        carousel.retreat();
        assert_eq!(carousel.current_index(), 1);
        carousel.retreat();
        assert_eq!(carousel.current_index(), 0);
        carousel.retreat();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_index_stays_in_bounds_for_mixed_sequences() {
        let (mut carousel, _) = controller(9);
        // Small LCG so the walk is deterministic
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            if (seed >> 16) & 1 == 0 {
                carousel.advance();
            } else {
                carousel.retreat();
            }
            assert!(carousel.current_index() <= carousel.max_index());
            assert_controls_match(&carousel);
        }
    }

    #[test]
    fn test_render_applies_offset_and_controls() {
        let (mut carousel, _) = controller(7);
        carousel.render();
        assert_eq!(carousel.surface().offset, Offset::ZERO);
        assert!(!carousel.surface().previous_enabled);
        assert!(carousel.surface().next_enabled);

        for _ in 0..4 {
            carousel.advance();
        }
        assert_eq!(carousel.surface().offset, Offset { x: 0, y: -1320 });
        assert!(carousel.surface().previous_enabled);
        assert!(!carousel.surface().next_enabled);
        assert_eq!(carousel.visible_range(), 4..7);
    }

    #[test]
    fn test_horizontal_axis_offset() {
        let config = CarouselConfig {
            axis: Axis::Horizontal,
            item_stride: 100,
            ..Default::default()
        };
        let mut carousel =
            CarouselController::new(config, 5, RecordingSurface::new(), ManualTimer::new());
        carousel.advance();
        assert_eq!(carousel.surface().offset, Offset { x: -100, y: 0 });
    }

    #[test]
    fn test_huge_stride_saturates_instead_of_overflowing() {
        let config = CarouselConfig {
            item_stride: 2_000_000_000,
            ..Default::default()
        };
        let mut carousel =
            CarouselController::new(config, 7, RecordingSurface::new(), ManualTimer::new());
        carousel.advance();
        assert_eq!(carousel.surface().offset.y, -2_000_000_000);

        carousel.advance();
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.surface().offset.y, -i32::MAX);
        assert_controls_match(&carousel);
    }

    #[test]
    fn test_retreat_at_zero_still_renders() {
        let (mut carousel, _) = controller(7);
        carousel.retreat();
        assert_eq!(carousel.surface().renders, 1);
        assert_controls_match(&carousel);
    }

    #[test]
    fn test_init_narrow_viewport_does_not_scroll() {
        let (mut carousel, timer) = controller(7);
        carousel.init(1000);

        assert_eq!(carousel.surface().renders, 1);
        assert!(!carousel.is_auto_scrolling());
        run_for(&mut carousel, &timer, 20 * SEC);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_init_desktop_auto_scrolls() {
        let (mut carousel, timer) = controller(7);
        carousel.init(1280);
        assert!(carousel.is_auto_scrolling());

        run_for(&mut carousel, &timer, 4 * SEC);
        assert_eq!(carousel.current_index(), 0);
        run_for(&mut carousel, &timer, SEC);
        assert_eq!(carousel.current_index(), 1);
        run_for(&mut carousel, &timer, 20 * SEC);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_resize_starts_and_stops() {
        let (mut carousel, timer) = controller(7);
        carousel.init(1000);
        assert!(!carousel.is_auto_scrolling());

        carousel.on_resize(1400);
        assert!(carousel.is_auto_scrolling());
        run_for(&mut carousel, &timer, 5 * SEC);
        assert_eq!(carousel.current_index(), 1);

        carousel.on_resize(900);
        assert!(!carousel.is_auto_scrolling());
        assert_eq!(timer.scheduled_count(), 0);
        run_for(&mut carousel, &timer, 20 * SEC);
        assert_eq!(carousel.current_index(), 1);

        carousel.on_resize(800);
        assert!(!carousel.is_auto_scrolling());
    }

    #[test]
    fn test_resize_keeps_running_timer_phase() {
        let (mut carousel, timer) = controller(7);
        carousel.init(1400);
        run_for(&mut carousel, &timer, 3 * SEC);

        carousel.on_resize(1600);
        run_for(&mut carousel, &timer, 2 * SEC);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(timer.scheduled_count(), 1);
    }

    #[test]
    fn test_paused_tick_is_skipped() {
        let (mut carousel, timer) = controller(7);
        carousel.init(1400);
        carousel.set_paused(true);

        run_for(&mut carousel, &timer, 5 * SEC);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_auto_scrolling());

        carousel.set_paused(false);
        run_for(&mut carousel, &timer, 5 * SEC);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_start_auto_scroll_is_idempotent() {
        let (mut carousel, timer) = controller(7);
        carousel.start_auto_scroll();
        carousel.start_auto_scroll();
        assert_eq!(timer.scheduled_count(), 1);

        run_for(&mut carousel, &timer, 5 * SEC);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_stop_without_timer_is_noop() {
        let (mut carousel, timer) = controller(7);
        carousel.stop_auto_scroll();
        assert_eq!(timer.scheduled_count(), 0);
    }

    #[test]
    fn test_click_resets_auto_scroll_phase() {
        let (mut carousel, timer) = controller(7);
        carousel.init(1400);

        run_for(&mut carousel, &timer, 3 * SEC);
        carousel.click_next();
        assert_eq!(carousel.current_index(), 1);

        // The old phase would have ticked at 5s
        run_for(&mut carousel, &timer, 4 * SEC);
        assert_eq!(carousel.current_index(), 1);
        run_for(&mut carousel, &timer, SEC);
        assert_eq!(carousel.current_index(), 2);

        carousel.click_previous();
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(timer.scheduled_count(), 1);
    }

    #[test]
    fn test_click_always_restarts_auto_scroll() {
        let (mut carousel, _) = controller(7);
        carousel.init(1000);
        carousel.click_previous();
        assert!(carousel.is_auto_scrolling());

        carousel.on_resize(1000);
        assert!(!carousel.is_auto_scrolling());
    }

    #[test]
    fn test_stale_timer_handle_is_ignored() {
        let (mut carousel, _) = controller(7);
        carousel.start_auto_scroll();
        carousel.stop_auto_scroll();

        assert!(!carousel.on_timer(TimerHandle::new(1)));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_handle_event_dispatch() {
        let (mut carousel, timer) = controller(7);
        carousel.init(1000);

        carousel.handle_event(CarouselEvent::HoverEnter);
        assert!(carousel.is_paused());
        carousel.handle_event(CarouselEvent::HoverLeave);
        assert!(!carousel.is_paused());

        carousel.handle_event(CarouselEvent::ClickNext);
        assert_eq!(carousel.current_index(), 1);
        carousel.handle_event(CarouselEvent::ClickPrevious);
        assert_eq!(carousel.current_index(), 0);

        carousel.handle_event(CarouselEvent::Resize(1400));
        for handle in timer.advance(5 * SEC) {
            assert!(carousel.handle_event(CarouselEvent::Timer(handle)));
        }
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.handle_event(CarouselEvent::Timer(TimerHandle::new(999))));
    }
}
