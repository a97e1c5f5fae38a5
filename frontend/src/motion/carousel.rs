//! Auto-advancing card strip with wraparound and pause-on-interaction.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::scheduler::Scheduler;
use super::surface::{ScrollGeometry, ScrollSurface};
use crate::config::MotionConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    ManualScrolling,
    AutoAdvancing,
    PausedByHover,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollMove {
    /// Wrap to one end of the strip.
    JumpTo(f64),
    StepBy(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselSettings {
    pub step: f64,
    pub wrap_epsilon: f64,
    pub auto_interval_ms: u32,
    pub manual_window_ms: u32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::from(&MotionConfig::default())
    }
}

impl From<&MotionConfig> for CarouselSettings {
    fn from(config: &MotionConfig) -> Self {
        Self {
            step: config.carousel_step,
            wrap_epsilon: config.carousel_wrap_epsilon,
            auto_interval_ms: config.carousel_interval_ms,
            manual_window_ms: config.manual_window_ms,
        }
    }
}

#[derive(Debug)]
pub struct CarouselState<I> {
    items: Vec<I>,
    settings: CarouselSettings,
    offset: f64,
    max_offset: f64,
    hover_paused: bool,
    manual_active: bool,
    manual_generation: u64,
    auto_moved_last: bool,
}

impl<I> CarouselState<I> {
    pub fn new(items: Vec<I>, settings: CarouselSettings) -> Self {
        Self {
            items,
            settings,
            offset: 0.0,
            max_offset: 0.0,
            hover_paused: false,
            manual_active: false,
            manual_generation: 0,
            auto_moved_last: false,
        }
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// Takes the offset and extent the scroll surface currently reports.
    pub fn sync(&mut self, geometry: ScrollGeometry) {
        self.max_offset = geometry.max_offset();
        self.offset = geometry.scroll_left.clamp(0.0, self.max_offset);
    }

    /// Wrap policy: at (or within epsilon of) an end, jump to the
    /// opposite end instead of stepping.
    pub fn plan(&self, direction: Direction) -> ScrollMove {
        let epsilon = self.settings.wrap_epsilon;
        match direction {
            Direction::Right if self.offset >= self.max_offset - epsilon => ScrollMove::JumpTo(0.0),
            Direction::Right => ScrollMove::StepBy(self.settings.step),
            Direction::Left if self.offset <= epsilon => ScrollMove::JumpTo(self.max_offset),
            Direction::Left => ScrollMove::StepBy(-self.settings.step),
        }
    }

    pub fn apply(&mut self, movement: ScrollMove) -> f64 {
        self.offset = match movement {
            ScrollMove::JumpTo(offset) => offset,
            ScrollMove::StepBy(delta) => (self.offset + delta).clamp(0.0, self.max_offset),
        };
        self.offset
    }

    /// Starts (or restarts) the manual interaction window. The returned
    /// generation must be handed back to `end_manual`.
    pub fn begin_manual(&mut self) -> u64 {
        self.manual_active = true;
        self.auto_moved_last = false;
        self.manual_generation += 1;
        self.manual_generation
    }

    /// Closes the window only if no newer manual action reopened it.
    pub fn end_manual(&mut self, generation: u64) -> bool {
        if self.manual_active && generation == self.manual_generation {
            self.manual_active = false;
            true
        } else {
            false
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hover_paused = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hover_paused = false;
    }

    pub fn manual_scroll(&mut self, direction: Direction) -> (ScrollMove, u64) {
        let generation = self.begin_manual();
        let movement = self.plan(direction);
        self.apply(movement);
        (movement, generation)
    }

    /// One auto-advance tick. Returns `None` while hovered or inside the
    /// manual window.
    pub fn auto_tick(&mut self) -> Option<ScrollMove> {
        if self.hover_paused || self.manual_active {
            return None;
        }
        let movement = self.plan(Direction::Right);
        self.apply(movement);
        self.auto_moved_last = true;
        Some(movement)
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.hover_paused {
            CarouselPhase::PausedByHover
        } else if self.manual_active {
            CarouselPhase::ManualScrolling
        } else if self.auto_moved_last {
            CarouselPhase::AutoAdvancing
        } else {
            CarouselPhase::Idle
        }
    }
}

struct Inner<S: Scheduler, V, I> {
    state: CarouselState<I>,
    surface: V,
    scheduler: S,
    manual_timer: Option<S::Handle>,
}

impl<S: Scheduler, V: ScrollSurface, I> Inner<S, V, I> {
    fn perform(&mut self, movement: ScrollMove) {
        match movement {
            ScrollMove::JumpTo(offset) => {
                log::debug!("Carousel wraps to {}", offset);
                self.surface.scroll_to(offset);
            }
            ScrollMove::StepBy(delta) => self.surface.scroll_by(delta),
        }
    }

    fn open_manual_window(&mut self, generation: u64, owner: Weak<RefCell<Self>>)
    where
        S: Scheduler,
        V: 'static,
        I: 'static,
    {
        let window_ms = self.state.settings().manual_window_ms;
        let handle = self.scheduler.timeout(
            window_ms,
            Box::new(move || {
                if let Some(inner) = owner.upgrade() {
                    inner.borrow_mut().state.end_manual(generation);
                }
            }),
        );
        // replacing the handle cancels the previous window
        self.manual_timer = Some(handle);
    }
}

/// Mounted carousel: owns the auto-advance interval and the manual
/// window timer. Dropping it tears both down.
pub struct CarouselDriver<S: Scheduler, V, I> {
    inner: Rc<RefCell<Inner<S, V, I>>>,
    _ticker: S::Handle,
}

impl<S, V, I> CarouselDriver<S, V, I>
where
    S: Scheduler,
    V: ScrollSurface + 'static,
    I: 'static,
{
    pub fn mount(scheduler: S, surface: V, items: Vec<I>, settings: CarouselSettings) -> Self {
        let mut state = CarouselState::new(items, settings);
        state.sync(surface.geometry());
        let inner = Rc::new(RefCell::new(Inner {
            state,
            surface,
            scheduler: scheduler.clone(),
            manual_timer: None,
        }));

        let weak = Rc::downgrade(&inner);
        let ticker = scheduler.interval(
            settings.auto_interval_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let mut inner = inner.borrow_mut();
                let geometry = inner.surface.geometry();
                inner.state.sync(geometry);
                if let Some(movement) = inner.state.auto_tick() {
                    inner.perform(movement);
                }
            }),
        );

        Self { inner, _ticker: ticker }
    }

    /// Button press: step or wrap, then hold off auto-advance.
    pub fn scroll(&self, direction: Direction) {
        let owner = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        let geometry = inner.surface.geometry();
        inner.state.sync(geometry);
        let (movement, generation) = inner.state.manual_scroll(direction);
        inner.perform(movement);
        inner.open_manual_window(generation, owner);
    }

    /// Pointer drag by `delta` pixels. Never wraps.
    pub fn drag_by(&self, delta: f64) {
        let owner = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        let geometry = inner.surface.geometry();
        inner.state.sync(geometry);
        let generation = inner.state.begin_manual();
        inner.state.apply(ScrollMove::StepBy(delta));
        inner.surface.scroll_by(delta);
        inner.open_manual_window(generation, owner);
    }

    pub fn pointer_enter(&self) {
        self.inner.borrow_mut().state.pointer_enter();
    }

    pub fn pointer_leave(&self) {
        self.inner.borrow_mut().state.pointer_leave();
    }

    pub fn phase(&self) -> CarouselPhase {
        self.inner.borrow().state.phase()
    }

    pub fn item_count(&self) -> usize {
        self.inner.borrow().state.items().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scheduler::testing::ManualScheduler;
    use crate::motion::surface::testing::FakeStrip;

    // six 280px cards with 96px gaps and 60px side padding in a 1000px window
    fn six_card_strip() -> FakeStrip {
        FakeStrip::new(6.0 * 280.0 + 5.0 * 96.0 + 120.0, 1000.0)
    }

    fn films() -> Vec<&'static str> {
        vec![
            "The Golden Ratio",
            "Fractal Dreams",
            "Zero to Infinity",
            "The Calculus of Hope",
            "Geometric Nature",
            "Chaos Theory",
        ]
    }

    fn state_at(offset: f64, max: f64) -> CarouselState<()> {
        let mut state = CarouselState::new(Vec::new(), CarouselSettings::default());
        state.sync(ScrollGeometry {
            scroll_left: offset,
            scroll_width: max + 1000.0,
            client_width: 1000.0,
        });
        state
    }

    #[test]
    fn right_near_end_wraps_to_start() {
        let state = state_at(1275.0, 1280.0);
        assert_eq!(state.plan(Direction::Right), ScrollMove::JumpTo(0.0));
        let state = state_at(1270.0, 1280.0);
        assert_eq!(state.plan(Direction::Right), ScrollMove::JumpTo(0.0));
        let state = state_at(1269.0, 1280.0);
        assert_eq!(state.plan(Direction::Right), ScrollMove::StepBy(350.0));
    }

    #[test]
    fn left_near_start_wraps_to_end() {
        let state = state_at(10.0, 1280.0);
        assert_eq!(state.plan(Direction::Left), ScrollMove::JumpTo(1280.0));
        let state = state_at(11.0, 1280.0);
        assert_eq!(state.plan(Direction::Left), ScrollMove::StepBy(-350.0));
    }

    #[test]
    fn steps_clamp_to_extent() {
        let mut state = state_at(1100.0, 1280.0);
        assert_eq!(state.apply(ScrollMove::StepBy(350.0)), 1280.0);
        let mut state = state_at(200.0, 1280.0);
        assert_eq!(state.apply(ScrollMove::StepBy(-350.0)), 0.0);
    }

    #[test]
    fn stale_manual_window_does_not_end_newer_one() {
        let mut state = state_at(0.0, 1280.0);
        let first = state.begin_manual();
        let second = state.begin_manual();
        assert!(!state.end_manual(first));
        assert_eq!(state.phase(), CarouselPhase::ManualScrolling);
        assert!(state.end_manual(second));
        assert_eq!(state.phase(), CarouselPhase::Idle);
    }

    #[test]
    fn hover_blocks_auto_tick() {
        let mut state = state_at(0.0, 1280.0);
        state.pointer_enter();
        assert_eq!(state.phase(), CarouselPhase::PausedByHover);
        assert_eq!(state.auto_tick(), None);
        state.pointer_leave();
        assert_eq!(state.auto_tick(), Some(ScrollMove::StepBy(350.0)));
        assert_eq!(state.phase(), CarouselPhase::AutoAdvancing);
    }

    #[test]
    fn six_cards_wrap_right_from_near_end() {
        let scheduler = ManualScheduler::new();
        let strip = six_card_strip();
        let driver = CarouselDriver::mount(scheduler.clone(), strip.clone(), films(), CarouselSettings::default());
        assert_eq!(driver.item_count(), 6);

        let max = strip.geometry().max_offset();
        strip.set_offset(max - 5.0);
        driver.scroll(Direction::Right);

        assert_eq!(strip.offset(), 0.0);
    }

    #[test]
    fn six_cards_wrap_left_from_start() {
        let scheduler = ManualScheduler::new();
        let strip = six_card_strip();
        let driver = CarouselDriver::mount(scheduler, strip.clone(), films(), CarouselSettings::default());

        driver.scroll(Direction::Left);

        assert_eq!(strip.offset(), strip.geometry().max_offset());
    }

    #[test]
    fn auto_advances_every_three_seconds() {
        let scheduler = ManualScheduler::new();
        let strip = six_card_strip();
        let driver = CarouselDriver::mount(scheduler.clone(), strip.clone(), films(), CarouselSettings::default());
        assert_eq!(driver.phase(), CarouselPhase::Idle);

        scheduler.advance(2999.0);
        assert_eq!(strip.offset(), 0.0);
        scheduler.advance(1.0);
        assert_eq!(strip.offset(), 350.0);
        assert_eq!(driver.phase(), CarouselPhase::AutoAdvancing);
        scheduler.advance(3000.0);
        assert_eq!(strip.offset(), 700.0);
    }

    #[test]
    fn auto_advance_wraps_at_the_end() {
        let scheduler = ManualScheduler::new();
        let strip = six_card_strip();
        let _driver = CarouselDriver::mount(scheduler.clone(), strip.clone(), films(), CarouselSettings::default());
        let max = strip.geometry().max_offset();

        // 350, 700, 1050, max, then wrap
        scheduler.advance(12_000.0);
        assert_eq!(strip.offset(), max);
        scheduler.advance(3000.0);
        assert_eq!(strip.offset(), 0.0);
    }

    #[test]
    fn manual_scroll_suppresses_auto_for_four_seconds() {
        let scheduler = ManualScheduler::new();
        let strip = six_card_strip();
        let driver = CarouselDriver::mount(scheduler.clone(), strip.clone(), films(), CarouselSettings::default());

        scheduler.advance(1000.0);
        driver.scroll(Direction::Right);
        assert_eq!(strip.offset(), 350.0);
        assert_eq!(driver.phase(), CarouselPhase::ManualScrolling);

        // the interval fires at 3000 but the window runs until 5000
        scheduler.advance(3999.0);
        assert_eq!(strip.offset(), 350.0);

        scheduler.advance(1.0);
        assert_eq!(driver.phase(), CarouselPhase::Idle);

        // next tick at 6000
        scheduler.advance(1000.0);
        assert_eq!(strip.offset(), 700.0);
    }

    #[test]
    fn new_manual_action_restarts_the_window() {
        let scheduler = ManualScheduler::new();
        let strip = six_card_strip();
        let driver = CarouselDriver::mount(scheduler.clone(), strip.clone(), films(), CarouselSettings::default());

        driver.scroll(Direction::Right); // window until 4000
        scheduler.advance(3500.0);
        driver.scroll(Direction::Right); // window until 7500
        assert_eq!(strip.offset(), 700.0);

        // ticks at 6000 must still be suppressed
        scheduler.advance(3000.0);
        assert_eq!(strip.offset(), 700.0);
        assert_eq!(driver.phase(), CarouselPhase::ManualScrolling);

        // window closed at 7500, tick at 9000 moves
        scheduler.advance(2500.0);
        assert_eq!(strip.offset(), 1050.0);
    }

    #[test]
    fn hover_pauses_until_pointer_leaves() {
        let scheduler = ManualScheduler::new();
        let strip = six_card_strip();
        let driver = CarouselDriver::mount(scheduler.clone(), strip.clone(), films(), CarouselSettings::default());

        driver.pointer_enter();
        scheduler.advance(9000.0);
        assert_eq!(strip.offset(), 0.0);

        driver.pointer_leave();
        scheduler.advance(3000.0);
        assert_eq!(strip.offset(), 350.0);
    }

    #[test]
    fn drag_counts_as_manual_interaction() {
        let scheduler = ManualScheduler::new();
        let strip = six_card_strip();
        let driver = CarouselDriver::mount(scheduler.clone(), strip.clone(), films(), CarouselSettings::default());

        scheduler.advance(2500.0);
        driver.drag_by(120.0);
        assert_eq!(strip.offset(), 120.0);

        scheduler.advance(500.0);
        assert_eq!(strip.offset(), 120.0);
        assert_eq!(driver.phase(), CarouselPhase::ManualScrolling);
    }

    #[test]
    fn unmount_stops_all_writes() {
        let scheduler = ManualScheduler::new();
        let strip = six_card_strip();
        let driver = CarouselDriver::mount(scheduler.clone(), strip.clone(), films(), CarouselSettings::default());

        driver.scroll(Direction::Right);
        let writes = *strip.writes.borrow();
        drop(driver);
        scheduler.advance(30_000.0);

        assert_eq!(*strip.writes.borrow(), writes);
        assert_eq!(scheduler.pending(), 0);
    }
}
