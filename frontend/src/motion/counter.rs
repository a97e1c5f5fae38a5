//! Count-up animation for the statistics band.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::scheduler::Scheduler;
use super::surface::TextSink;

/// Cubic ease-out over `progress` in [0, 1].
pub fn ease_out_cubic(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - progress).powi(3)
}

/// Formats `value` with comma thousands separators, e.g. `10,000`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u64),
    Finished(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterState {
    target: u64,
    started_at: f64,
    duration_ms: f64,
    display: u64,
}

impl CounterState {
    pub fn start(target: u64, now: f64, duration_ms: f64) -> Self {
        Self {
            target,
            started_at: now,
            duration_ms,
            display: 0,
        }
    }

    pub fn display(&self) -> u64 {
        self.display
    }

    pub fn advance(&mut self, now: f64) -> CounterFrame {
        let elapsed = (now - self.started_at).max(0.0);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration_ms).min(1.0)
        };

        if progress >= 1.0 {
            // the exact target, never the eased approximation
            self.display = self.target;
            return CounterFrame::Finished(self.target);
        }

        let eased = (ease_out_cubic(progress) * self.target as f64).floor() as u64;
        self.display = self.display.max(eased.min(self.target));
        CounterFrame::Running(self.display)
    }
}

/// A running count-up. Dropping it stops the frame loop.
pub struct CounterAnimation<S: Scheduler> {
    _frame: Rc<RefCell<Option<S::Handle>>>,
}

pub fn animate_counter<S, T>(scheduler: &S, target: u64, duration_ms: f64, sink: T) -> CounterAnimation<S>
where
    S: Scheduler,
    T: TextSink + 'static,
{
    let slot = Rc::new(RefCell::new(None));
    let state = Rc::new(RefCell::new(CounterState::start(target, scheduler.now(), duration_ms)));
    request_frame(scheduler.clone(), Rc::downgrade(&slot), state, Rc::new(sink));
    CounterAnimation { _frame: slot }
}

fn request_frame<S, T>(
    scheduler: S,
    slot: Weak<RefCell<Option<S::Handle>>>,
    state: Rc<RefCell<CounterState>>,
    sink: Rc<T>,
) where
    S: Scheduler,
    T: TextSink + 'static,
{
    let Some(owner) = slot.upgrade() else {
        return;
    };
    let next = scheduler.clone();
    let handle = scheduler.frame(Box::new(move |timestamp| {
        let frame = state.borrow_mut().advance(timestamp);
        match frame {
            CounterFrame::Running(value) => {
                sink.set_text(&group_thousands(value));
                request_frame(next, slot, state, sink);
            }
            CounterFrame::Finished(value) => {
                log::debug!("Counter finished at {}", value);
                sink.set_text(&group_thousands(value));
            }
        }
    }));
    *owner.borrow_mut() = Some(handle);
}
