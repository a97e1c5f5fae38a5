//! Timer and animation-frame scheduling.
//!
//! Every registration returns a handle; dropping the handle cancels the
//! pending callback. Components keep the handles they own and let them go
//! on unmount, so nothing fires against a removed element.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    /// Milliseconds on the same clock as frame timestamps.
    fn now(&self) -> f64;

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> Self::Handle;

    /// Runs `callback` with the frame timestamp on the next animation frame.
    fn frame(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

#[derive(Clone, Debug, Default)]
pub struct BrowserScheduler;

pub enum BrowserHandle {
    Timeout(Timeout),
    Interval(Interval),
    Frame(AnimationFrame),
    Inert,
}

/// Pending `requestAnimationFrame` callback, cancelled on drop.
pub struct AnimationFrame {
    id: i32,
    cancelled: Rc<Cell<bool>>,
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        self.cancelled.set(true);
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserHandle;

    fn now(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or(0.0)
    }

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> BrowserHandle {
        BrowserHandle::Timeout(Timeout::new(millis, callback))
    }

    fn interval(&self, millis: u32, mut callback: Box<dyn FnMut()>) -> BrowserHandle {
        BrowserHandle::Interval(Interval::new(millis, move || callback()))
    }

    fn frame(&self, callback: Box<dyn FnOnce(f64)>) -> BrowserHandle {
        let Some(window) = web_sys::window() else {
            log::warn!("No window available, animation frame skipped");
            return BrowserHandle::Inert;
        };
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        // once_into_js frees itself after the call, so the handle may be
        // dropped from inside its own callback.
        let js_callback = Closure::once_into_js(move |timestamp: f64| {
            if !flag.get() {
                callback(timestamp);
            }
        });
        match window.request_animation_frame(js_callback.unchecked_ref()) {
            Ok(id) => BrowserHandle::Frame(AnimationFrame { id, cancelled }),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {:?}", err);
                BrowserHandle::Inert
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! Virtual clock used by the unit tests.

    use super::Scheduler;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::{Rc, Weak};

    pub const FRAME_MS: f64 = 16.0;

    enum Work {
        Once(Box<dyn FnOnce()>),
        Repeat(f64, Box<dyn FnMut()>),
        Frame(Box<dyn FnOnce(f64)>),
    }

    struct Task {
        id: u64,
        due: f64,
        work: Work,
    }

    #[derive(Default)]
    struct Timeline {
        now: f64,
        next_id: u64,
        tasks: Vec<Task>,
        // Repeating tasks dropped while their callback was running.
        dropped_while_running: HashSet<u64>,
    }

    impl Timeline {
        fn push(&mut self, due: f64, work: Work) -> u64 {
            let id = self.next_id;
            self.next_id += 1;
            self.tasks.push(Task { id, due, work });
            id
        }

        fn pop_due(&mut self, until: f64) -> Option<Task> {
            let index = self
                .tasks
                .iter()
                .enumerate()
                .filter(|(_, task)| task.due <= until)
                .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)))
                .map(|(index, _)| index)?;
            Some(self.tasks.remove(index))
        }
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        timeline: Rc<RefCell<Timeline>>,
    }

    pub struct ManualHandle {
        id: u64,
        timeline: Weak<RefCell<Timeline>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(timeline) = self.timeline.upgrade() {
                let mut timeline = timeline.borrow_mut();
                let before = timeline.tasks.len();
                timeline.tasks.retain(|task| task.id != self.id);
                if timeline.tasks.len() == before {
                    timeline.dropped_while_running.insert(self.id);
                }
            }
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.timeline.borrow().tasks.len()
        }

        /// Moves the clock forward, running everything that falls due.
        pub fn advance(&self, millis: f64) {
            let until = self.timeline.borrow().now + millis;
            loop {
                let task = {
                    let mut timeline = self.timeline.borrow_mut();
                    match timeline.pop_due(until) {
                        Some(task) => {
                            timeline.now = task.due;
                            task
                        }
                        None => break,
                    }
                };
                match task.work {
                    Work::Once(callback) => callback(),
                    Work::Frame(callback) => callback(task.due),
                    Work::Repeat(period, mut callback) => {
                        callback();
                        let mut timeline = self.timeline.borrow_mut();
                        if !timeline.dropped_while_running.remove(&task.id) {
                            timeline.tasks.push(Task {
                                id: task.id,
                                due: task.due + period,
                                work: Work::Repeat(period, callback),
                            });
                        }
                    }
                }
            }
            self.timeline.borrow_mut().now = until;
        }

        fn register(&self, delay: f64, work: Work) -> ManualHandle {
            let mut timeline = self.timeline.borrow_mut();
            let due = timeline.now + delay;
            let id = timeline.push(due, work);
            ManualHandle {
                id,
                timeline: Rc::downgrade(&self.timeline),
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn now(&self) -> f64 {
            self.timeline.borrow().now
        }

        fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            self.register(millis as f64, Work::Once(callback))
        }

        fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> ManualHandle {
            self.register(millis as f64, Work::Repeat(millis as f64, callback))
        }

        fn frame(&self, callback: Box<dyn FnOnce(f64)>) -> ManualHandle {
            self.register(FRAME_MS, Work::Frame(callback))
        }
    }
}
