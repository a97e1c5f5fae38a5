//! Staggered reveal-on-scroll.
//!
//! Elements that become visible in the same observer callback are
//! activated one after another, `stagger_ms` apart, in the order the
//! notifications arrived.

use std::cell::RefCell;
use std::rc::Rc;

use super::scheduler::Scheduler;
use super::surface::ClassSink;

pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub active: bool,
    pub stagger_index: usize,
}

#[derive(Debug)]
pub struct RevealSequencer<K> {
    stagger_ms: u32,
    states: Vec<(K, RevealState)>,
}

impl<K: PartialEq + Clone> RevealSequencer<K> {
    pub fn new(stagger_ms: u32) -> Self {
        Self {
            stagger_ms,
            states: Vec::new(),
        }
    }

    /// Assigns each newly seen key its arrival index within `batch` and
    /// returns the activation delay for it. Keys already known are skipped
    /// without consuming an index.
    pub fn schedule(&mut self, batch: Vec<K>) -> Vec<(K, u32)> {
        let mut scheduled = Vec::with_capacity(batch.len());
        for key in batch {
            if self.state(&key).is_some() {
                continue;
            }
            let stagger_index = scheduled.len();
            self.states.push((
                key.clone(),
                RevealState {
                    active: false,
                    stagger_index,
                },
            ));
            scheduled.push((key, stagger_index as u32 * self.stagger_ms));
        }
        scheduled
    }

    /// One-way flip. Returns true only the first time for a scheduled key.
    pub fn activate(&mut self, key: &K) -> bool {
        match self.states.iter_mut().find(|(known, _)| known == key) {
            Some((_, state)) if !state.active => {
                state.active = true;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, key: &K) -> Option<RevealState> {
        self.states.iter().find(|(known, _)| known == key).map(|(_, state)| *state)
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.state(key).map(|state| state.active).unwrap_or(false)
    }
}

/// Runs the stagger timers. Dropping the driver cancels every pending
/// activation.
pub struct RevealDriver<S: Scheduler, K> {
    scheduler: S,
    sequencer: Rc<RefCell<RevealSequencer<K>>>,
    pending: Vec<(K, S::Handle)>,
}

impl<S, K> RevealDriver<S, K>
where
    S: Scheduler,
    K: ClassSink + PartialEq + Clone + 'static,
{
    pub fn new(scheduler: S, stagger_ms: u32) -> Self {
        Self {
            scheduler,
            sequencer: Rc::new(RefCell::new(RevealSequencer::new(stagger_ms))),
            pending: Vec::new(),
        }
    }

    /// Handles one observer callback's worth of visible elements.
    pub fn on_visible(&mut self, batch: Vec<K>) {
        let scheduled = self.sequencer.borrow_mut().schedule(batch);
        log::debug!("Revealing {} elements", scheduled.len());
        for (key, delay) in scheduled {
            let sequencer = Rc::downgrade(&self.sequencer);
            let target = key.clone();
            let handle = self.scheduler.timeout(
                delay,
                Box::new(move || {
                    let Some(sequencer) = sequencer.upgrade() else {
                        return;
                    };
                    if sequencer.borrow_mut().activate(&target) {
                        target.add_class(ACTIVE_CLASS);
                    }
                }),
            );
            self.pending.push((key, handle));
        }
    }

    /// Cancels the pending activation of an element that is going away.
    pub fn cancel(&mut self, key: &K) {
        self.pending.retain(|(pending, _)| pending != key);
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.sequencer.borrow().is_active(key)
    }
}
