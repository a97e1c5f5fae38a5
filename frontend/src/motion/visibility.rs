//! One-shot "became visible" notifications on top of IntersectionObserver.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::surface::DomError;

// Browsers report ratios such as 0.4999 for a half-visible element.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be inside the viewport.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
}

impl VisibilityOptions {
    pub fn counters() -> Self {
        Self {
            threshold: 0.5,
            root_margin: "0px".to_string(),
        }
    }

    pub fn reveal() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Sighting {
    pub fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

/// Fire-once bookkeeping for a set of watched targets.
#[derive(Debug)]
pub struct FireOnce<K> {
    watching: Vec<K>,
    fired: Vec<K>,
}

impl<K> Default for FireOnce<K> {
    fn default() -> Self {
        Self {
            watching: Vec::new(),
            fired: Vec::new(),
        }
    }
}

impl<K: PartialEq + Clone> FireOnce<K> {
    /// Starts watching `key` unless it is already watched or has fired.
    pub fn watch(&mut self, key: K) {
        if !self.watching.contains(&key) && !self.fired.contains(&key) {
            self.watching.push(key);
        }
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.watching.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.watching.is_empty()
    }

    /// Keys from `batch` that crossed `threshold`, in arrival order. They
    /// are no longer watched afterwards.
    pub fn take_visible<I>(&mut self, batch: I, threshold: f64) -> Vec<K>
    where
        I: IntoIterator<Item = (K, Sighting)>,
    {
        let mut visible = Vec::new();
        for (key, sighting) in batch {
            if !sighting.crosses(threshold) {
                continue;
            }
            if let Some(index) = self.watching.iter().position(|watched| *watched == key) {
                let key = self.watching.remove(index);
                self.fired.push(key.clone());
                visible.push(key);
            }
        }
        visible
    }
}

/// Live IntersectionObserver. Disconnects when dropped.
pub struct ViewportObserver {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl ViewportObserver {
    /// Observes `elements` and calls `on_visible` with each batch of
    /// elements that became visible, in the order the browser reported
    /// them. Every element is reported at most once.
    pub fn watch<F>(elements: Vec<Element>, options: &VisibilityOptions, mut on_visible: F) -> Result<Self, DomError>
    where
        F: FnMut(Vec<Element>) + 'static,
    {
        if elements.is_empty() {
            return Ok(Self {
                observer: None,
                _callback: None,
            });
        }

        let tracker = Rc::new(RefCell::new(FireOnce::default()));
        for element in &elements {
            tracker.borrow_mut().watch(element.clone());
        }

        let threshold = options.threshold;
        let callback_tracker = tracker.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let batch = entries.iter().filter_map(|entry| {
                    let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                    let sighting = Sighting {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    Some((entry.target(), sighting))
                });
                let visible = callback_tracker.borrow_mut().take_visible(batch, threshold);
                if visible.is_empty() {
                    return;
                }
                for element in &visible {
                    observer.unobserve(element);
                }
                on_visible(visible);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for element in &elements {
            observer.observe(element);
        }

        Ok(Self {
            observer: Some(observer),
            _callback: Some(callback),
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(ratio: f64) -> Sighting {
        Sighting {
            is_intersecting: true,
            ratio,
        }
    }

    #[test]
    fn reports_each_key_once() {
        let mut tracker = FireOnce::default();
        tracker.watch("stats");
        tracker.watch("about");

        let first = tracker.take_visible(vec![("stats", seen(0.6))], 0.5);
        assert_eq!(first, vec!["stats"]);

        let again = tracker.take_visible(vec![("stats", seen(1.0)), ("about", seen(0.2))], 0.5);
        assert!(again.is_empty());
        assert!(tracker.is_watching(&"about"));
    }

    #[test]
    fn fired_keys_cannot_be_rearmed() {
        let mut tracker = FireOnce::default();
        tracker.watch(1);
        assert_eq!(tracker.take_visible(vec![(1, seen(1.0))], 0.1), vec![1]);
        tracker.watch(1);
        assert!(tracker.is_empty());
    }

    #[test]
    fn keeps_arrival_order_not_watch_order() {
        let mut tracker = FireOnce::default();
        for key in ["a", "b", "c"] {
            tracker.watch(key);
        }
        let batch = vec![("c", seen(0.3)), ("a", seen(0.3)), ("b", seen(0.3))];
        assert_eq!(tracker.take_visible(batch, 0.1), vec!["c", "a", "b"]);
    }

    #[test]
    fn below_threshold_or_leaving_is_ignored() {
        let mut tracker = FireOnce::default();
        tracker.watch("card");
        let leaving = Sighting {
            is_intersecting: false,
            ratio: 0.0,
        };
        assert!(tracker.take_visible(vec![("card", leaving)], 0.1).is_empty());
        assert!(tracker.take_visible(vec![("card", seen(0.3))], 0.5).is_empty());
        // rounding just under the threshold still counts
        assert_eq!(tracker.take_visible(vec![("card", seen(0.4995))], 0.5), vec!["card"]);
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let mut tracker: FireOnce<&str> = FireOnce::default();
        assert!(tracker.take_visible(vec![("ghost", seen(1.0))], 0.1).is_empty());
    }

    #[test]
    fn presets_match_site_behavior() {
        assert_eq!(VisibilityOptions::counters().threshold, 0.5);
        let reveal = VisibilityOptions::reveal();
        assert_eq!(reveal.threshold, 0.1);
        assert_eq!(reveal.root_margin, "0px 0px -50px 0px");
    }
}
