use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::motion::counter::{animate_counter, CounterAnimation};
use crate::motion::scheduler::BrowserScheduler;
use crate::motion::visibility::{ViewportObserver, VisibilityOptions};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u64,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// A number that counts up from zero the first time half of it is on
/// screen.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let number_ref = use_node_ref();

    {
        let number_ref = number_ref.clone();
        use_effect_with_deps(
            move |target| {
                let target = *target;
                let duration = config::motion().counter_duration_ms;
                let animation: Rc<RefCell<Option<CounterAnimation<BrowserScheduler>>>> = Rc::new(RefCell::new(None));

                let observer = number_ref.cast::<Element>().and_then(|element| {
                    let slot = animation.clone();
                    ViewportObserver::watch(vec![element], &VisibilityOptions::counters(), move |visible| {
                        for element in visible {
                            *slot.borrow_mut() = Some(animate_counter(&BrowserScheduler, target, duration, element));
                        }
                    })
                    .map_err(|err| log::warn!("Counter observer unavailable: {}", err))
                    .ok()
                });

                move || {
                    drop(observer);
                    animation.borrow_mut().take();
                }
            },
            props.target,
        );
    }

    html! {
        <div class="stat-item">
            <div class="stat-value">
                <span class="stat-number" ref={number_ref}>{"0"}</span>
                <span class="stat-suffix">{props.suffix.clone()}</span>
            </div>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}
