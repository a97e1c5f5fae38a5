use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::motion::reveal::RevealDriver;
use crate::motion::scheduler::BrowserScheduler;
use crate::motion::surface::{query_all, ClassSink, DomError};
use crate::motion::visibility::{ViewportObserver, VisibilityOptions};

pub const REVEAL_CLASS: &str = "reveal";

pub const HOME_REVEAL_TARGETS: &str = ".section-header, .about-image, .about-content, .program-card, \
     .startups-content, .success-stories, .testimonial-card, \
     .event-card, .contact-info, .contact-form-card, .stat-item";

/// Tags every element matching `selectors` for reveal and activates them
/// with a stagger as they scroll into view. Everything is torn down when
/// the calling component unmounts.
#[hook]
pub fn use_reveal_on_scroll(selectors: &'static str) {
    use_effect_with_deps(
        move |selectors| {
            let mounted = match mount_reveal(selectors) {
                Ok(mounted) => Some(mounted),
                Err(err) => {
                    log::warn!("Reveal animations disabled: {}", err);
                    None
                }
            };
            move || drop(mounted)
        },
        selectors,
    );
}

type Mounted = (ViewportObserver, Rc<RefCell<RevealDriver<BrowserScheduler, web_sys::Element>>>);

fn mount_reveal(selectors: &str) -> Result<Mounted, DomError> {
    let elements = query_all(selectors)?;
    for element in &elements {
        element.add_class(REVEAL_CLASS);
    }
    log::debug!("Watching {} reveal targets", elements.len());

    let driver = Rc::new(RefCell::new(RevealDriver::new(
        BrowserScheduler,
        config::motion().reveal_stagger_ms,
    )));
    let sink = driver.clone();
    let observer = ViewportObserver::watch(elements, &VisibilityOptions::reveal(), move |visible| {
        sink.borrow_mut().on_visible(visible);
    })?;

    // observer first so no batch arrives after the driver is gone
    Ok((observer, driver))
}
