//! The presentation side of the motion drivers: what they may read from
//! and write to an element.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// All elements matching `selectors`, in document order.
pub fn query_all(selectors: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document()?.query_selector_all(selectors)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub trait TextSink {
    fn set_text(&self, text: &str);
}

pub trait ClassSink {
    fn add_class(&self, class: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollGeometry {
    pub fn max_offset(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// A horizontally scrollable strip.
pub trait ScrollSurface {
    fn geometry(&self) -> ScrollGeometry;
    fn scroll_to(&self, left: f64);
    fn scroll_by(&self, delta: f64);
}

impl TextSink for Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

impl ClassSink for Element {
    fn add_class(&self, class: &str) {
        if !self.is_connected() {
            return;
        }
        if let Err(err) = self.class_list().add_1(class) {
            log::warn!("Failed to add class {}: {:?}", class, err);
        }
    }
}

fn smooth_left(left: f64) -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    options
}

impl ScrollSurface for Element {
    fn geometry(&self) -> ScrollGeometry {
        ScrollGeometry {
            scroll_left: self.scroll_left() as f64,
            scroll_width: self.scroll_width() as f64,
            client_width: self.client_width() as f64,
        }
    }

    fn scroll_to(&self, left: f64) {
        self.scroll_to_with_scroll_to_options(&smooth_left(left));
    }

    fn scroll_by(&self, delta: f64) {
        self.scroll_by_with_scroll_to_options(&smooth_left(delta));
    }
}
