use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::{self, ContactRequest, FormFlow, NewsletterRequest, SubmitStatus};

/// Flag cleared when the calling component unmounts, so late timers can
/// tell they have nothing left to update.
#[hook]
fn use_alive() -> Rc<RefCell<bool>> {
    let alive = use_mut_ref(|| true);
    {
        let alive = alive.clone();
        use_effect_with_deps(
            move |_| {
                *alive.borrow_mut() = true;
                move || *alive.borrow_mut() = false
            },
            (),
        );
    }
    alive
}

fn start_submission<T: Serialize + 'static>(
    form_name: &'static str,
    payload: T,
    form: Option<HtmlFormElement>,
    flow: Rc<RefCell<FormFlow>>,
    status: UseStateHandle<SubmitStatus>,
    alive: Rc<RefCell<bool>>,
) {
    if !flow.borrow_mut().begin() {
        return;
    }
    status.set(SubmitStatus::Submitting);

    let timing = config::motion();
    spawn_local(async move {
        let outcome = forms::submit(form_name, &payload, timing.form_latency_ms).await;
        if !*alive.borrow() {
            return;
        }
        flow.borrow_mut().complete();
        status.set(outcome);
        if let Some(form) = form {
            form.reset();
        }

        TimeoutFuture::new(timing.form_reset_ms).await;
        if !*alive.borrow() {
            return;
        }
        flow.borrow_mut().reset();
        status.set(flow.borrow().status());
    });
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>().map(|input| input.value()).unwrap_or_default()
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let flow = use_mut_ref(FormFlow::default);
    let status = use_state(|| SubmitStatus::Idle);
    let alive = use_alive();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let interest_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let flow = flow.clone();
        let status = status.clone();
        let (name_ref, email_ref, interest_ref, message_ref) =
            (name_ref.clone(), email_ref.clone(), interest_ref.clone(), message_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = ContactRequest {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                interest: interest_ref
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_default(),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };
            let form = e.target_dyn_into::<HtmlFormElement>();
            start_submission("contact", payload, form, flow.clone(), status.clone(), alive.clone());
        })
    };

    let label = flow.borrow().button_label("Send Message", "Sending...", "✓ Message Sent!");

    html! {
        <form class="contact-form" id="contact-form" {onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <label for="name">{"Full Name"}</label>
                    <input type="text" id="name" name="name" placeholder="Your name" ref={name_ref} />
                </div>
                <div class="form-group">
                    <label for="email">{"Email Address"}</label>
                    <input type="email" id="email" name="email" placeholder="you@example.com" ref={email_ref} />
                </div>
            </div>
            <div class="form-group">
                <label for="interest">{"I'm interested in"}</label>
                <select id="interest" name="interest" ref={interest_ref}>
                    <option value="courses">{"Online Courses"}</option>
                    <option value="teacher-training">{"Teacher Training"}</option>
                    <option value="startups">{"College of Startups"}</option>
                    <option value="partnership">{"Partnership"}</option>
                    <option value="other">{"Something else"}</option>
                </select>
            </div>
            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea id="message" name="message" rows="5" placeholder="How can we help?" ref={message_ref}></textarea>
            </div>
            <button
                type="submit"
                class={classes!("btn", "btn-primary", "btn-block", (*status == SubmitStatus::Success).then(|| "btn-success"))}
                disabled={*status != SubmitStatus::Idle}
            >
                {label}
            </button>
        </form>
    }
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let flow = use_mut_ref(FormFlow::default);
    let status = use_state(|| SubmitStatus::Idle);
    let alive = use_alive();
    let email_ref = use_node_ref();

    let onsubmit = {
        let flow = flow.clone();
        let status = status.clone();
        let email_ref = email_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = NewsletterRequest {
                email: input_value(&email_ref),
            };
            let form = e.target_dyn_into::<HtmlFormElement>();
            start_submission("newsletter", payload, form, flow.clone(), status.clone(), alive.clone());
        })
    };

    let label = flow.borrow().button_label("Subscribe", "Subscribing...", "✓ Subscribed!");

    html! {
        <form class="newsletter-form" id="newsletter-form" {onsubmit}>
            <input type="email" placeholder="Enter your email" ref={email_ref} />
            <button type="submit" class="btn btn-primary" disabled={*status != SubmitStatus::Idle}>
                {label}
            </button>
        </form>
    }
}
