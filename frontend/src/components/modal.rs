use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Film festival announcement that pops up shortly after the home page
/// loads.
#[function_component(FestivalModal)]
pub fn festival_modal() -> Html {
    let open = use_state(|| false);

    {
        let open = open.clone();
        use_effect_with_deps(
            move |_| {
                let delay = config::motion().modal_delay_ms;
                let timeout = Timeout::new(delay, move || {
                    open.set(true);
                });
                // dropping the handle cancels the popup on early unmount
                move || drop(timeout)
            },
            (),
        );
    }

    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    if !*open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-card" onclick={keep_open}>
                <button class="modal-close" aria-label="Close" onclick={close.clone()}>{"×"}</button>
                <span class="modal-badge">{"Now accepting entries"}</span>
                <h2>{"Mathematics Film Festival 2026"}</h2>
                <p>
                    {"Short films that make mathematics visible. Submit your film or join us for the screenings."}
                </p>
                <div class="modal-actions" onclick={close}>
                    <Link<Route> to={Route::FilmFestival} classes="btn btn-primary">
                        {"Explore the Festival"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
