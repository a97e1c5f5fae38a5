use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

mod config;
mod forms;
mod motion;
mod components {
    pub mod carousel;
    pub mod forms;
    pub mod modal;
    pub mod reveal;
    pub mod stat_counter;
}
mod pages {
    pub mod film_festival;
    pub mod home;
    pub mod initiatives;
}

use motion::scroll::{active_section, anchor_target, header_scrolled, SectionBounds};
use motion::surface::{document, query_all, window};
use pages::{
    film_festival::FilmFestival,
    home::Home,
    initiatives::InternetCollege,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/filmfestival")]
    FilmFestival,
    #[at("/initiatives/internetCollege")]
    InternetCollege,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::FilmFestival => {
            info!("Rendering Film Festival page");
            html! { <FilmFestival /> }
        },
        Route::InternetCollege => {
            info!("Rendering Internet College page");
            html! { <InternetCollege /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}

/// Smoothly scrolls an in-page section below the sticky header. Missing
/// sections are ignored.
pub fn scroll_to_section(id: &str) {
    let Ok(document) = document() else {
        return;
    };
    let Some(section) = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("No section #{} on this page", id);
        return;
    };
    if let Ok(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(anchor_target(section.offset_top() as f64, config::motion().header_offset));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn section_bounds() -> Vec<SectionBounds> {
    query_all("section[id]")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

static NAV_SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("programs", "Courses"),
    ("startups", "Startups"),
    ("testimonials", "Success"),
    ("contact", "Contact"),
];


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let header_ref = use_node_ref();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let on_home = matches!(route, Some(Route::Home) | Some(Route::NotFound) | None);

    let is_scrolled = header_scrolled(scroll_y, config::motion().header_scrolled_threshold);
    let header_height = header_ref
        .cast::<HtmlElement>()
        .map(|header| header.offset_height() as f64)
        .unwrap_or(config::motion().header_offset);
    let sections = if on_home { section_bounds() } else { Vec::new() };
    let current = active_section(scroll_y, &sections, header_height).map(str::to_string);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            if on_home {
                scroll_to_section(id);
            } else if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let menu_class = if *menu_open {
        "nav mobile-menu-open"
    } else {
        "nav"
    };

    html! {
        <header ref={header_ref} class={classes!("header", is_scrolled.then(|| "scrolled"))}>
            <div class="container header-content">
                <Link<Route> to={Route::Home} classes="logo">
                    <img src="/assets/logo.png" alt="MSF Logo" class="logo-img" />
                    <div class="logo-text">
                        <span class="logo-name">{"Mathematical Sciences"}</span>
                        <span class="logo-sub">{"Foundation"}</span>
                    </div>
                </Link<Route>>

                <button class={classes!("mobile-toggle", (*menu_open).then(|| "active"))} onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={menu_class}>
                    <ul class="nav-list">
                        { for NAV_SECTIONS.iter().map(|(id, label)| {
                            let active = current.as_deref() == Some(*id);
                            html! {
                                <li>
                                    <a href={format!("#{}", id)} class={classes!("nav-link", active.then(|| "active"))} onclick={go_to(*id)}>
                                        {*label}
                                    </a>
                                </li>
                            }
                        })}
                        <li>
                            <Link<Route> to={Route::FilmFestival} classes="nav-link">
                                {"Film Festival"}
                            </Link<Route>>
                        </li>
                    </ul>
                </nav>

                <div class="header-actions">
                    <a href="#contact" class="btn btn-primary" onclick={go_to("contact")}>{"Enroll Now"}</a>
                </div>
            </div>
        </header>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
