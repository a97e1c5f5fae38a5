use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::components::carousel::{Film, FilmCarousel};
use crate::motion::scroll::interpolate;
use crate::Route;

fn official_selections() -> Vec<Film> {
    vec![
        Film::new("The Golden Ratio", "Sarah Jenkins", "#e0e7ff"),
        Film::new("Fractal Dreams", "Rajiv Patel", "#fee2e2"),
        Film::new("Zero to Infinity", "Elena Rostova", "#d1fae5"),
        Film::new("The Calculus of Hope", "David Chen", "#e0e7ff"),
        Film::new("Geometric Nature", "Anita Roy", "#f3e8ff"),
        Film::new("Chaos Theory", "Marcus Webb", "#fae8ff"),
    ]
}

#[function_component(FilmFestival)]
pub fn film_festival() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let films = use_memo(|_| official_selections(), ());

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let drift = interpolate(scroll_y, (0.0, 1000.0), (0.0, 200.0));
    let rotate = interpolate(scroll_y, (0.0, 1000.0), (0.0, 45.0));
    let bubble = interpolate(scroll_y, (400.0, 1400.0), (0.0, 150.0));
    // 0 = dark festival header, 1 = light site header
    let header_mix = interpolate(scroll_y, (800.0, 1000.0), (0.0, 1.0));

    html! {
        <div class="film-festival-page" style={format!("--header-mix: {};", header_mix)}>
            <div class="parallax-shapes">
                <div class="shape shape-triangle" style={format!("transform: translateY({}px) rotate({}deg);", drift, rotate)}>
                    <svg width="400" height="400" viewBox="0 0 100 100">
                        <circle cx="50" cy="50" r="40" stroke="#0B0E25" stroke-width="0.5" fill="none" />
                        <path d="M50 10 L90 90 L10 90 Z" stroke="#0B0E25" stroke-width="0.5" fill="none" />
                    </svg>
                </div>
                <div class="shape shape-square" style={format!("transform: translate(-50px, {}px);", drift)}>
                    <svg width="300" height="300" viewBox="0 0 100 100">
                        <rect x="20" y="20" width="60" height="60" stroke="#0B0E25" stroke-width="0.5" fill="none" />
                    </svg>
                </div>
            </div>

            <section class="festival-hero">
                <div class="container">
                    <span class="hero-badge">{"Mathematics Film Festival 2026"}</span>
                    <h1>{"Stories told in numbers"}</h1>
                    <p>{"Short films from students, researchers and artists that make mathematical ideas visible."}</p>
                </div>
            </section>

            <section class="festival-reveal" style={format!("clip-path: circle({}% at 50% 100%);", bubble)}>
                <div class="container">
                    <h2>{"About the festival"}</h2>
                    <p>
                        {"The festival celebrates films that explore mathematics, from documentaries about great discoveries to animations of abstract structures. Selected films are screened in partner schools and online."}
                    </p>
                </div>
            </section>

            <section class="festival-selections">
                <div class="container">
                    <h2 class="selections-title">{"Official Selections"}</h2>
                    <FilmCarousel films={(*films).clone()} />
                </div>
            </section>

            <section class="festival-cta">
                <div class="container">
                    <h2>{"Submit your film"}</h2>
                    <p>{"Entries are open to everyone. Films should be under fifteen minutes."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Back to the Foundation"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
