use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::use_reveal_on_scroll;
use crate::components::stat_counter::StatCounter;
use crate::Route;

const INITIATIVE_REVEAL_TARGETS: &str = ".section-header, .module-card, .stat-item";

static MODULES: [(&str, &str); 4] = [
    ("Mathematical Thinking", "Logic, proof and problem solving as a foundation for every course."),
    ("Computing", "Programming and algorithms taught through mathematical models."),
    ("Data & Statistics", "Working with real data, uncertainty and inference."),
    ("Projects", "A capstone with a mentor, published on the college portal."),
];

/// Internet College initiative page.
#[function_component(InternetCollege)]
pub fn internet_college() -> Html {
    use_reveal_on_scroll(INITIATIVE_REVEAL_TARGETS);

    html! {
        <div class="initiatives-page">
            <section class="initiative-hero">
                <div class="container">
                    <span class="hero-badge">{"Initiative"}</span>
                    <h1>{"Internet College"}</h1>
                    <p>{"University-level mathematics and computing, online and open to anyone with an internet connection."}</p>
                </div>
            </section>

            <section class="stats">
                <div class="container stats-grid">
                    <StatCounter target={8000} suffix="+" label="Learners Enrolled" />
                    <StatCounter target={60} label="Course Modules" />
                    <StatCounter target={120} label="Mentors" />
                </div>
            </section>

            <section class="initiative-modules">
                <div class="container">
                    <div class="section-header">
                        <h2>{"What you will study"}</h2>
                    </div>
                    <div class="modules-grid">
                        { for MODULES.iter().map(|(title, summary)| html! {
                            <div class="module-card">
                                <h3>{*title}</h3>
                                <p>{*summary}</p>
                            </div>
                        })}
                    </div>
                    <Link<Route> to={Route::Home} classes="btn btn-outline">
                        {"Back to Home"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
