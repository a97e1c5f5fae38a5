use chrono::Datelike;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::components::forms::{ContactForm, NewsletterForm};
use crate::components::modal::FestivalModal;
use crate::components::reveal::{use_reveal_on_scroll, HOME_REVEAL_TARGETS};
use crate::components::stat_counter::StatCounter;
use crate::motion::scroll::hero_parallax;
use crate::{scroll_to_section, Route};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Audience {
    Students,
    Teachers,
    Parents,
}

impl Audience {
    const ALL: [Audience; 3] = [Audience::Students, Audience::Teachers, Audience::Parents];

    fn label(&self) -> &'static str {
        match self {
            Audience::Students => "For Students",
            Audience::Teachers => "For Teachers",
            Audience::Parents => "For Parents",
        }
    }
}

struct Program {
    badge: &'static str,
    title: &'static str,
    summary: &'static str,
    duration: &'static str,
    level: &'static str,
}

static PROGRAMS: [Program; 6] = [
    Program {
        badge: "New",
        title: "Computational Thinking for Beginners",
        summary: "Break problems into steps, spot patterns and build algorithms without writing code first.",
        duration: "8 weeks",
        level: "Beginner",
    },
    Program {
        badge: "Popular",
        title: "Foundations of Mathematical Reasoning",
        summary: "Proofs, logic and the habits of thought behind every branch of mathematics.",
        duration: "10 weeks",
        level: "Intermediate",
    },
    Program {
        badge: "Teachers",
        title: "Teaching Mathematics Creatively",
        summary: "Classroom strategies that turn abstract ideas into hands-on exploration.",
        duration: "6 weeks",
        level: "Educators",
    },
    Program {
        badge: "Live",
        title: "Data Science Essentials",
        summary: "Statistics, visualisation and modelling with real datasets.",
        duration: "12 weeks",
        level: "Intermediate",
    },
    Program {
        badge: "Olympiad",
        title: "Problem Solving Circle",
        summary: "Weekly sessions on competition problems with mentors from the olympiad community.",
        duration: "Ongoing",
        level: "Advanced",
    },
    Program {
        badge: "Family",
        title: "Maths at Home",
        summary: "Games and puzzles parents can use to build number sense with their children.",
        duration: "4 weeks",
        level: "All ages",
    },
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "The computational thinking course changed how I approach every subject, not only maths.",
        name: "Ananya R.",
        role: "Class 11 student",
    },
    Testimonial {
        quote: "I now run puzzle hours in my school every week. The training gave me the confidence to try.",
        name: "Mr. Suresh K.",
        role: "Mathematics teacher",
    },
    Testimonial {
        quote: "The startup college connected our team with mentors who understood both the product and the maths.",
        name: "Priya & Arjun",
        role: "Founders, an edtech startup",
    },
];

struct SiteEvent {
    day: &'static str,
    month: &'static str,
    title: &'static str,
    detail: &'static str,
    action: &'static str,
}

static EVENTS: [SiteEvent; 3] = [
    SiteEvent {
        day: "14",
        month: "Mar",
        title: "Pi Day Celebration",
        detail: "Talks, games and a memorisation challenge for all ages.",
        action: "Learn More →",
    },
    SiteEvent {
        day: "22",
        month: "Apr",
        title: "Regional Maths Olympiad",
        detail: "Open to students from classes 6 to 12.",
        action: "Participate →",
    },
    SiteEvent {
        day: "10",
        month: "Jun",
        title: "Teacher Summer Workshop",
        detail: "Three days of hands-on sessions on inquiry-based teaching.",
        action: "Register →",
    },
];

fn section_link(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}

#[function_component(Home)]
pub fn home() -> Html {
    let active_tab = use_state(|| Audience::Students);
    let hero_ref = use_node_ref();
    let (_, scroll_y) = use_window_scroll();

    use_reveal_on_scroll(HOME_REVEAL_TARGETS);

    // past the hero the last frame stays in place
    let hero_style = use_mut_ref(|| None::<String>);
    if let Some(frame) = hero_ref
        .cast::<HtmlElement>()
        .and_then(|hero| hero_parallax(scroll_y, hero.offset_height() as f64))
    {
        *hero_style.borrow_mut() = Some(frame.style());
    }
    let hero_style = hero_style.borrow().clone();

    let year = chrono::Local::now().year();

    html! {
        <div class="home-page">
            <FestivalModal />

            <div class="announcement-bar">
                <p>
                    {"🎓 New Course Alert: "}<strong>{"Computational Thinking for Beginners"}</strong>{" - Enrolling Now! "}
                    <a href="#programs" onclick={section_link("programs")}>{"Learn More →"}</a>
                </p>
            </div>

            <section class="hero" id="home" ref={hero_ref}>
                <div class="container hero-content" style={hero_style}>
                    <span class="hero-badge">{"Mathematical Sciences Foundation"}</span>
                    <h1 class="hero-title">{"Empowering minds through "}<span class="highlight">{"mathematics"}</span></h1>
                    <p class="hero-subtitle">
                        {"Courses, teacher training and a college of startups built on the belief that mathematical thinking opens every door."}
                    </p>
                    <div class="hero-actions">
                        <a href="#programs" class="btn btn-primary btn-lg" onclick={section_link("programs")}>{"Explore Courses"}</a>
                        <a href="#about" class="btn btn-ghost btn-lg" onclick={section_link("about")}>{"Our Story"}</a>
                    </div>
                </div>
            </section>

            <section class="stats">
                <div class="container stats-grid">
                    <StatCounter target={25000} suffix="+" label="Students Reached" />
                    <StatCounter target={1200} suffix="+" label="Teachers Trained" />
                    <StatCounter target={40} label="Startups Incubated" />
                    <StatCounter target={25} label="Years of Impact" />
                </div>
            </section>

            <section class="about" id="about">
                <div class="container about-grid">
                    <div class="about-image">
                        <img src="/assets/about.jpg" alt="Students at a foundation workshop" loading="lazy" />
                    </div>
                    <div class="about-content">
                        <div class="section-header">
                            <span class="section-tag">{"About Us"}</span>
                            <h2>{"Mathematics for everyone"}</h2>
                        </div>
                        <p>
                            {"For over two decades the foundation has designed courses, trained teachers and supported young founders. We believe that clear reasoning is a skill anyone can learn."}
                        </p>
                        <ul class="about-points">
                            <li>{"University-recognised certificate courses"}</li>
                            <li>{"Workshops in schools across the country"}</li>
                            <li>{"Research-backed teaching material"}</li>
                        </ul>
                        <Link<Route> to={Route::InternetCollege} classes="btn btn-primary">
                            {"Discover the Internet College"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="programs" id="programs">
                <div class="container">
                    <div class="section-header">
                        <span class="section-tag">{"Courses"}</span>
                        <h2>{"Find your next course"}</h2>
                    </div>
                    <div class="program-tabs">
                        { for Audience::ALL.iter().map(|audience| {
                            let audience = *audience;
                            let onclick = {
                                let active_tab = active_tab.clone();
                                Callback::from(move |_: MouseEvent| active_tab.set(audience))
                            };
                            html! {
                                <button class={classes!("tab-btn", (*active_tab == audience).then(|| "active"))} {onclick}>
                                    {audience.label()}
                                </button>
                            }
                        })}
                    </div>
                    <div class="programs-grid">
                        { for PROGRAMS.iter().map(|program| html! {
                            <article class="program-card">
                                <span class="card-badge">{program.badge}</span>
                                <h3>{program.title}</h3>
                                <p>{program.summary}</p>
                                <div class="card-meta">
                                    <span>{program.duration}</span>
                                    <span>{program.level}</span>
                                </div>
                                <a href="#contact" class="card-btn" onclick={section_link("contact")}>{"Enroll Now →"}</a>
                            </article>
                        })}
                    </div>
                    <div class="programs-footer">
                        <a href="#contact" class="btn btn-outline" onclick={section_link("contact")}>{"Request a Custom Course"}</a>
                    </div>
                </div>
            </section>

            <section class="startups" id="startups">
                <div class="container startups-content">
                    <div class="section-header">
                        <span class="section-tag">{"College of Startups"}</span>
                        <h2>{"From idea to venture"}</h2>
                    </div>
                    <p>
                        {"A year-long programme where students build companies with mentoring, seed support and a community of founders."}
                    </p>
                    <ul class="startup-features">
                        <li>{"Mentorship from industry practitioners"}</li>
                        <li>{"Workspace and seed funding for selected teams"}</li>
                        <li>{"Demo day with investors and partners"}</li>
                    </ul>
                    <a href="#contact" class="btn btn-primary" onclick={section_link("contact")}>{"Join the Program →"}</a>
                </div>
            </section>

            <section class="testimonials" id="testimonials">
                <div class="container">
                    <div class="section-header">
                        <span class="section-tag">{"Success Stories"}</span>
                        <h2>{"Voices from our community"}</h2>
                    </div>
                    <div class="testimonials-grid success-stories">
                        { for TESTIMONIALS.iter().map(|testimonial| html! {
                            <blockquote class="testimonial-card">
                                <p>{format!("“{}”", testimonial.quote)}</p>
                                <footer>
                                    <strong>{testimonial.name}</strong>
                                    <span>{testimonial.role}</span>
                                </footer>
                            </blockquote>
                        })}
                    </div>
                </div>
            </section>

            <section class="events" id="events">
                <div class="container">
                    <div class="section-header">
                        <span class="section-tag">{"Events"}</span>
                        <h2>{"Upcoming events"}</h2>
                    </div>
                    <div class="events-grid">
                        { for EVENTS.iter().map(|event| html! {
                            <div class="event-card">
                                <div class="event-date">
                                    <span class="event-day">{event.day}</span>
                                    <span class="event-month">{event.month}</span>
                                </div>
                                <div class="event-body">
                                    <h3>{event.title}</h3>
                                    <p>{event.detail}</p>
                                    <a href="#contact" class="event-link" onclick={section_link("contact")}>{event.action}</a>
                                </div>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            <section class="newsletter">
                <div class="container newsletter-inner">
                    <div>
                        <h2>{"Stay in the loop"}</h2>
                        <p>{"New courses, events and stories from the foundation, once a month."}</p>
                    </div>
                    <NewsletterForm />
                </div>
            </section>

            <section class="contact" id="contact">
                <div class="container contact-grid">
                    <div class="contact-info">
                        <div class="section-header">
                            <span class="section-tag">{"Contact"}</span>
                            <h2>{"Get in touch"}</h2>
                        </div>
                        <p>{"Questions about courses, partnerships or the startup college? Write to us."}</p>
                        <ul class="contact-details">
                            <li>{"info@mathscifound.org"}</li>
                            <li>{"New Delhi, India"}</li>
                        </ul>
                    </div>
                    <div class="contact-form-card">
                        <ContactForm />
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="container footer-grid">
                    <div class="footer-brand">
                        <span class="logo-name">{"Mathematical Sciences Foundation"}</span>
                        <p>{"Empowering minds through mathematics."}</p>
                    </div>
                    <div class="footer-links">
                        <h4>{"Programs"}</h4>
                        <ul>
                            <li><a href="#programs" onclick={section_link("programs")}>{"Online Courses"}</a></li>
                            <li><a href="#programs" onclick={section_link("programs")}>{"Teacher Training"}</a></li>
                            <li><a href="#startups" onclick={section_link("startups")}>{"College of Startups"}</a></li>
                        </ul>
                    </div>
                    <div class="footer-links">
                        <h4>{"Foundation"}</h4>
                        <ul>
                            <li><a href="#about" onclick={section_link("about")}>{"About Us"}</a></li>
                            <li><Link<Route> to={Route::FilmFestival}>{"Film Festival"}</Link<Route>></li>
                            <li><a href="#contact" onclick={section_link("contact")}>{"Contact"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} Mathematical Sciences Foundation. All rights reserved.", year)}</p>
                </div>
            </footer>
        </div>
    }
}
