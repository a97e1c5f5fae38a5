use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::motion::carousel::{CarouselDriver, CarouselSettings, Direction};
use crate::motion::scheduler::BrowserScheduler;

#[derive(Clone, PartialEq, Debug)]
pub struct Film {
    pub title: AttrValue,
    pub director: AttrValue,
    pub color: AttrValue,
}

impl Film {
    pub fn new(title: &'static str, director: &'static str, color: &'static str) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            color: color.into(),
        }
    }

    fn poster_url(&self) -> String {
        format!(
            "https://placehold.co/400x600/0B0E25/FFF?text={}",
            self.title.replace(' ', "+")
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct FilmCarouselProps {
    pub films: Vec<Film>,
}

type Driver = CarouselDriver<BrowserScheduler, Element, Film>;

#[function_component(FilmCarousel)]
pub fn film_carousel(props: &FilmCarouselProps) -> Html {
    let strip_ref = use_node_ref();
    let driver = use_mut_ref(|| None::<Driver>);
    let drag_from = use_mut_ref(|| None::<i32>);

    {
        let strip_ref = strip_ref.clone();
        let driver = driver.clone();
        use_effect_with_deps(
            move |films: &Vec<Film>| {
                match strip_ref.cast::<Element>() {
                    Some(strip) => {
                        let settings = CarouselSettings::from(&config::motion());
                        *driver.borrow_mut() = Some(CarouselDriver::mount(BrowserScheduler, strip, films.clone(), settings));
                    }
                    None => log::warn!("Carousel strip not rendered, auto-advance disabled"),
                }
                move || {
                    driver.borrow_mut().take();
                }
            },
            props.films.clone(),
        );
    }

    let scroll = |direction: Direction| {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(driver) = driver.borrow().as_ref() {
                driver.scroll(direction);
            }
        })
    };

    let on_enter = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(driver) = driver.borrow().as_ref() {
                driver.pointer_enter();
            }
        })
    };

    let on_leave = {
        let driver = driver.clone();
        let drag_from = drag_from.clone();
        Callback::from(move |_: MouseEvent| {
            drag_from.borrow_mut().take();
            if let Some(driver) = driver.borrow().as_ref() {
                driver.pointer_leave();
            }
        })
    };

    let on_drag_start = {
        let drag_from = drag_from.clone();
        Callback::from(move |e: MouseEvent| {
            *drag_from.borrow_mut() = Some(e.client_x());
        })
    };

    let on_drag_move = {
        let driver = driver.clone();
        let drag_from = drag_from.clone();
        Callback::from(move |e: MouseEvent| {
            let mut drag_from = drag_from.borrow_mut();
            let Some(last_x) = *drag_from else {
                return;
            };
            e.prevent_default();
            let x = e.client_x();
            if let Some(driver) = driver.borrow().as_ref() {
                driver.drag_by((last_x - x) as f64);
            }
            *drag_from = Some(x);
        })
    };

    let on_drag_end = {
        let drag_from = drag_from.clone();
        Callback::from(move |_: MouseEvent| {
            drag_from.borrow_mut().take();
        })
    };

    html! {
        <div class="film-carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
            <button onclick={scroll(Direction::Left)} class="nav-arrow nav-arrow-left" aria-label="Scroll Left">
                <svg width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                    <path d="M15 19l-7-7 7-7" />
                </svg>
            </button>

            <div
                class="film-strip hide-scrollbar"
                ref={strip_ref}
                onmousedown={on_drag_start}
                onmousemove={on_drag_move}
                onmouseup={on_drag_end}
            >
                { for props.films.iter().map(|film| html! {
                    <div class="film-card" key={film.title.to_string()} style={format!("--card-tint: {};", film.color)}>
                        <img src={film.poster_url()} alt={film.title.clone()} draggable="false" />
                        <div class="film-card-info">
                            <span class="film-card-handle">{"Official Selection"}</span>
                            <h3>{film.title.clone()}</h3>
                            <p>{format!("Dir. {}", film.director)}</p>
                            <span class="film-card-status">{"2026"}</span>
                        </div>
                    </div>
                })}
            </div>

            <button onclick={scroll(Direction::Right)} class="nav-arrow nav-arrow-right" aria-label="Scroll Right">
                <svg width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                    <path d="M9 5l7 7-7 7" />
                </svg>
            </button>
        </div>
    }
}
