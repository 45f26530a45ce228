use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::Route;
use clearway_common::site;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 80.0);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                scroll_callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        (Route::Services, "Lessons & Prices"),
        (Route::About, "About"),
        (Route::Blog, "Blog"),
        (Route::Contact, "Contact"),
    ];

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {site::SCHOOL_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Open menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for links.into_iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">{label}</Link<Route>>
                        </div>
                    }) }
                    <a class="nav-phone" href={format!("tel:{}", site::PHONE.replace(' ', ""))}>
                        {site::PHONE}
                    </a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Booking} classes="nav-book-button">
                            {"Book now"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}
