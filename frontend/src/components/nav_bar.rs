use gloo::events::EventListener;
use shared::constants::BRAND_NAME;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{styles, Route};

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);

    // Close the mobile menu on any click outside of it
    {
        let menu_open = menu_open.clone();
        use_effect_with((), move |_| {
            let listener = window().and_then(|w| w.document()).map(|document| {
                EventListener::new(&document, "click", move |event: &Event| {
                    let inside = event
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.matches(".nav-menu, .nav-menu *").ok())
                        .unwrap_or(false);
                    if !inside {
                        menu_open.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = html! {
        <>
            <Link<Route> to={Route::Spin} classes={styles::NAV_LINK}>{"Spin & Win"}</Link<Route>>
            <Link<Route> to={Route::GroupTrip} classes={styles::NAV_LINK}>{"Group Trips"}</Link<Route>>
        </>
    };

    html! {
        <nav class={styles::NAV}>
            <div class={styles::NAV_INNER}>
                <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>
                    <span class="mr-2">{"✈️"}</span>
                    {BRAND_NAME}
                </Link<Route>>
                <div class={classes!(styles::NAV_ITEMS, "hidden", "sm:flex")}>
                    {links.clone()}
                </div>
                <div class="nav-menu relative sm:hidden">
                    <button type="button" class={styles::NAV_LINK} onclick={toggle_menu} aria-label="Menu">{"☰"}</button>
                    if *menu_open {
                        <div class="absolute right-0 mt-2 flex flex-col gap-2 p-4 rounded-xl bg-white dark:bg-gray-800 shadow-xl">
                            {links}
                        </div>
                    }
                </div>
            </div>
        </nav>
    }
}
