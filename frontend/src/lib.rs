pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;
pub mod storage;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::{GradientBackground, NavBar};
use crate::pages::{
   home::Home,
   spin_wheel::SpinWheelPage,
   group_trip::GroupTrip,
   thanks::GroupTripThanks,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
   #[at("/")] Home,
   #[at("/spin")] Spin,
   #[at("/group-trip")] GroupTrip,
   #[at("/group-trip/thanks")] GroupTripThanks,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <GradientBackground>
                <NavBar />
                <main class="mx-auto pt-16">
                    <Switch<Route> render={switch} />
                </main>
            </GradientBackground>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Home => html! { <Home /> },
       Route::Spin => html! { <SpinWheelPage /> },
       Route::GroupTrip => html! { <GroupTrip /> },
       Route::GroupTripThanks => html! { <GroupTripThanks /> },
       Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
   }
}
