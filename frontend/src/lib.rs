pub mod api;
pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;
pub mod telegram;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::pages::admin::AdminDashboard;
use crate::pages::game::Game;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Game,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    // Claim the full Mini App viewport and match the header to the theme.
    use_effect_with((), move |_| {
        telegram::expand();
        telegram::set_header_color("#0f172a");
        || ()
    });

    html! {
        <BrowserRouter>
            <Base>
                <Switch<Route> render={switch} />
            </Base>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Game => html! { <Game /> },
        Route::Admin => html! { <AdminDashboard /> },
        Route::NotFound => html! {
            <div class={styles::LOADING_SCREEN}>{"Page not found."}</div>
        },
    }
}
