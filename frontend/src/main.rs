use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod shell;
mod contact {
    pub mod form;
    pub mod payload;
    pub mod client;
    pub mod workflow;
}
mod components {
    pub mod back_to_top;
    pub mod contact_modal;
    pub mod error_boundary;
}
mod pages {
    pub mod content;
    pub mod home;
    pub mod not_found;
}

use components::error_boundary::install_panic_fallback;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Console panic messages plus a static fallback instead of a blank page
    install_panic_fallback();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
