use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; font-family: sans-serif; gap: 1rem;">
            <h1 style="font-size: 3rem; margin: 0;">{"404"}</h1>
            <p style="color: #4b5563;">{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="back-home">
                {"Back to JD Solutions"}
            </Link<Route>>
        </div>
    }
}
