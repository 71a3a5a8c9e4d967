use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist. It may have been a misleading link."}</p>
            <Link<Route> to={Route::Home} classes="button primary">{"Back to Home"}</Link<Route>>
        </div>
    }
}
