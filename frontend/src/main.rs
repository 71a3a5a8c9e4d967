use log::info;
use shared::routes::Page;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;

mod components {
    pub mod credibility_card;
    pub mod layout;
    pub mod learn_card;
}

mod pages {
    pub mod about;
    pub mod chatbot;
    pub mod community;
    pub mod demo;
    pub mod features;
    pub mod home;
    pub mod learn;
    pub mod not_found;
}

use components::layout::Layout;
use pages::{
    about::About, chatbot::Chatbot, community::Community, demo::Demo, features::Features,
    home::Home, learn::Learn, not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/features")]
    Features,
    #[at("/learn")]
    Learn,
    #[at("/chatbot")]
    Chatbot,
    #[at("/community")]
    Community,
    #[at("/demo")]
    Demo,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn page(&self) -> Page {
        match self {
            Route::Home => Page::Home,
            Route::Features => Page::Features,
            Route::Learn => Page::Learn,
            Route::Chatbot => Page::Chatbot,
            Route::Community => Page::Community,
            Route::Demo => Page::Demo,
            Route::About => Page::About,
            Route::NotFound => Page::NotFound,
        }
    }

    pub fn for_page(page: Page) -> Route {
        match page {
            Page::Home => Route::Home,
            Page::Features => Route::Features,
            Page::Learn => Route::Learn,
            Page::Chatbot => Route::Chatbot,
            Page::Community => Route::Community,
            Page::Demo => Route::Demo,
            Page::About => Route::About,
            Page::NotFound => Route::NotFound,
        }
    }
}

fn switch(route: Route) -> Html {
    info!("Rendering page: {}", route.page().label());
    match route {
        Route::Home => html! { <Home /> },
        Route::Features => html! { <Features /> },
        Route::Learn => html! { <Learn /> },
        Route::Chatbot => html! { <Chatbot /> },
        Route::Community => html! { <Community /> },
        Route::Demo => html! { <Demo /> },
        Route::About => html! { <About /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
