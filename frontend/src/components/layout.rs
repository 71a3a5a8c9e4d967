use shared::routes::Page;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SITE_NAME;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let menu_open = use_state(|| false);

    // Keep the tab title in sync and start each page from the top
    {
        let page = route.page();
        use_effect_with_deps(
            move |page| {
                if let Some(window) = window() {
                    if let Some(document) = window.document() {
                        document.set_title(&page.document_title());
                    }
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            page,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let layout_css = r#"
        .site { min-height: 100vh; display: flex; flex-direction: column; font-family: system-ui, sans-serif; }
        .site main { flex: 1; }
        .navbar { display: flex; align-items: center; justify-content: space-between; padding: 1rem 2rem; border-bottom: 1px solid #e5e7eb; }
        .nav-links { display: flex; gap: 1rem; }
        .nav-links a.active { font-weight: 700; }
        .nav-toggle { display: none; }
        .footer { padding: 2rem; border-top: 1px solid #e5e7eb; text-align: center; color: #6b7280; }
        .badge { display: inline-block; padding: 0.15rem 0.6rem; border-radius: 999px; font-size: 0.75rem; background: #f3f4f6; }
        .score-high { background: #22c55e; color: white; }
        .score-medium { background: #f97316; color: white; }
        .score-low { background: #ef4444; color: white; }
        .progress { height: 0.5rem; background: #e5e7eb; border-radius: 999px; overflow: hidden; }
        .progress > div { height: 100%; background: #6366f1; }
        @media (max-width: 768px) {
            .nav-links { display: none; flex-direction: column; }
            .nav-links.open { display: flex; }
            .nav-toggle { display: block; }
        }
    "#;

    html! {
        <div class="site">
            <style>{layout_css}</style>
            <nav class="navbar">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {format!("🛡️ {}", SITE_NAME)}
                </Link<Route>>
                <button class="nav-toggle" onclick={toggle_menu}>
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
                <div class={classes!("nav-links", if *menu_open { "open" } else { "" })} onclick={close_menu}>
                    {for Page::NAV.iter().map(|page| {
                        let target = Route::for_page(*page);
                        let active = target == route;
                        html! {
                            <Link<Route> to={target} classes={classes!(if active { "active" } else { "" })}>
                                {page.label()}
                            </Link<Route>>
                        }
                    })}
                </div>
                <Link<Route> to={Route::Demo} classes="nav-cta">
                    {"Try Demo"}
                </Link<Route>>
            </nav>
            <main>
                { for props.children.iter() }
            </main>
            <footer class="footer">
                <p>{format!("{} · Fast, multilingual, evidence-backed misinformation defense", SITE_NAME)}</p>
                <p>
                    {for [Page::Features, Page::Learn, Page::Community, Page::About].iter().map(|page| html! {
                        <>
                            <Link<Route> to={Route::for_page(*page)}>{page.label()}</Link<Route>>
                            {" · "}
                        </>
                    })}
                    <a href="#" target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                </p>
                <p>{"Built for the AI Innovation Challenge 2024. All scores and sources shown are sample data."}</p>
            </footer>
        </div>
    }
}
