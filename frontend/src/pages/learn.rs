use log::{info, warn};
use shared::filter::{parse_category_choice, LearnFilter};
use shared::fixtures::{achievements, learning_stats};
use shared::learn::LearnCatalogue;
use shared::models::{Difficulty, Language};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::learn_card::LearnCard;

const TIPS: [(&str, &str); 4] = [
    ("🔍", "Check the source before you check the claim."),
    ("📅", "Look at the date. Old stories resurface as breaking news."),
    ("😡", "Strong emotions are a signal to slow down."),
    ("🔁", "Cross-check with at least two fact-checking sites."),
];

#[function_component(Learn)]
pub fn learn() -> Html {
    let catalogue = use_state(LearnCatalogue::default);
    let language = use_state(Language::default);
    let difficulty = use_state(|| None::<Difficulty>);
    let search = use_state(String::new);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_difficulty_change = {
        let difficulty = difficulty.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                match parse_category_choice::<Difficulty>(&select.value()) {
                    Ok(choice) => difficulty.set(choice),
                    Err(e) => {
                        warn!("{}, showing every level", e);
                        difficulty.set(None);
                    }
                }
            }
        })
    };

    let language_button = |target: Language| {
        let language = language.clone();
        let setter = language.clone();
        let onclick = Callback::from(move |_: MouseEvent| setter.set(target));
        html! {
            <button class={classes!("lang-toggle", (*language == target).then_some("active"))} {onclick}>
                {target.badge()}
            </button>
        }
    };

    let filter = LearnFilter::new(*difficulty, (*search).clone());
    let cards: Html = catalogue
        .cards()
        .iter()
        .enumerate()
        .filter(|(_, card)| filter.matches(*card))
        .map(|(index, card)| {
            let catalogue = catalogue.clone();
            let on_toggle = Callback::from(move |_: ()| {
                let mut updated = (*catalogue).clone();
                match updated.toggle_completed(index) {
                    Ok(done) => {
                        info!("Learn card {} marked {}", index, if done { "complete" } else { "incomplete" });
                        catalogue.set(updated);
                    }
                    Err(e) => warn!("{}", e),
                }
            });
            html! {
                <LearnCard
                    key={card.technique.as_str()}
                    card={card.clone()}
                    language={*language}
                    on_toggle_complete={Some(on_toggle)}
                />
            }
        })
        .collect();

    let progress = catalogue.progress_percent();

    html! {
        <div class="learn-page">
            <h1>{"Learn to Spot Misinformation"}</h1>
            <p>{"Short, interactive lessons on the techniques used to mislead you."}</p>

            <div class="learn-progress">
                <span>
                    {format!("{} of {} lessons completed", catalogue.completed_count(), catalogue.cards().len())}
                </span>
                <div class="progress"><div style={format!("width: {}%", progress)}></div></div>
            </div>

            <div class="stats-grid">
                {for learning_stats().into_iter().map(|stat| html! {
                    <div class="stat-card">
                        <span class="stat-value">{stat.value}</span>
                        <span class="stat-label">{stat.label}</span>
                        if let Some(p) = stat.progress {
                            <div class="progress"><div style={format!("width: {}%", p)}></div></div>
                        }
                    </div>
                })}
            </div>

            <div class="learn-controls">
                <input
                    type="search"
                    placeholder="Search lessons..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <select onchange={on_difficulty_change}>
                    <option value="all" selected={difficulty.is_none()}>{"All Levels"}</option>
                    {for Difficulty::ALL.into_iter().map(|d| html! {
                        <option value={d.as_str()} selected={*difficulty == Some(d)}>{d.as_str()}</option>
                    })}
                </select>
                <div class="lang-toggles">
                    {language_button(Language::En)}
                    {language_button(Language::Hi)}
                </div>
            </div>

            <div class="learn-grid">{cards}</div>

            <h2>{"Achievements"}</h2>
            <div class="achievements">
                {for achievements().into_iter().map(|a| html! {
                    <div class={classes!("achievement", (!a.earned).then_some("locked"))}>
                        <strong>{if a.earned { "🏆 " } else { "🔒 " }}{a.title}</strong>
                        <p>{a.description}</p>
                    </div>
                })}
            </div>

            <h2>{"Quick Tips"}</h2>
            <ul class="tips">
                {for TIPS.into_iter().map(|(icon, tip)| html! { <li>{format!("{} {}", icon, tip)}</li> })}
            </ul>
        </div>
    }
}
