use shared::fixtures::{delhi_electricity_analysis, urgency_tactics_card};
use shared::models::Language;
use shared::share::share_text;
use yew::prelude::*;

use crate::components::credibility_card::CredibilityCard;
use crate::components::learn_card::LearnCard;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Showcase {
    Credibility,
    Learn,
    Share,
    Preview,
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    showcase: Showcase,
}

static FEATURES: [Feature; 12] = [
    Feature { icon: "✅", title: "One-Tap Credibility Check", description: "Instant score with verdict and confidence badge", showcase: Showcase::Credibility },
    Feature { icon: "🔍", title: "Evidence Summary", description: "3 citations with timestamps and source verification", showcase: Showcase::Credibility },
    Feature { icon: "🎯", title: "Claim & Entity Extraction", description: "Who/What/Where/When analysis with confidence scores", showcase: Showcase::Credibility },
    Feature { icon: "🛡️", title: "Fact-Check Match", description: "AltNews, BoomLive database cross-referencing", showcase: Showcase::Credibility },
    Feature { icon: "🧠", title: "Learn Cards Preview", description: "Educational content about manipulation techniques", showcase: Showcase::Learn },
    Feature { icon: "🌐", title: "Multilingual Toggle", description: "Seamless English/Hindi switching with cultural context", showcase: Showcase::Learn },
    Feature { icon: "📤", title: "Shareable Result Card", description: "WhatsApp-ready format for viral fact-checking", showcase: Showcase::Share },
    Feature { icon: "⚠️", title: "Crisis Mode Verification", description: "Government updates pinned during emergencies", showcase: Showcase::Preview },
    Feature { icon: "👁️", title: "Bias Awareness Lens", description: "Flip view to reveal hidden biases and perspectives", showcase: Showcase::Preview },
    Feature { icon: "🗺️", title: "Trust Heatmap", description: "India map with regional misinformation hotspots", showcase: Showcase::Preview },
    Feature { icon: "📱", title: "Deepfake Spotter Lite", description: "AI-powered detection for manipulated media", showcase: Showcase::Preview },
    Feature { icon: "📈", title: "Habit Tracker ⭐", description: "Gamified verification streak counter", showcase: Showcase::Preview },
];

fn render_showcase(showcase: Showcase, language: Language) -> Html {
    match showcase {
        Showcase::Credibility => {
            let mut result = delhi_electricity_analysis();
            result.language = language;
            html! { <CredibilityCard {result} /> }
        }
        Showcase::Learn => html! { <LearnCard card={urgency_tactics_card()} {language} /> },
        Showcase::Share => html! {
            <pre class="share-preview">{share_text(&delhi_electricity_analysis())}</pre>
        },
        Showcase::Preview => html! {
            <p class="preview-note">{"Interactive preview available in the full product."}</p>
        },
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let active = use_state(|| None::<usize>);
    let language = use_state(Language::default);

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

    html! {
        <div class="features-page">
            <span class="badge">{"Interactive Features Demo"}</span>
            <h1>{"Powerful AI Features"}</h1>
            <p>
                {"Experience judge-ready demonstrations of our misinformation defense capabilities. Click any feature to see it in action!"}
            </p>

            <div class="lang-toggles">
                {language_button(Language::En)}
                {language_button(Language::Hi)}
            </div>

            <div class="feature-grid">
                {for FEATURES.iter().enumerate().map(|(index, feature)| {
                    let is_active = *active == Some(index);
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| {
                            active.set(if is_active { None } else { Some(index) });
                        })
                    };
                    html! {
                        <div class={classes!("feature-card", is_active.then_some("active"))} {onclick}>
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }
                })}
            </div>

            if let Some(feature) = active.and_then(|index| FEATURES.get(index)) {
                <div class="feature-showcase">
                    <h2>{feature.title}</h2>
                    {render_showcase(feature.showcase, *language)}
                </div>
            }
        </div>
    }
}
