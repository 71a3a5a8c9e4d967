use shared::models::{CredibilityResult, EntityKind};
use shared::share::{share_text, whatsapp_url};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CredibilityCardProps {
    pub result: CredibilityResult,
    /// Chat bubbles use the compact layout, which leaves out entities.
    #[prop_or_default]
    pub compact: bool,
}

fn entity_icon(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Person => "👤",
        EntityKind::Place => "📍",
        EntityKind::Organization => "🏛️",
        EntityKind::Event => "📅",
    }
}

#[function_component(CredibilityCard)]
pub fn credibility_card(props: &CredibilityCardProps) -> Html {
    let result = &props.result;
    let entities = result.entities_for(props.compact);
    let share_href = whatsapp_url(&share_text(result));

    html! {
        <div class={classes!("credibility-card", props.compact.then_some("compact"))}>
            <div class="credibility-header">
                <div class={classes!("score-badge", result.score.band().css_class())}>
                    <span class="score-value">{result.score.value().to_string()}</span>
                    <span class="score-max">{"/100"}</span>
                </div>
                <div>
                    <span class="badge verdict">
                        {format!("{} {}", result.verdict.icon(), result.verdict.label())}
                    </span>
                    <span class="badge language">{result.language.badge()}</span>
                    <h3>{&result.title}</h3>
                </div>
            </div>
            <p class="credibility-summary">{&result.summary}</p>

            <div class="evidence">
                <h4>{"Evidence"}</h4>
                {for result.evidence.iter().map(|item| html! {
                    <div class="evidence-item">
                        if let Some(href) = item.link() {
                            <a href={href.to_string()} target="_blank" rel="noopener noreferrer">
                                {&item.source}
                            </a>
                        } else {
                            <span class="evidence-source">{&item.source}</span>
                        }
                        <span class="evidence-time">{&item.timestamp}</span>
                        <p>{&item.excerpt}</p>
                    </div>
                })}
            </div>

            if !entities.is_empty() {
                <div class="entities">
                    <h4>{"Entities"}</h4>
                    {for entities.iter().map(|entity| html! {
                        <span class="badge entity">
                            {format!("{} {} ({}%)", entity_icon(entity.kind), entity.name, entity.confidence)}
                        </span>
                    })}
                </div>
            }

            <div class="credibility-actions">
                <a class="share-button" href={share_href} target="_blank" rel="noopener noreferrer">
                    {"📤 Share on WhatsApp"}
                </a>
            </div>
        </div>
    }
}
