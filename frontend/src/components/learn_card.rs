use shared::models::{Language, LearnCard as LearnCardModel, LearnCardPreview};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LearnCardProps {
    pub card: LearnCardModel,
    #[prop_or_default]
    pub language: Language,
    #[prop_or_default]
    pub on_toggle_complete: Option<Callback<()>>,
}

/// Flip card: technique overview on the front, before/after example on the back.
#[function_component(LearnCard)]
pub fn learn_card(props: &LearnCardProps) -> Html {
    let flipped = use_state(|| false);
    let card = &props.card;
    let language = props.language;

    let on_flip = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(!*flipped))
    };

    let complete_button = props.on_toggle_complete.as_ref().map(|on_toggle| {
        let on_toggle = on_toggle.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle.emit(());
        });
        html! {
            <button class={classes!("complete-button", card.completed.then_some("done"))} {onclick}>
                {if card.completed { "✓ Completed" } else { "Mark as complete" }}
            </button>
        }
    });

    html! {
        <div class={classes!("learn-card", (*flipped).then_some("flipped"), card.completed.then_some("completed"))}>
            if !*flipped {
                <div class="learn-card-front">
                    <div class="learn-card-meta">
                        <span class="technique-icon">{card.technique.icon()}</span>
                        <span class="badge">{card.difficulty.as_str()}</span>
                        <span class="badge">{format!("⏱ {}", card.estimated_time())}</span>
                    </div>
                    <h3>{card.title_in(language)}</h3>
                    <p>{card.description_in(language)}</p>
                    <button class="flip-button" onclick={on_flip}>{"See example →"}</button>
                </div>
            } else {
                <div class="learn-card-back">
                    <div class="example before">
                        <strong>{"❌ Manipulative"}</strong>
                        <p>{card.example.before_in(language)}</p>
                    </div>
                    <div class="example after">
                        <strong>{"✅ Accurate"}</strong>
                        <p>{card.example.after_in(language)}</p>
                    </div>
                    <p class="explanation">{card.example.explanation_in(language)}</p>
                    <button class="flip-button" onclick={on_flip}>{"← Back"}</button>
                </div>
            }
            {complete_button.unwrap_or_default()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LearnPreviewProps {
    pub preview: LearnCardPreview,
}

/// The compact card shown inside a chat reply.
#[function_component(LearnPreview)]
pub fn learn_preview(props: &LearnPreviewProps) -> Html {
    let preview = &props.preview;
    html! {
        <div class="learn-preview">
            <span class="technique-icon">{preview.technique.icon()}</span>
            <div>
                <span class="badge">{preview.technique.label()}</span>
                <h4>{&preview.title}</h4>
                <p>{&preview.description}</p>
            </div>
        </div>
    }
}
