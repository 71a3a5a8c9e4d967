use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use shared::chat::{ChatSession, QUICK_REPLIES};
use shared::models::{ChatMessage, MessagePayload};
use shared::prompts::{prompt_catalogue, JUDGE_PROMPTS};
use shared::responder::Responder;
use uuid::Uuid;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use crate::components::credibility_card::CredibilityCard;
use crate::components::learn_card::LearnPreview;
use crate::config::get_chat_config;

#[derive(Clone, Debug, PartialEq, Default)]
struct ChatState {
    session: ChatSession,
}

enum ChatAction {
    UserSent(String),
    BotReplied { question: Uuid, reply: ChatMessage },
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.session.clone();
        match action {
            ChatAction::UserSent(text) => {
                if !session.push_user(&text) {
                    return self;
                }
            }
            ChatAction::BotReplied { question, reply } => {
                if !session.answer(question, reply) {
                    debug!("Dropping reply to {}, it is no longer pending", question);
                    return self;
                }
            }
        }
        Rc::new(Self { session })
    }
}

#[derive(Properties, PartialEq)]
struct MessageBubbleProps {
    message: ChatMessage,
}

#[function_component(MessageBubble)]
fn message_bubble(props: &MessageBubbleProps) -> Html {
    let message = &props.message;
    let attachment = match message.payload() {
        MessagePayload::Text => html! {},
        MessagePayload::CredibilityCard(result) => html! {
            <CredibilityCard result={result.clone()} compact=true />
        },
        MessagePayload::LearnCard(preview) => html! {
            <LearnPreview preview={preview.clone()} />
        },
    };

    html! {
        <div class={classes!("message", if message.is_bot() { "bot" } else { "user" })}>
            <div class="message-bubble">
                {for message.text().split('\n').map(|line| html! { <p>{line}</p> })}
                {attachment}
                <span class="message-time">{message.time_label()}</span>
            </div>
        </div>
    }
}

#[function_component(Chatbot)]
pub fn chatbot() -> Html {
    let state = use_reducer(ChatState::default);
    let input_value = use_state(String::new);
    let responder = use_memo(|_| Responder::new(get_chat_config()), ());
    let messages_ref = use_node_ref();
    let catalogue = use_memo(|_| prompt_catalogue(), ());
    let show_more_prompts = use_state(|| false);

    let on_toggle_more = {
        let show_more_prompts = show_more_prompts.clone();
        Callback::from(move |_: MouseEvent| show_more_prompts.set(!*show_more_prompts))
    };

    // Keep the newest message in view
    {
        let messages_ref = messages_ref.clone();
        let count = state.session.messages().len();
        let typing = state.session.is_typing();
        use_effect_with_deps(
            move |_| {
                if let Some(container) = messages_ref.cast::<Element>() {
                    container.set_scroll_top(container.scroll_height());
                }
                || ()
            },
            (count, typing),
        );
    }

    // The reply timer starts only after the reducer has taken the question
    {
        let dispatcher = state.dispatcher();
        let responder = responder.clone();
        let question = state
            .session
            .pending_question()
            .map(|m| (m.id(), m.text().to_string()));
        let awaiting = question.as_ref().map(|(id, _)| *id);
        use_effect_with_deps(
            move |_| {
                let timeout = question.map(|(id, text)| {
                    let pending = responder.reply_to(&text, &mut rand::thread_rng());
                    info!("Bot reply queued in {} ms", pending.delay.as_millis());
                    let delay_ms = u32::try_from(pending.delay.as_millis()).unwrap_or(u32::MAX);
                    Timeout::new(delay_ms, move || {
                        dispatcher.dispatch(ChatAction::BotReplied {
                            question: id,
                            reply: pending.message,
                        });
                    })
                });
                move || drop(timeout)
            },
            awaiting,
        );
    }

    let send = {
        let state = state.clone();
        let input_value = input_value.clone();
        Callback::from(move |text: String| {
            if !state.session.accepts(&text) {
                debug!("Ignoring chat input while a reply is pending or input is blank");
                return;
            }
            state.dispatch(ChatAction::UserSent(text));
            input_value.set(String::new());
        })
    };

    let on_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input_value.set(input.value());
        })
    };

    let on_keypress = {
        let send = send.clone();
        let input_value = input_value.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit((*input_value).clone());
            }
        })
    };

    let on_send_click = {
        let send = send.clone();
        let input_value = input_value.clone();
        Callback::from(move |_: MouseEvent| send.emit((*input_value).clone()))
    };

    let typing = state.session.is_typing();

    let chat_css = r#"
        .chat-page { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
        .chat-window { border: 1px solid #e5e7eb; border-radius: 1rem; display: flex; flex-direction: column; height: 70vh; }
        .chat-messages { flex: 1; overflow-y: auto; padding: 1rem; }
        .message { display: flex; margin-bottom: 0.75rem; }
        .message.user { justify-content: flex-end; }
        .message-bubble { max-width: 80%; padding: 0.75rem 1rem; border-radius: 1rem; background: #f3f4f6; }
        .message.user .message-bubble { background: #6366f1; color: white; }
        .message-time { display: block; font-size: 0.7rem; opacity: 0.6; margin-top: 0.25rem; }
        .typing-indicator span { display: inline-block; width: 6px; height: 6px; margin: 0 2px; border-radius: 50%; background: #9ca3af; }
        .chat-input { display: flex; gap: 0.5rem; padding: 1rem; border-top: 1px solid #e5e7eb; }
        .chat-input input { flex: 1; }
        .quick-replies, .judge-prompts, .prompt-group-list { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
        .prompt-expected { display: block; font-size: 0.75rem; opacity: 0.7; }
    "#;

    html! {
        <div class="chat-page">
            <style>{chat_css}</style>
            <h1>{"AI Defense Chatbot"}</h1>
            <p>{"Paste a forward, ask why something is misleading, or request a Learn Card."}</p>

            <div class="chat-window">
                <div class="chat-messages" ref={messages_ref}>
                    {for state.session.messages().iter().map(|message| html! {
                        <MessageBubble key={message.id().to_string()} message={message.clone()} />
                    })}
                    if typing {
                        <div class="message bot">
                            <div class="message-bubble typing-indicator">
                                <span></span><span></span><span></span>
                            </div>
                        </div>
                    }
                </div>
                <div class="chat-input">
                    <input
                        type="text"
                        placeholder="Paste suspicious content or ask a question..."
                        value={(*input_value).clone()}
                        oninput={on_input}
                        onkeypress={on_keypress}
                    />
                    <button onclick={on_send_click} disabled={typing || input_value.trim().is_empty()}>
                        {"Send"}
                    </button>
                </div>
            </div>

            <div class="quick-replies">
                {for QUICK_REPLIES.into_iter().map(|(icon, text)| {
                    let send = send.clone();
                    let onclick = Callback::from(move |_: MouseEvent| send.emit(text.to_string()));
                    html! {
                        <button class="quick-reply" {onclick} disabled={typing}>
                            {format!("{} {}", icon, text)}
                        </button>
                    }
                })}
            </div>

            <h3>{"Try one of these"}</h3>
            <div class="judge-prompts">
                {for JUDGE_PROMPTS.into_iter().map(|prompt| {
                    let input_value = input_value.clone();
                    let onclick = Callback::from(move |_: MouseEvent| input_value.set(prompt.to_string()));
                    html! {
                        <button class="judge-prompt" {onclick}>{prompt}</button>
                    }
                })}
            </div>

            <button class="link-button" onclick={on_toggle_more}>
                {if *show_more_prompts { "Hide prompts ▲" } else { "More prompts ▼" }}
            </button>
            if *show_more_prompts {
                <div class="prompt-catalogue">
                    {for catalogue.iter().map(|group| html! {
                        <div class="prompt-group">
                            <h4>{group.name}</h4>
                            <div class="prompt-group-list">
                                {for group.prompts.iter().map(|sample| {
                                    let prompt = sample.prompt;
                                    let input_value = input_value.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| input_value.set(prompt.to_string()));
                                    html! {
                                        <button class="judge-prompt" {onclick}>
                                            if let Some(topic) = sample.topic {
                                                <span class="badge">{topic}</span>
                                            }
                                            {prompt}
                                            <span class="prompt-expected">{sample.expected}</span>
                                        </button>
                                    }
                                })}
                            </div>
                        </div>
                    })}
                </div>
            }
        </div>
    }
}
