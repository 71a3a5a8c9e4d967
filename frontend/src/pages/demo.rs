use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use shared::demo::{DemoScene, DemoWalkthrough};
use shared::fixtures::{
    dashboard_activity, delhi_electricity_analysis, regional_activity, trending_topics,
    urgency_tactics_card, DELHI_FORWARD,
};
use shared::models::Language;
use shared::share::{share_text, whatsapp_url};
use yew::prelude::*;

use crate::components::credibility_card::CredibilityCard;
use crate::components::learn_card::LearnCard;

const TICK_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Default)]
struct DemoState {
    walkthrough: DemoWalkthrough,
}

enum DemoAction {
    Next,
    Previous,
    TogglePlay,
    Reset,
    Jump(usize),
    Tick,
}

impl Reducible for DemoState {
    type Action = DemoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut walkthrough = self.walkthrough.clone();
        match action {
            DemoAction::Next => walkthrough.next(),
            DemoAction::Previous => walkthrough.previous(),
            DemoAction::TogglePlay => walkthrough.toggle_playing(),
            DemoAction::Reset => walkthrough.reset(),
            DemoAction::Jump(index) => {
                if let Err(e) = walkthrough.jump_to(index) {
                    warn!("{}", e);
                    return self;
                }
            }
            DemoAction::Tick => {
                if walkthrough.tick(Duration::from_millis(u64::from(TICK_MS))) {
                    debug!("Demo advanced to step {}", walkthrough.current_step().id);
                }
            }
        }
        Rc::new(Self { walkthrough })
    }
}

fn render_scene(scene: DemoScene) -> Html {
    match scene {
        DemoScene::ViralForward => html! {
            <div class="phone-mockup">
                <div class="phone-header">{"WhatsApp · Family Group"}</div>
                <div class="message bot">
                    <div class="message-bubble forwarded">
                        <span class="forwarded-label">{"↪ Forwarded many times"}</span>
                        <p>{DELHI_FORWARD}</p>
                    </div>
                </div>
                <div class="message user">
                    <div class="message-bubble">{"Is this true? 🤔"}</div>
                </div>
            </div>
        },
        DemoScene::AnalysisResult => html! {
            <CredibilityCard result={delhi_electricity_analysis()} />
        },
        DemoScene::EducationalInsight => html! {
            <div class="insight-scene">
                <LearnCard card={urgency_tactics_card()} language={Language::En} />
                <LearnCard card={urgency_tactics_card()} language={Language::Hi} />
            </div>
        },
        DemoScene::ShareResult => {
            let text = share_text(&delhi_electricity_analysis());
            let href = whatsapp_url(&text);
            html! {
                <div class="share-scene">
                    <pre class="share-preview">{text}</pre>
                    <a class="share-button" {href} target="_blank" rel="noopener noreferrer">
                        {"📤 Open in WhatsApp"}
                    </a>
                </div>
            }
        }
        DemoScene::AdminDashboard => html! {
            <div class="dashboard-scene">
                <div class="stats-grid">
                    {for dashboard_activity().into_iter().map(|stat| html! {
                        <div class="stat-card">
                            <span class="stat-value">{stat.value}</span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    })}
                </div>
                <div class="dashboard-columns">
                    <div>
                        <h4>{"Trending Misinformation"}</h4>
                        <ul>
                            {for trending_topics().into_iter().map(|(topic, reports)| html! {
                                <li>{format!("{} · {} reports", topic, reports)}</li>
                            })}
                        </ul>
                    </div>
                    <div>
                        <h4>{"Regional Activity"}</h4>
                        {for regional_activity().into_iter().map(|(region, level)| html! {
                            <div class="region-row">
                                <span>{region}</span>
                                <div class="progress"><div style={format!("width: {}%", level)}></div></div>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        },
    }
}

#[function_component(Demo)]
pub fn demo() -> Html {
    let state = use_reducer(DemoState::default);
    let playing = state.walkthrough.is_playing();

    // The interval lives only while autoplay is on
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |playing| {
                let interval = playing.then(|| {
                    Interval::new(TICK_MS, move || dispatcher.dispatch(DemoAction::Tick))
                });
                move || drop(interval)
            },
            playing,
        );
    }

    let action = |make: fn() -> DemoAction| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(make()))
    };

    let walkthrough = &state.walkthrough;
    let step = walkthrough.current_step();

    html! {
        <div class="demo-page">
            <h1>{"See AI Defense in Action"}</h1>
            <p>{"A 60-second walkthrough of verifying a viral forward."}</p>

            <div class="demo-steps">
                {for walkthrough.steps().iter().enumerate().map(|(index, s)| {
                    let state = state.clone();
                    let onclick = Callback::from(move |_: MouseEvent| state.dispatch(DemoAction::Jump(index)));
                    let active = index == walkthrough.current_index();
                    html! {
                        <button class={classes!("demo-step", active.then_some("active"))} {onclick}>
                            <span>{s.emoji}</span>
                            <span>{s.title}</span>
                        </button>
                    }
                })}
            </div>

            <div class="progress">
                <div style={format!("width: {}%", walkthrough.progress_percent())}></div>
            </div>

            <div class="demo-stage">
                <h2>{format!("{} Step {}: {}", step.emoji, step.id, step.title)}</h2>
                <p>{step.description}</p>
                {render_scene(step.scene)}
            </div>

            <div class="demo-controls">
                <button onclick={action(|| DemoAction::Previous)} disabled={walkthrough.is_first()}>
                    {"← Previous"}
                </button>
                <button onclick={action(|| DemoAction::TogglePlay)}>
                    {if playing { "⏸ Pause" } else { "▶ Play" }}
                </button>
                <button onclick={action(|| DemoAction::Reset)}>{"↺ Reset"}</button>
                <button onclick={action(|| DemoAction::Next)} disabled={walkthrough.is_last()}>
                    {"Next →"}
                </button>
            </div>
        </div>
    }
}
