use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const HIGHLIGHTS: [(&str, &str, &str); 4] = [
    ("⚡", "Lightning Fast", "Get credibility scores in under 2 seconds"),
    ("🌐", "Multilingual", "Works in English and Hindi with cultural context"),
    ("🛡️", "Evidence-Backed", "Citations from trusted Indian fact-checkers"),
    ("📖", "Educational", "Learn why content is misleading"),
];

const HEADLINE_STATS: [(&str, &str); 4] = [
    ("50M+", "Messages Analyzed"),
    ("95%", "Accuracy Rate"),
    ("12", "Languages Supported"),
    ("24/7", "Real-time Monitoring"),
];

const HOW_IT_WORKS: [(&str, &str, &str); 3] = [
    ("01", "Paste Content", "Share any viral forward, news link, or suspicious content"),
    ("02", "Instant Analysis", "Our AI analyzes credibility, extracts claims, and finds evidence"),
    ("03", "Learn & Share", "Get detailed explanations and share verified results"),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="hero">
                <span class="badge">{"✨ AI Innovation Challenge 2024"}</span>
                <h1>{"AI-Powered Misinformation Defense Tool"}</h1>
                <p class="hero-subtitle">
                    {"Fast • Multilingual • Evidence-backed • India-first AI companion that helps you identify misleading content and learn critical thinking"}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Demo} classes="button primary">{"▶ Try Live Demo"}</Link<Route>>
                    <Link<Route> to={Route::Features} classes="button">{"Explore Features →"}</Link<Route>>
                </div>
                <div class="stats-grid">
                    {for HEADLINE_STATS.into_iter().map(|(number, label)| html! {
                        <div class="stat-card">
                            <span class="stat-value">{number}</span>
                            <span class="stat-label">{label}</span>
                        </div>
                    })}
                </div>
            </section>

            <section class="highlights">
                <h2>{"Why Choose AI Defense?"}</h2>
                <p>{"Built specifically for India's diverse linguistic and cultural landscape"}</p>
                <div class="feature-grid">
                    {for HIGHLIGHTS.into_iter().map(|(icon, title, description)| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{icon}</div>
                            <h3>{title}</h3>
                            <p>{description}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="how-it-works">
                <h2>{"How It Works"}</h2>
                <p>{"Simple, fast, and intelligent misinformation detection"}</p>
                <div class="steps">
                    {for HOW_IT_WORKS.into_iter().map(|(step, title, description)| html! {
                        <div class="step">
                            <span class="step-number">{step}</span>
                            <h3>{title}</h3>
                            <p>{description}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="cta">
                <h2>{"Ready to Combat Misinformation?"}</h2>
                <p>{"Join thousands of users who are already building better information habits"}</p>
                <Link<Route> to={Route::Demo} classes="button primary">{"Start Demo Now"}</Link<Route>>
                <Link<Route> to={Route::Chatbot} classes="button">{"Chat with the Assistant"}</Link<Route>>
            </section>
        </div>
    }
}
