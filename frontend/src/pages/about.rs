use yew::prelude::*;

const CHALLENGES: [&str; 4] = [
    "WhatsApp forwards spread faster than fact-checks",
    "Language barriers limit existing solutions",
    "Users need education, not just verification",
    "Cultural context missing in global tools",
];

const APPROACH: [(&str, &str, &str); 4] = [
    ("⚡", "Lightning Fast", "2-second analysis with instant credibility scores"),
    ("🌐", "Multilingual & Cultural", "English & Hindi with Indian context awareness"),
    ("🧠", "Educational First", "Teaches WHY content is misleading, building habits"),
    ("🛡️", "Evidence-Backed", "Citations from trusted Indian fact-checkers"),
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    initials: &'static str,
    bio: &'static str,
    skills: &'static [&'static str],
    email: &'static str,
}

const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Alex Chen",
        role: "AI/ML Engineer",
        initials: "AC",
        bio: "Specialized in NLP and misinformation detection algorithms. Previously worked on content moderation at scale.",
        skills: &["Machine Learning", "NLP", "Python", "TensorFlow"],
        email: "alex@aidefense.com",
    },
    TeamMember {
        name: "Priya Sharma",
        role: "Full-Stack Developer",
        initials: "PS",
        bio: "Expert in web frontends and real-time systems. Passionate about building accessible tech for India.",
        skills: &["Rust", "WebAssembly", "TypeScript", "System Design"],
        email: "priya@aidefense.com",
    },
    TeamMember {
        name: "Rajesh Kumar",
        role: "Product Designer",
        initials: "RK",
        bio: "UX designer focused on Indian digital behaviors. Advocates for simple, culturally-aware interfaces.",
        skills: &["UI/UX Design", "Figma", "User Research", "Accessibility"],
        email: "rajesh@aidefense.com",
    },
    TeamMember {
        name: "Sarah Mitchell",
        role: "Data Scientist",
        initials: "SM",
        bio: "PhD in Computational Linguistics. Specializes in fact-checking automation and bias detection.",
        skills: &["Data Science", "Statistics", "R", "Deep Learning"],
        email: "sarah@aidefense.com",
    },
];

const HACKATHON: [(&str, &str); 4] = [
    ("Event", "AI Innovation Challenge 2024"),
    ("Theme", "Building the Future of Information Integrity"),
    ("Duration", "48 hours"),
    ("Location", "Virtual + Mumbai Hub"),
];

const TECH_STACK: [(&str, &str); 4] = [
    ("Frontend", "Rust + Yew + WebAssembly"),
    ("Routing", "yew-router with client-side history"),
    ("Core logic", "Plain Rust crate, tested natively"),
    ("Build", "Trunk + wasm-opt"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <span class="badge">{"Hackathon Project Showcase"}</span>
            <h1>{"About AI Defense Tool"}</h1>
            <p>
                {"Meet the team and vision behind India's first AI-powered misinformation defense system. Built during the AI Innovation Challenge 2024."}
            </p>

            <section>
                <h2>{"The Misinformation Challenge"}</h2>
                <p>
                    {"Build a fast, multilingual, India-first AI companion that flags potentially misleading content, shows evidence with citations, and teaches users why it might be misleading, so people form better habits and not just get instant answers."}
                </p>
                <ul>
                    {for CHALLENGES.into_iter().map(|c| html! { <li>{format!("⚠️ {}", c)}</li> })}
                </ul>
            </section>

            <section>
                <h2>{"Our AI Defense Approach"}</h2>
                <div class="feature-grid">
                    {for APPROACH.into_iter().map(|(icon, title, description)| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{icon}</div>
                            <h3>{title}</h3>
                            <p>{description}</p>
                        </div>
                    })}
                </div>
            </section>

            <section>
                <h2>{"Meet the Team"}</h2>
                <p>{"A diverse group of technologists united by the mission to combat misinformation in India"}</p>
                <div class="team-grid">
                    {for TEAM.iter().map(|member| html! {
                        <div class="team-card">
                            <span class="avatar">{member.initials}</span>
                            <h3>{member.name}</h3>
                            <span class="badge">{member.role}</span>
                            <p>{member.bio}</p>
                            <div class="skills">
                                {for member.skills.iter().map(|skill| html! { <span class="tag">{*skill}</span> })}
                            </div>
                            <a href={format!("mailto:{}", member.email)}>{"✉️ Email"}</a>
                        </div>
                    })}
                </div>
            </section>

            <section class="about-columns">
                <div>
                    <h2>{"Hackathon Details"}</h2>
                    <dl>
                        {for HACKATHON.into_iter().map(|(key, value)| html! {
                            <>
                                <dt>{key}</dt>
                                <dd>{value}</dd>
                            </>
                        })}
                    </dl>
                </div>
                <div>
                    <h2>{"Technology Stack"}</h2>
                    <dl>
                        {for TECH_STACK.into_iter().map(|(layer, tech)| html! {
                            <>
                                <dt>{layer}</dt>
                                <dd>{tech}</dd>
                            </>
                        })}
                    </dl>
                </div>
            </section>

            <section class="cta">
                <h2>{"Join the Mission"}</h2>
                <p>
                    {"Help us build a misinformation-free digital India. Whether you're a developer, researcher, or concerned citizen, there's a place for you in our community."}
                </p>
            </section>
        </div>
    }
}
