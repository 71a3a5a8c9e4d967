use log::warn;
use shared::filter::{parse_category_choice, PostFilter};
use shared::fixtures::{community_posts, community_stats};
use shared::models::{Category, CommunityPost};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: CommunityPost,
}

#[function_component(PostCard)]
fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    html! {
        <div class={classes!("post-card", post.is_crisis().then_some("crisis"))}>
            <div class="post-header">
                <span class="avatar">{post.author_initial()}</span>
                <div>
                    <strong>{&post.author}</strong>
                    <span class="post-meta">{format!("{} · {}", post.region, post.timestamp)}</span>
                </div>
                if post.is_crisis() {
                    <span class="badge crisis-badge">{"🚨 CRISIS"}</span>
                }
                <span class="badge">{post.language.badge()}</span>
            </div>
            <h3>{&post.title}</h3>
            <p>{&post.content}</p>
            <div class="post-verdict">
                <span class={classes!("badge", post.score.band().css_class())}>
                    {format!("{}/100", post.score)}
                </span>
                <span class="badge">{format!("{} {}", post.verdict.icon(), post.verdict.label())}</span>
            </div>
            <div class="post-tags">
                {for post.tags.iter().map(|tag| html! { <span class="tag">{format!("#{}", tag)}</span> })}
            </div>
            <div class="post-actions">
                <span>{format!("👍 {}", post.likes)}</span>
                <span>{format!("💬 {}", post.comments)}</span>
                <span>{format!("📤 {}", post.shares)}</span>
            </div>
        </div>
    }
}

#[function_component(Community)]
pub fn community() -> Html {
    let posts = use_memo(|_| community_posts(), ());
    let category = use_state(|| None::<Category>);
    let search = use_state(String::new);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                match parse_category_choice::<Category>(&select.value()) {
                    Ok(choice) => category.set(choice),
                    Err(e) => {
                        warn!("{}, showing all categories", e);
                        category.set(None);
                    }
                }
            }
        })
    };

    let filter = PostFilter::new(*category, (*search).clone());
    let visible = filter.apply(posts.as_slice());

    let selected_value = category.map(Category::as_str).unwrap_or("all");

    html! {
        <div class="community-page">
            <h1>{"Community Feed"}</h1>
            <p>{"See what others are verifying across India, in English and Hindi."}</p>

            <div class="stats-grid">
                {for community_stats().into_iter().map(|stat| html! {
                    <div class="stat-card">
                        <span class="stat-value">{stat.value}</span>
                        <span class="stat-label">{stat.label}</span>
                    </div>
                })}
            </div>

            <div class="feed-controls">
                <input
                    type="search"
                    placeholder="Search posts, tags, topics..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <select onchange={on_category_change}>
                    <option value="all" selected={selected_value == "all"}>{"All Categories"}</option>
                    {for Category::ALL.into_iter().map(|c| html! {
                        <option value={c.as_str()} selected={selected_value == c.as_str()}>{c.label()}</option>
                    })}
                </select>
            </div>

            if visible.is_empty() {
                <div class="empty-state">
                    <p>{"No posts match your filters."}</p>
                </div>
            } else {
                <div class="feed">
                    {for visible.into_iter().map(|post| html! {
                        <PostCard key={post.id.clone()} post={post.clone()} />
                    })}
                </div>
            }
        </div>
    }
}
