use rand::rngs::StdRng;
use rand::SeedableRng;

use shared::chat::ChatSession;
use shared::filter::{Filter, PostFilter};
use shared::fixtures;
use shared::models::{Category, MessageKind, Verdict};
use shared::responder::{classify, ResponseCategory, Responder, DEFAULT_RESPONSES};

const FILLER: [&str; 5] = ["", "Hey, ", "PLEASE ", "so... ", "क्या "];

#[test]
fn credibility_triggers_always_win() {
    for trigger in ["verify", "true", "forward", "VERIFY", "True", "FoRwArD"] {
        for prefix in FILLER {
            // Lower-priority triggers in the same input must not change the outcome.
            let input = format!("{prefix}{trigger} learn why share");
            assert_eq!(classify(&input), ResponseCategory::Credibility, "input: {input}");
        }
    }
}

#[test]
fn learn_card_triggers() {
    for trigger in ["learn", "card", "technique", "LEARN", "Card"] {
        for prefix in FILLER {
            let input = format!("{prefix}{trigger} why share");
            assert_eq!(classify(&input), ResponseCategory::LearnCard, "input: {input}");
        }
    }
}

#[test]
fn unmatched_input_gets_one_of_the_default_texts() {
    let responder = Responder::default();
    let mut rng = StdRng::seed_from_u64(2024);
    for input in ["hello", "", "what time is it", "नमस्ते", "12345", "ok!"] {
        let reply = responder.respond(input, &mut rng);
        assert_eq!(reply.kind(), MessageKind::Text);
        assert!(!reply.text().is_empty());
        assert!(DEFAULT_RESPONSES.contains(&reply.text()), "input: {input}");
    }
}

#[test]
fn seeded_default_pick_is_reproducible() {
    let responder = Responder::default();
    let pick = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        responder.respond("hello", &mut rng).text().to_string()
    };
    assert_eq!(pick(9), pick(9));
}

#[test]
fn crisis_category_returns_exactly_the_crisis_posts() {
    let posts = fixtures::community_posts();
    let hits = PostFilter::new(Some(Category::Crisis), "").apply(&posts);
    let expected: Vec<_> = posts.iter().filter(|p| p.category == Category::Crisis).collect();
    assert_eq!(hits, expected);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].verdict, Verdict::True);
}

#[test]
fn delhi_search_matches_title_content_or_tags() {
    let posts = fixtures::community_posts();
    let hits = PostFilter::new(None, "delhi").apply(&posts);

    let expected: Vec<_> = posts
        .iter()
        .filter(|p| {
            p.title.contains("Delhi")
                || p.content.contains("Delhi")
                || p.tags.iter().any(|t| t.contains("Delhi"))
        })
        .collect();
    assert_eq!(hits, expected);
    assert!(!hits.is_empty());
    assert_eq!(hits[0].id, "1");
}

#[test]
fn filtering_is_idempotent() {
    let posts = fixtures::community_posts();
    let filters = [
        PostFilter::default(),
        PostFilter::new(Some(Category::Trending), ""),
        PostFilter::new(Some(Category::Regional), "scam"),
        PostFilter::new(None, "WHO"),
        Filter::new(Some(Category::General), "nothing matches this"),
    ];
    for filter in filters {
        let once: Vec<_> = filter.apply(&posts).into_iter().cloned().collect();
        let twice: Vec<_> = filter.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice, "filter: {filter:?}");
    }
}

#[test]
fn chat_round_trip_with_responder() {
    let mut session = ChatSession::new();
    let responder = Responder::default();
    let mut rng = StdRng::seed_from_u64(5);

    let text = "Show me a Learn Card";
    assert!(session.accepts(text));
    let pending = responder.reply_to(text, &mut rng);
    assert!(session.push_user(text));
    assert!(session.is_typing());

    assert!(session.deliver(pending.message));
    assert!(!session.is_typing());

    let kinds: Vec<_> = session.messages().iter().map(|m| m.kind()).collect();
    assert_eq!(kinds, vec![MessageKind::Text, MessageKind::Text, MessageKind::LearnCard]);
}
