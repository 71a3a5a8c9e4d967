//! Canned chatbot replies picked by keyword.

use std::time::Duration;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::ChatConfig;
use crate::fixtures;
use crate::models::{ChatMessage, MessagePayload};

/// Checked in this order; the first group with a hit wins.
pub const CREDIBILITY_TRIGGERS: &[&str] = &["forward", "true", "verify"];
pub const LEARN_CARD_TRIGGERS: &[&str] = &["learn", "card", "technique"];
pub const EXPLANATION_TRIGGERS: &[&str] = &["misleading", "why"];
pub const SHARING_TRIGGERS: &[&str] = &["share", "whatsapp"];

pub const CREDIBILITY_INTRO: &str = "I'll analyze this content for you. Here's what I found:";
pub const LEARN_CARD_INTRO: &str =
    "Here's a Learn Card to help you understand this manipulation technique:";

pub const EXPLANATION_TEXT: &str = "Great question! Here are the key manipulation tactics I detected:\n\n🎯 **Emotional Manipulation**: Uses fear/excitement to bypass critical thinking\n📊 **Cherry-picked Data**: Selects only favorable statistics\n⏰ **Urgency Pressure**: 'Share immediately' to prevent verification\n🔍 **Missing Context**: Leaves out crucial qualifying information\n\nRemember: Always verify before sharing!";

pub const SHARING_TEXT: &str = "I can help you share verified results! Here's how:\n\n📤 **WhatsApp Format**: Tap the share button on any credibility card to get a WhatsApp-ready message\n\n🎯 **Key Elements**:\n• Credibility score badge\n• Brief verdict summary\n• Top evidence sources\n• Link to full analysis\n\nThis way, you're not just stopping misinformation - you're educating others too!";

pub const DEFAULT_RESPONSES: [&str; 4] = [
    "I'm here to help you verify information and learn about misinformation techniques. Could you share some specific content you'd like me to analyze?",
    "That's interesting! Would you like me to analyze some content for credibility, or would you prefer to learn about manipulation techniques?",
    "I can help with content verification, explaining why something might be misleading, or teaching you detection skills. What would be most helpful?",
    "Great! I'm ready to assist. You can paste any suspicious content, ask about manipulation techniques, or request verification help.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCategory {
    Credibility,
    LearnCard,
    Explanation,
    SharingHelp,
    Default,
}

pub fn classify(input: &str) -> ResponseCategory {
    let input = input.to_lowercase();
    let hit = |triggers: &[&str]| triggers.iter().any(|t| input.contains(t));

    if hit(CREDIBILITY_TRIGGERS) {
        ResponseCategory::Credibility
    } else if hit(LEARN_CARD_TRIGGERS) {
        ResponseCategory::LearnCard
    } else if hit(EXPLANATION_TRIGGERS) {
        ResponseCategory::Explanation
    } else if hit(SHARING_TRIGGERS) {
        ResponseCategory::SharingHelp
    } else {
        ResponseCategory::Default
    }
}

/// A bot reply together with how long to show the typing indicator first.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReply {
    pub message: ChatMessage,
    pub delay: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responder {
    config: ChatConfig,
}

impl Responder {
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn respond<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> ChatMessage {
        let category = classify(input);
        debug!("chat input classified as {:?}", category);

        match category {
            ResponseCategory::Credibility => ChatMessage::from_bot(
                CREDIBILITY_INTRO,
                MessagePayload::CredibilityCard(fixtures::chat_credibility_result()),
            ),
            ResponseCategory::LearnCard => ChatMessage::from_bot(
                LEARN_CARD_INTRO,
                MessagePayload::LearnCard(fixtures::chat_learn_preview()),
            ),
            ResponseCategory::Explanation => {
                ChatMessage::from_bot(EXPLANATION_TEXT, MessagePayload::Text)
            }
            ResponseCategory::SharingHelp => {
                ChatMessage::from_bot(SHARING_TEXT, MessagePayload::Text)
            }
            ResponseCategory::Default => {
                let text = DEFAULT_RESPONSES
                    .choose(rng)
                    .copied()
                    .unwrap_or(DEFAULT_RESPONSES[0]);
                ChatMessage::from_bot(text, MessagePayload::Text)
            }
        }
    }

    /// `base + uniform[0, jitter)`.
    pub fn typing_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter = if self.config.typing_jitter_ms == 0 {
            0
        } else {
            rng.gen_range(0..self.config.typing_jitter_ms)
        };
        self.config.base_delay() + Duration::from_millis(u64::from(jitter))
    }

    pub fn reply_to<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> PendingReply {
        let message = self.respond(input, rng);
        let delay = self.typing_delay(rng);
        PendingReply { message, delay }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_priority_order() {
        // "true" outranks "learn", "learn" outranks "why", "why" outranks "share".
        assert_eq!(classify("is it true I should learn this?"), ResponseCategory::Credibility);
        assert_eq!(classify("why this technique?"), ResponseCategory::LearnCard);
        assert_eq!(classify("why share it?"), ResponseCategory::Explanation);
        assert_eq!(classify("send on WhatsApp"), ResponseCategory::SharingHelp);
        assert_eq!(classify("hello there"), ResponseCategory::Default);
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        assert_eq!(classify("VERIFY THIS"), ResponseCategory::Credibility);
        assert_eq!(classify("Forwarded many times"), ResponseCategory::Credibility);
        assert_eq!(classify("Learning Cards"), ResponseCategory::LearnCard);
    }

    #[test]
    fn test_empty_input_gets_default() {
        assert_eq!(classify(""), ResponseCategory::Default);
    }

    #[test]
    fn test_credibility_reply_carries_payload() {
        let mut rng = StdRng::seed_from_u64(1);
        let reply = Responder::default().respond("Is this forward true?", &mut rng);
        assert_eq!(reply.kind(), MessageKind::CredibilityCard);
        assert_eq!(reply.text(), CREDIBILITY_INTRO);
        match reply.payload() {
            MessagePayload::CredibilityCard(result) => {
                assert_eq!(result.score.value(), 32);
                assert_eq!(result.evidence.len(), 3);
            }
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_default_reply_is_one_of_four() {
        let responder = Responder::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let reply = responder.respond("hmm", &mut rng);
            assert_eq!(reply.kind(), MessageKind::Text);
            assert!(DEFAULT_RESPONSES.contains(&reply.text()));
        }
    }

    #[test]
    fn test_typing_delay_bounds() {
        let responder = Responder::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let delay = responder.typing_delay(&mut rng);
            assert!(delay >= Duration::from_millis(1500));
            assert!(delay < Duration::from_millis(2500));
        }
    }

    #[test]
    fn test_zero_jitter_gives_fixed_delay() {
        let responder = Responder::new(ChatConfig {
            typing_base_ms: 10,
            typing_jitter_ms: 0,
        });
        let mut rng = StdRng::seed_from_u64(0);
        let pending = responder.reply_to("share", &mut rng);
        assert_eq!(pending.delay, Duration::from_millis(10));
        assert_eq!(pending.message.text(), SHARING_TEXT);
    }
}
