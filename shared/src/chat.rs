use uuid::Uuid;

use crate::models::{ChatMessage, MessagePayload};

pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI misinformation defense assistant. I can help you verify content, understand manipulation techniques, and learn critical thinking skills. Try asking me about any suspicious content you've seen!";

/// One-tap prompts under the chat window; each lands in a different reply branch.
pub const QUICK_REPLIES: [(&str, &str); 4] = [
    ("🔍", "Is this forward true?"),
    ("🧠", "Show me a Learn Card"),
    ("⚠️", "What's misleading here?"),
    ("📤", "How to share results?"),
];

/// In-memory transcript of the chatbot page.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    /// Id of the user message still waiting for its reply.
    awaiting: Option<Uuid>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::from_bot(WELCOME_MESSAGE, MessagePayload::Text)],
            awaiting: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.awaiting.is_some()
    }

    /// Blank input is dropped, and so is anything sent while a reply is pending.
    pub fn accepts(&self, text: &str) -> bool {
        !self.is_typing() && !text.trim().is_empty()
    }

    pub fn push_user(&mut self, text: &str) -> bool {
        if !self.accepts(text) {
            return false;
        }
        let message = ChatMessage::from_user(text);
        self.awaiting = Some(message.id());
        self.messages.push(message);
        true
    }

    /// The user message the bot has yet to answer.
    pub fn pending_question(&self) -> Option<&ChatMessage> {
        let id = self.awaiting?;
        self.messages.iter().rev().find(|m| m.id() == id)
    }

    /// Appends the reply to whatever is pending. False when nothing is.
    pub fn deliver(&mut self, reply: ChatMessage) -> bool {
        match self.awaiting {
            Some(question) => self.answer(question, reply),
            None => false,
        }
    }

    /// Appends `reply` only if `question` is the message still awaiting an answer.
    pub fn answer(&mut self, question: Uuid, reply: ChatMessage) -> bool {
        if self.awaiting != Some(question) {
            return false;
        }
        self.messages.push(reply);
        self.awaiting = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;
    use crate::responder::{classify, ResponseCategory};

    #[test]
    fn test_new_session_has_welcome() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].text(), WELCOME_MESSAGE);
        assert!(!session.is_typing());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert!(!session.push_user("   \n"));
        assert!(!session.push_user(""));
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_typing());
    }

    #[test]
    fn test_input_while_typing_is_ignored() {
        let mut session = ChatSession::new();
        assert!(session.push_user("first"));
        assert!(session.is_typing());
        assert!(!session.push_user("second"));
        assert_eq!(session.messages().len(), 2);

        assert!(session.deliver(ChatMessage::from_bot("reply", MessagePayload::Text)));
        assert!(!session.is_typing());
        assert!(session.push_user("second"));
        assert_eq!(session.messages().len(), 4);
        assert_eq!(session.messages()[3].sender(), Sender::User);
    }

    #[test]
    fn test_quick_replies_hit_distinct_branches() {
        let categories: Vec<_> = QUICK_REPLIES.iter().map(|(_, text)| classify(text)).collect();
        assert_eq!(
            categories,
            vec![
                ResponseCategory::Credibility,
                ResponseCategory::LearnCard,
                ResponseCategory::Explanation,
                ResponseCategory::SharingHelp,
            ]
        );
    }

    #[test]
    fn test_reply_without_pending_question_is_dropped() {
        let mut session = ChatSession::new();
        assert!(!session.deliver(ChatMessage::from_bot("orphan", MessagePayload::Text)));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_reply_is_tied_to_its_question() {
        let mut session = ChatSession::new();
        assert!(session.push_user("first"));
        let first = session.pending_question().map(ChatMessage::id).expect("pending");
        assert_eq!(session.pending_question().map(ChatMessage::text), Some("first"));

        // A second send while typing is refused and leaves no question behind it.
        assert!(!session.push_user("second"));
        let stray = ChatMessage::from_user("second").id();
        assert!(!session.answer(stray, ChatMessage::from_bot("stray", MessagePayload::Text)));
        assert_eq!(session.messages().len(), 2);
        assert!(session.is_typing());

        assert!(session.answer(first, ChatMessage::from_bot("reply", MessagePayload::Text)));
        assert!(!session.is_typing());
        assert!(session.pending_question().is_none());

        // The same question cannot be answered twice.
        assert!(!session.answer(first, ChatMessage::from_bot("again", MessagePayload::Text)));
        let senders: Vec<_> = session.messages().iter().map(|m| m.sender()).collect();
        assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
    }
}
