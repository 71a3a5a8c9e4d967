use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ModelError;

/// Mock credibility score, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u8")]
pub struct Score(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl Score {
    pub const MAX: u8 = 100;

    pub fn new(value: u32) -> Result<Self, ModelError> {
        if value > u32::from(Self::MAX) {
            return Err(ModelError::ScoreOutOfRange(value));
        }
        Ok(Score(value as u8))
    }

    // Fixture values are literals; anything above the ceiling is clamped.
    pub(crate) const fn fixture(value: u8) -> Self {
        if value > Self::MAX {
            Score(Self::MAX)
        } else {
            Score(value)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn band(self) -> ScoreBand {
        match self.0 {
            70.. => ScoreBand::High,
            40..=69 => ScoreBand::Medium,
            _ => ScoreBand::Low,
        }
    }
}

impl TryFrom<u32> for Score {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ScoreBand {
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBand::High => "score-high",
            ScoreBand::Medium => "score-medium",
            ScoreBand::Low => "score-low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    True,
    False,
    Misleading,
    Unverified,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::True => "true",
            Verdict::False => "false",
            Verdict::Misleading => "misleading",
            Verdict::Unverified => "unverified",
        }
    }

    /// Upper-case badge text.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::True => "TRUE",
            Verdict::False => "FALSE",
            Verdict::Misleading => "MISLEADING",
            Verdict::Unverified => "UNVERIFIED",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Verdict::True => "✅",
            Verdict::False => "❌",
            Verdict::Misleading => "⚠️",
            Verdict::Unverified => "🔎",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" => Ok(Verdict::True),
            "false" => Ok(Verdict::False),
            "misleading" => Ok(Verdict::Misleading),
            "unverified" => Ok(Verdict::Unverified),
            _ => Err(ModelError::UnknownVerdict(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Language::En => "🇺🇸 EN",
            Language::Hi => "🇮🇳 HI",
        }
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            _ => Err(ModelError::UnknownLanguage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub source: String,
    pub url: String,
    pub timestamp: String,
    pub excerpt: String,
}

impl Evidence {
    /// `None` when the source has nothing to link to.
    pub fn link(&self) -> Option<&str> {
        let url = self.url.trim();
        (!url.is_empty()).then_some(url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Person,
    Place,
    Organization,
    Event,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub name: String,
    /// Percentage.
    pub confidence: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredibilityResult {
    pub score: Score,
    pub verdict: Verdict,
    pub title: String,
    pub summary: String,
    pub evidence: Vec<Evidence>,
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub language: Language,
}

impl CredibilityResult {
    /// Entities shown on a card. Compact cards drop them; evidence is always shown in full.
    pub fn entities_for(&self, compact: bool) -> &[Entity] {
        if compact {
            &[]
        } else {
            &self.entities
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Trending,
    Regional,
    Crisis,
    General,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Trending,
        Category::Regional,
        Category::Crisis,
        Category::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Trending => "trending",
            Category::Regional => "regional",
            Category::Crisis => "crisis",
            Category::General => "general",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Trending => "🔥 Trending",
            Category::Regional => "📍 Regional",
            Category::Crisis => "🚨 Crisis Mode",
            Category::General => "📰 General",
        }
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trending" => Ok(Category::Trending),
            "regional" => Ok(Category::Regional),
            "crisis" => Ok(Category::Crisis),
            "general" => Ok(Category::General),
            _ => Err(ModelError::UnknownCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub score: Score,
    pub verdict: Verdict,
    pub author: String,
    pub timestamp: String,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub tags: Vec<String>,
    pub language: Language,
    pub region: String,
    pub category: Category,
}

impl CommunityPost {
    pub fn is_crisis(&self) -> bool {
        self.category == Category::Crisis
    }

    pub fn author_initial(&self) -> String {
        self.author.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technique {
    Clickbait,
    FalseContext,
    CherryPicked,
    Deepfake,
}

impl Technique {
    pub fn as_str(self) -> &'static str {
        match self {
            Technique::Clickbait => "clickbait",
            Technique::FalseContext => "false-context",
            Technique::CherryPicked => "cherry-picked",
            Technique::Deepfake => "deepfake",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Technique::Clickbait => "Clickbait",
            Technique::FalseContext => "False Context",
            Technique::CherryPicked => "Cherry-Picked Data",
            Technique::Deepfake => "Deepfake",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Technique::Clickbait => "👁️",
            Technique::FalseContext => "⚠️",
            Technique::CherryPicked => "📊",
            Technique::Deepfake => "🖼️",
        }
    }
}

impl FromStr for Technique {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clickbait" => Ok(Technique::Clickbait),
            "false-context" => Ok(Technique::FalseContext),
            "cherry-picked" => Ok(Technique::CherryPicked),
            "deepfake" => Ok(Technique::Deepfake),
            _ => Err(ModelError::UnknownTechnique(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(ModelError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Before/after illustration on the back of a learn card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnExample {
    pub before: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_hi: Option<String>,
    pub after: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_hi: Option<String>,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation_hi: Option<String>,
}

impl LearnExample {
    pub fn before_in(&self, language: Language) -> &str {
        localized(&self.before, self.before_hi.as_deref(), language)
    }

    pub fn after_in(&self, language: Language) -> &str {
        localized(&self.after, self.after_hi.as_deref(), language)
    }

    pub fn explanation_in(&self, language: Language) -> &str {
        localized(&self.explanation, self.explanation_hi.as_deref(), language)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnCard {
    #[serde(rename = "type")]
    pub technique: Technique,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_hi: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_hi: Option<String>,
    pub example: LearnExample,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
    #[serde(default)]
    pub completed: bool,
}

impl LearnCard {
    pub fn title_in(&self, language: Language) -> &str {
        localized(&self.title, self.title_hi.as_deref(), language)
    }

    pub fn description_in(&self, language: Language) -> &str {
        localized(&self.description, self.description_hi.as_deref(), language)
    }

    pub fn estimated_time(&self) -> String {
        format!("{} min", self.estimated_minutes)
    }

    pub fn preview(&self) -> LearnCardPreview {
        LearnCardPreview {
            technique: self.technique,
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// Compact learn card attached to a chat reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnCardPreview {
    #[serde(rename = "type")]
    pub technique: Technique,
    pub title: String,
    pub description: String,
}

fn localized<'a>(english: &'a str, hindi: Option<&'a str>, language: Language) -> &'a str {
    match (language, hindi) {
        (Language::Hi, Some(text)) => text,
        _ => english,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    CredibilityCard,
    LearnCard,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::CredibilityCard => "credibility-card",
            MessageKind::LearnCard => "learn-card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "kebab-case")]
pub enum MessagePayload {
    Text,
    CredibilityCard(CredibilityResult),
    LearnCard(LearnCardPreview),
}

impl MessagePayload {
    pub fn kind(&self) -> MessageKind {
        match self {
            MessagePayload::Text => MessageKind::Text,
            MessagePayload::CredibilityCard(_) => MessageKind::CredibilityCard,
            MessagePayload::LearnCard(_) => MessageKind::LearnCard,
        }
    }
}

/// One entry of the chat transcript. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: Uuid,
    text: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
    #[serde(flatten)]
    payload: MessagePayload,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::User, MessagePayload::Text)
    }

    pub fn from_bot(text: impl Into<String>, payload: MessagePayload) -> Self {
        Self::new(text.into(), Sender::Bot, payload)
    }

    fn new(text: String, sender: Sender, payload: MessagePayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            sender,
            timestamp: Utc::now(),
            payload,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> MessageKind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &MessagePayload {
        &self.payload
    }

    /// Local wall-clock time, "HH:MM".
    pub fn time_label(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_rejects_values_above_hundred() {
        assert_eq!(Score::new(101), Err(ModelError::ScoreOutOfRange(101)));
        assert_eq!(Score::new(100).map(Score::value), Ok(100));
        assert_eq!(Score::new(0).map(Score::value), Ok(0));
    }

    #[test]
    fn test_score_band_boundaries() {
        assert_eq!(Score::fixture(39).band(), ScoreBand::Low);
        assert_eq!(Score::fixture(40).band(), ScoreBand::Medium);
        assert_eq!(Score::fixture(69).band(), ScoreBand::Medium);
        assert_eq!(Score::fixture(70).band(), ScoreBand::High);
        assert_eq!(Score::fixture(250).value(), 100);
    }

    #[test]
    fn test_score_deserialization_is_range_checked() {
        let ok: Score = serde_json::from_str("92").expect("in range");
        assert_eq!(ok.value(), 92);
        assert!(serde_json::from_str::<Score>("150").is_err());
    }

    #[test]
    fn test_verdict_parsing() {
        assert_eq!("Misleading".parse::<Verdict>(), Ok(Verdict::Misleading));
        assert_eq!(" true ".parse::<Verdict>(), Ok(Verdict::True));
        assert!(matches!(
            "satire".parse::<Verdict>(),
            Err(ModelError::UnknownVerdict(_))
        ));
        assert_eq!(Verdict::Unverified.label(), "UNVERIFIED");
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_value(Technique::FalseContext).expect("serialize"),
            serde_json::json!("false-context")
        );
        assert_eq!(
            serde_json::to_value(Category::Crisis).expect("serialize"),
            serde_json::json!("crisis")
        );
    }

    #[test]
    fn test_chat_message_kind_follows_payload() {
        let preview = LearnCardPreview {
            technique: Technique::Clickbait,
            title: "Clickbait Detection".to_string(),
            description: "Spot it".to_string(),
        };
        let message = ChatMessage::from_bot("card", MessagePayload::LearnCard(preview));
        assert_eq!(message.kind(), MessageKind::LearnCard);
        assert!(message.is_bot());

        let json = serde_json::to_value(&message).expect("serialize");
        assert_eq!(json["kind"], "learn-card");
        assert_eq!(json["payload"]["type"], "clickbait");
        assert_eq!(json["sender"], "bot");
    }

    #[test]
    fn test_text_message_has_no_payload() {
        let message = ChatMessage::from_user("hello");
        let json = serde_json::to_value(&message).expect("serialize");
        assert_eq!(json["kind"], "text");
        assert!(json.get("payload").is_none());
        assert_eq!(message.time_label().len(), 5);
    }

    #[test]
    fn test_localized_text_falls_back_to_english() {
        let example = LearnExample {
            before: "before".to_string(),
            before_hi: Some("पहले".to_string()),
            after: "after".to_string(),
            after_hi: None,
            explanation: "why".to_string(),
            explanation_hi: None,
        };
        assert_eq!(example.before_in(Language::Hi), "पहले");
        assert_eq!(example.after_in(Language::Hi), "after");
        assert_eq!(example.before_in(Language::En), "before");
    }

    #[test]
    fn test_evidence_without_url_has_no_link() {
        let mut item = Evidence {
            source: "Source check".to_string(),
            url: String::new(),
            timestamp: "Just now".to_string(),
            excerpt: "Source verification needed".to_string(),
        };
        assert_eq!(item.link(), None);
        item.url = "   ".to_string();
        assert_eq!(item.link(), None);
        item.url = "https://altnews.in".to_string();
        assert_eq!(item.link(), Some("https://altnews.in"));
    }
}
