//! Hardcoded content shown across the site. Nothing here is computed.

use crate::models::{
    Category, CommunityPost, CredibilityResult, Entity, EntityKind, Evidence, Language,
    LearnCard, LearnCardPreview, LearnExample, Score, Technique, Difficulty, Verdict,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    /// Percentage for the progress bar, when the stat has one.
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn evidence(source: &str, url: &str, timestamp: &str, excerpt: &str) -> Evidence {
    Evidence {
        source: source.to_string(),
        url: url.to_string(),
        timestamp: timestamp.to_string(),
        excerpt: excerpt.to_string(),
    }
}

fn entity(kind: EntityKind, name: &str, confidence: u8) -> Entity {
    Entity {
        kind,
        name: name.to_string(),
        confidence,
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    title: &str,
    content: &str,
    score: u8,
    verdict: Verdict,
    author: &str,
    timestamp: &str,
    engagement: (u32, u32, u32),
    tags: &[&str],
    language: Language,
    region: &str,
    category: Category,
) -> CommunityPost {
    let (likes, comments, shares) = engagement;
    CommunityPost {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        score: Score::fixture(score),
        verdict,
        author: author.to_string(),
        timestamp: timestamp.to_string(),
        likes,
        comments,
        shares,
        tags: strings(tags),
        language,
        region: region.to_string(),
        category,
    }
}

pub fn community_posts() -> Vec<CommunityPost> {
    vec![
        post(
            "1",
            "Free Electricity in Delhi - Viral Forward",
            "Analysis of the widely circulated message about 100% free electricity in Delhi. Found to be misleading due to missing eligibility criteria and consumption limits.",
            32,
            Verdict::Misleading,
            "FactChecker_Delhi",
            "2 hours ago",
            (234, 45, 67),
            &["Delhi", "Electricity", "Government Policy"],
            Language::En,
            "Delhi",
            Category::Trending,
        ),
        post(
            "2",
            "कोविड वैक्सीन के बारे में गलत जानकारी",
            "सोशल मीडिया पर फैल रही वैक्सीन के साइड इफेक्ट्स की गलत जानकारी का विश्लेषण। WHO की रिपोर्ट के अनुसार अधिकांश दावे निराधार हैं।",
            15,
            Verdict::False,
            "HealthVerifier_IN",
            "4 hours ago",
            (456, 89, 123),
            &["वैक्सीन", "स्वास्थ्य", "WHO"],
            Language::Hi,
            "Maharashtra",
            Category::General,
        ),
        post(
            "3",
            "Deepfake Video of Celebrity - Detected",
            "AI-generated video of a Bollywood celebrity making political statements. Technical analysis reveals facial inconsistencies and audio-visual sync issues.",
            8,
            Verdict::False,
            "TechDetective",
            "6 hours ago",
            (789, 156, 234),
            &["Deepfake", "Celebrity", "AI Detection"],
            Language::En,
            "Mumbai",
            Category::Trending,
        ),
        post(
            "4",
            "Cyclone Warning - Government Advisory",
            "Verified official advisory from IMD about approaching cyclone. All evacuation procedures and safety guidelines confirmed through official channels.",
            92,
            Verdict::True,
            "CrisisResponse_Team",
            "1 hour ago",
            (1234, 67, 567),
            &["Weather", "Emergency", "IMD"],
            Language::En,
            "Odisha",
            Category::Crisis,
        ),
        post(
            "5",
            "Railway Ticket Booking Scam Alert",
            "Fake IRCTC websites asking for OTP and bank details. Multiple users reported unauthorized transactions. Always use official irctc.co.in website.",
            25,
            Verdict::Misleading,
            "CyberSafety_India",
            "8 hours ago",
            (345, 78, 89),
            &["Scam", "IRCTC", "Cybersecurity"],
            Language::En,
            "All India",
            Category::Regional,
        ),
        post(
            "6",
            "किसान आंदोलन की तस्वीरें - पुराने दावे",
            "2019 के किसान प्रदर्शन की तस्वीरों को हाल की घटनाओं के रूप में फैलाया जा रहा है। मेटाडेटा विश्लेषण से पुष्टि हुई।",
            28,
            Verdict::Misleading,
            "PhotoVerifier",
            "12 hours ago",
            (567, 234, 123),
            &["किसान", "तस्वीर", "संदर्भ"],
            Language::Hi,
            "Punjab",
            Category::Regional,
        ),
    ]
}

pub fn community_stats() -> Vec<Stat> {
    vec![
        Stat { label: "Posts Today", value: "156", progress: None },
        Stat { label: "Active Users", value: "2.3K", progress: None },
        Stat { label: "Verified", value: "89%", progress: None },
        Stat { label: "Trending", value: "12", progress: None },
    ]
}

fn example(before: &str, after: &str, explanation: &str) -> LearnExample {
    LearnExample {
        before: before.to_string(),
        before_hi: None,
        after: after.to_string(),
        after_hi: None,
        explanation: explanation.to_string(),
        explanation_hi: None,
    }
}

fn card(
    technique: Technique,
    title: &str,
    description: &str,
    example: LearnExample,
    difficulty: Difficulty,
    estimated_minutes: u32,
) -> LearnCard {
    LearnCard {
        technique,
        title: title.to_string(),
        title_hi: None,
        description: description.to_string(),
        description_hi: None,
        example,
        difficulty,
        estimated_minutes,
        completed: false,
    }
}

pub fn learn_cards() -> Vec<LearnCard> {
    vec![
        card(
            Technique::Clickbait,
            "Spotting Clickbait",
            "Learn to identify sensationalized headlines designed to manipulate emotions and drive clicks without providing substantial information.",
            example(
                "SHOCKING: This One Trick Will Make You Rich Overnight! Doctors Hate This!",
                "Investment strategy article discusses long-term wealth building through diversified portfolios over 20+ years.",
                "Clickbait uses emotional triggers, exaggerated claims, and curiosity gaps. Real news provides specific, verifiable information upfront.",
            ),
            Difficulty::Beginner,
            5,
        ),
        card(
            Technique::FalseContext,
            "False Context Detection",
            "Understand how real images or videos can be used in wrong contexts to spread misinformation about different events or places.",
            example(
                "Breaking: Massive protests in Delhi against new policy (shows crowd from 2019 farmer protests)",
                "This image is from 2019 farmer protests, not current political demonstrations. Context verification is crucial.",
                "False context manipulation reuses authentic content in misleading situations. Always verify when and where media was originally captured.",
            ),
            Difficulty::Intermediate,
            8,
        ),
        card(
            Technique::CherryPicked,
            "Cherry-Picked Statistics",
            "Recognize when data is selectively presented to support a narrative while ignoring contradictory evidence or broader context.",
            example(
                "Crime in City X increased 300% last month! (comparing to unusually low February numbers)",
                "Crime in City X shows seasonal variation; overall yearly trend remains stable when compared to historical averages.",
                "Cherry-picking selects favorable data points while ignoring the full picture. Look for broader trends and comparative context.",
            ),
            Difficulty::Advanced,
            12,
        ),
        card(
            Technique::Deepfake,
            "Deepfake Awareness",
            "Learn to spot AI-generated or manipulated audio and video content that appears authentic but is artificially created.",
            example(
                "Viral video of politician making controversial statement (AI-generated deepfake)",
                "Technical analysis reveals inconsistent facial movements, lighting artifacts, and audio-visual sync issues typical of deepfakes.",
                "Deepfakes use AI to create realistic but fake content. Look for technical inconsistencies, verify through multiple sources, and check timing.",
            ),
            Difficulty::Advanced,
            15,
        ),
    ]
}

pub fn learning_stats() -> Vec<Stat> {
    vec![
        Stat { label: "Lessons Completed", value: "12/20", progress: Some(60) },
        Stat { label: "Badges Earned", value: "5", progress: Some(100) },
        Stat { label: "Detection Accuracy", value: "85%", progress: Some(85) },
        Stat { label: "Weekly Goal", value: "3/5", progress: Some(60) },
    ]
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement { title: "Fact Checker", description: "Verified 10 pieces of content", earned: true },
        Achievement { title: "Pattern Spotter", description: "Identified 5 manipulation techniques", earned: true },
        Achievement { title: "Source Validator", description: "Cross-checked with 3 fact-checking sites", earned: true },
        Achievement { title: "Community Helper", description: "Helped 5 users understand misinformation", earned: false },
        Achievement { title: "Expert Analyst", description: "Achieved 90% detection accuracy", earned: false },
    ]
}

/// The Delhi free-electricity analysis used by the demo and features pages.
pub fn delhi_electricity_analysis() -> CredibilityResult {
    CredibilityResult {
        score: Score::fixture(32),
        verdict: Verdict::Misleading,
        title: "Delhi Free Electricity Claim - Analysis".to_string(),
        summary: "This forward contains misleading information about electricity subsidies. While Delhi does provide power subsidies, the specific claims about '100% free electricity for ALL residents' are exaggerated and omit crucial eligibility criteria and consumption limits.".to_string(),
        evidence: vec![
            evidence(
                "AltNews Fact Check",
                "https://altnews.in",
                "2 hours ago",
                "Delhi's electricity subsidy is capped at 200 units for residential consumers and has specific eligibility criteria...",
            ),
            evidence(
                "Government of Delhi Official",
                "https://delhi.gov.in",
                "1 day ago",
                "The subsidy applies only to residential connections under specific consumption limits and is not 100% free...",
            ),
            evidence(
                "BoomLive Verification",
                "https://boomlive.in",
                "3 days ago",
                "The viral message omits important details about eligibility criteria and consumption thresholds...",
            ),
        ],
        entities: vec![
            entity(EntityKind::Place, "Delhi", 95),
            entity(EntityKind::Organization, "Delhi Government", 87),
            entity(EntityKind::Person, "Arvind Kejriwal", 78),
        ],
        language: Language::En,
    }
}

/// Viral forward text the demo starts from.
pub const DELHI_FORWARD: &str = "🚨 BREAKING NEWS: Delhi Government announces 100% FREE ELECTRICITY for ALL residents! No more electricity bills! Share this amazing news with everyone IMMEDIATELY! Don't let this opportunity go! ⚡🔥";

/// Learn card shown in the demo's "Educational Insight" step.
pub fn urgency_tactics_card() -> LearnCard {
    LearnCard {
        technique: Technique::FalseContext,
        title: "Emotional Manipulation & Urgency Tactics".to_string(),
        title_hi: None,
        description: "This forward uses multiple manipulation techniques to bypass critical thinking and encourage immediate sharing without verification.".to_string(),
        description_hi: None,
        example: LearnExample {
            before: "🚨 BREAKING NEWS: 100% FREE ELECTRICITY! Share IMMEDIATELY! Don't miss this opportunity! ⚡🔥".to_string(),
            before_hi: Some("🚨 ब्रेकिंग न्यूज़: 100% मुफ्त बिजली! तुरंत शेयर करें! यह अवसर मत चूकें! ⚡🔥".to_string()),
            after: "Delhi offers electricity subsidies up to 200 units for eligible residential consumers under specific terms and conditions.".to_string(),
            after_hi: Some("दिल्ली विशिष्ट नियमों और शर्तों के तहत पात्र आवासीय उपभोक्ताओं को 200 यूनिट तक बिजली सब्सिडी प्रदान करती है।".to_string()),
            explanation: "The original uses ALL CAPS, urgency words, excessive emojis, and social pressure to create fear of missing out (FOMO). It also exaggerates partial truths to make them sound more dramatic and shareable.".to_string(),
            explanation_hi: Some("मूल में बड़े अक्षर, तात्कालिकता के शब्द, अत्यधिक इमोजी और सामाजिक दबाव का उपयोग करके FOMO (छूटने का डर) पैदा किया गया है।".to_string()),
        },
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 3,
        completed: false,
    }
}

/// Payload of the chatbot's credibility reply.
pub fn chat_credibility_result() -> CredibilityResult {
    CredibilityResult {
        score: Score::fixture(32),
        verdict: Verdict::Misleading,
        title: "Content Analysis Result".to_string(),
        summary: "This appears to contain misleading information. The claims are partially true but lack important context and contain exaggerated elements.".to_string(),
        evidence: vec![
            evidence("AltNews", "https://altnews.in", "Just now", "Fact-checked by AltNews: Partially false"),
            evidence("Context check", "", "Just now", "Missing crucial context about eligibility"),
            evidence("Source check", "", "Just now", "Source verification needed"),
        ],
        entities: Vec::new(),
        language: Language::En,
    }
}

/// Payload of the chatbot's learn-card reply.
pub fn chat_learn_preview() -> LearnCardPreview {
    LearnCardPreview {
        technique: Technique::Clickbait,
        title: "Clickbait Detection".to_string(),
        description: "Learn to spot sensationalized headlines designed to manipulate emotions.".to_string(),
    }
}

pub fn dashboard_activity() -> Vec<Stat> {
    vec![
        Stat { label: "Content Analyzed", value: "1,247", progress: None },
        Stat { label: "Misleading Flagged", value: "342", progress: None },
        Stat { label: "Users Educated", value: "2,891", progress: None },
    ]
}

pub fn trending_topics() -> Vec<(&'static str, u32)> {
    ["Delhi Electricity", "Vaccine Side Effects", "Railway Scams"]
        .iter()
        .enumerate()
        .map(|(index, topic)| (*topic, (index as u32 + 1) * 127))
        .collect()
}

pub fn regional_activity() -> Vec<(&'static str, u8)> {
    vec![("Delhi", 89), ("Mumbai", 76), ("Bangalore", 64)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_community_post_ids_are_unique() {
        let posts = community_posts();
        assert_eq!(posts.len(), 6);
        let ids: HashSet<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn test_single_crisis_post() {
        let crisis: Vec<_> = community_posts().into_iter().filter(|p| p.is_crisis()).collect();
        assert_eq!(crisis.len(), 1);
        assert_eq!(crisis[0].region, "Odisha");
    }

    #[test]
    fn test_learn_cards_cover_every_technique() {
        let techniques: HashSet<_> = learn_cards().iter().map(|c| c.technique).collect();
        assert_eq!(techniques.len(), 4);
        assert!(learn_cards().iter().all(|c| !c.completed));
    }

    #[test]
    fn test_trending_topic_counts() {
        assert_eq!(
            trending_topics(),
            vec![("Delhi Electricity", 127), ("Vaccine Side Effects", 254), ("Railway Scams", 381)]
        );
    }

    #[test]
    fn test_chat_result_keeps_every_evidence_item() {
        let result = chat_credibility_result();
        let excerpts: Vec<_> = result.evidence.iter().map(|e| e.excerpt.as_str()).collect();
        assert_eq!(
            excerpts,
            vec![
                "Fact-checked by AltNews: Partially false",
                "Missing crucial context about eligibility",
                "Source verification needed",
            ]
        );
        let links: Vec<_> = result.evidence.iter().map(|e| e.link()).collect();
        assert_eq!(links, vec![Some("https://altnews.in"), None, None]);
    }

    #[test]
    fn test_compact_card_drops_only_entities() {
        let result = delhi_electricity_analysis();
        assert_eq!(result.entities_for(false).len(), 3);
        assert!(result.entities_for(true).is_empty());
        assert_eq!(result.evidence.len(), 3);
        assert!(result.evidence.iter().all(|e| e.link().is_some()));
    }
}
