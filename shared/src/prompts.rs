//! Prompts for trying the chatbot out, grouped by what they exercise.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePrompt {
    pub topic: Option<&'static str>,
    pub prompt: &'static str,
    pub expected: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptGroup {
    pub name: &'static str,
    pub prompts: Vec<SamplePrompt>,
}

/// Short list offered as one-click examples on the chatbot page.
pub const JUDGE_PROMPTS: [&str; 6] = [
    "Is this true: 'PM announces free internet for all Indians'?",
    "Show me how clickbait works",
    "Check this headline: 'SHOCKING trick doctors hate!'",
    "क्या यह सच है: 'सरकार ने मुफ्त पेट्रोल की घोषणा की'?",
    "Analyze this: 'Crime increased 500% this month'",
    "Show me my learning progress",
];

const fn p(topic: Option<&'static str>, prompt: &'static str, expected: &'static str) -> SamplePrompt {
    SamplePrompt { topic, prompt, expected }
}

fn group(name: &'static str, prompts: &[SamplePrompt]) -> PromptGroup {
    PromptGroup {
        name,
        prompts: prompts.to_vec(),
    }
}

pub fn prompt_catalogue() -> Vec<PromptGroup> {
    vec![
        group("Credibility Check", &[
            p(Some("Political"), "Is this true: 'PM announces free internet for all Indians from next month'?", "Low credibility score with fact-check citations and manipulation tags"),
            p(Some("Health"), "Someone shared: 'Drinking hot water cures COVID-19 completely'. Is this accurate?", "Very low credibility with health misinformation warning"),
            p(Some("Economic"), "Check this: 'Indian rupee becomes world's strongest currency after new policy'", "Extremely low credibility with economic fact-checking"),
            p(Some("Technology"), "Is it true that 'WhatsApp will start charging ₹5 per message from December'?", "Recurring hoax detection with historical context"),
            p(Some("Social"), "Verify: 'Government announces 3-day national holiday for Diwali celebration'", "No official announcement found with government sources check"),
        ]),
        group("Learn Card Demonstration", &[
            p(None, "Show me how clickbait works", "Display clickbait learn card with examples"),
            p(None, "What is false context manipulation?", "Show false context learn card with real examples"),
            p(None, "Explain cherry-picked statistics", "Display cherry-picked data learn card"),
            p(None, "How do I spot deepfakes?", "Show deepfake detection learn card"),
        ]),
        group("Manipulation Technique Detection", &[
            p(None, "Analyze this headline: 'SHOCKING: This simple trick doctors don't want you to know!'", "Identifies clickbait manipulation with emotional triggers and curiosity gaps"),
            p(None, "What's wrong with: '90% of people can't solve this simple math problem'?", "Detects engagement bait and false challenge manipulation"),
            p(None, "Check: 'Scientists hate this one weird trick that makes you look 20 years younger'", "Multiple manipulation tags: clickbait, false authority, miracle cure claims"),
        ]),
        group("Multilingual Support", &[
            p(None, "क्या यह सच है: 'सरकार ने सभी के लिए मुफ्त पेट्रोल की घोषणा की'?", "Hindi response with credibility analysis"),
            p(None, "इस खबर की जांच करें: 'व्हाट्सऐप अब हिंदी में बात करेगा'", "Hindi fact-check with sources"),
            p(None, "गलत सूचना कैसे पहचानें?", "Hindi explanation of misinformation detection"),
        ]),
        group("Source Verification", &[
            p(None, "Check if Times of India reported: 'India becomes first country to land on sun'", "Source verification with credibility assessment"),
            p(None, "Did BBC really publish this: 'India's population reaches 2 billion'?", "Source credibility check with fact-checker cross-reference"),
            p(None, "Verify this quote from WHO: 'Yoga cures all diseases including cancer'", "Official source verification with health authority check"),
        ]),
        group("Context Verification", &[
            p(None, "This image shows massive crowd in Delhi today - is this current?", "Reverse image search simulation with timeline verification"),
            p(None, "Video of floods in Mumbai shared today - when was this actually taken?", "Video context verification with date/location analysis"),
        ]),
        group("Emergency / Crisis Mode", &[
            p(None, "Breaking: Earthquake hits Delhi, 1000+ casualties - verify immediately", "Crisis mode activation with rapid fact-checking from official sources"),
            p(None, "Urgent: PM hospitalized after heart attack - confirm this news", "High-priority verification with government sources"),
        ]),
        group("Statistical Analysis", &[
            p(None, "Analyze: 'Crime in Mumbai increased by 500% this month'", "Statistical context analysis with historical data comparison"),
            p(None, "Check this data: 'India's GDP grew 50% in last quarter'", "Economic data verification with expert analysis"),
        ]),
        group("Social Media Verification", &[
            p(None, "Celebrity X tweeted about retiring from films - is this authentic?", "Social media verification with account authenticity check"),
            p(None, "Viral Facebook post claims new government policy - verify source", "Social media credibility assessment"),
        ]),
        group("Interactive Features", &[
            p(None, "Show me my learning progress", "Display user's completion stats and achievements"),
            p(None, "What should I learn next?", "Personalized learning recommendations"),
            p(None, "Give me a quick fact-check quiz", "Interactive quiz with real examples"),
            p(None, "How accurate am I at detecting misinformation?", "Personal accuracy statistics and improvement tips"),
        ]),
        group("Advanced Analysis", &[
            p(None, "Analyze the bias in this news article: [article text]", "Bias detection with political leaning analysis"),
            p(None, "Check for coordinated inauthentic behavior in these accounts", "Bot network detection simulation"),
            p(None, "Evaluate the credibility of this scientific claim about vaccines", "Scientific fact-checking with expert sources"),
        ]),
        group("Community Features", &[
            p(None, "What's trending in misinformation today?", "Display current trending false information"),
            p(None, "Show me what the community is discussing", "Community feed with recent verifications"),
            p(None, "How can I help others spot misinformation?", "Community contribution guidelines and tips"),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::{classify, ResponseCategory};

    #[test]
    fn test_catalogue_shape() {
        let catalogue = prompt_catalogue();
        assert_eq!(catalogue.len(), 12);
        assert!(catalogue.iter().all(|g| !g.prompts.is_empty()));
        let total: usize = catalogue.iter().map(|g| g.prompts.len()).sum();
        assert_eq!(total, 36);
    }

    #[test]
    fn test_judge_prompt_routing() {
        assert_eq!(classify(JUDGE_PROMPTS[0]), ResponseCategory::Credibility);
        assert_eq!(classify(JUDGE_PROMPTS[1]), ResponseCategory::Default);
        assert_eq!(classify(JUDGE_PROMPTS[5]), ResponseCategory::LearnCard);
    }

    #[test]
    fn test_every_catalogue_prompt_can_be_sent() {
        let session = crate::chat::ChatSession::new();
        let catalogue = prompt_catalogue();
        let names: std::collections::HashSet<_> = catalogue.iter().map(|g| g.name).collect();
        assert_eq!(names.len(), catalogue.len());
        for sample in catalogue.iter().flat_map(|g| &g.prompts) {
            assert!(session.accepts(sample.prompt), "prompt: {}", sample.prompt);
            assert!(!sample.expected.is_empty());
        }
    }
}
