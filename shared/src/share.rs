use crate::models::CredibilityResult;

pub const SHARE_FOOTER: &str = "🔍 Verified by AI Defense Tool\nAlways verify before sharing! 🛡️";

/// WhatsApp-ready fact-check alert for a result card.
pub fn share_text(result: &CredibilityResult) -> String {
    let mut lines = vec![
        format!("⚠️ *Fact-Check Alert:* {}", result.title),
        format!(
            "Credibility score: {}/100 ({})",
            result.score,
            result.verdict.label()
        ),
        String::new(),
        result.summary.clone(),
    ];

    if !result.evidence.is_empty() {
        lines.push(String::new());
        lines.push("*Evidence:*".to_string());
        for item in &result.evidence {
            lines.push(format!("• {}: {}", item.source, item.excerpt));
        }
    }

    lines.push(String::new());
    lines.push(SHARE_FOOTER.to_string());
    lines.join("\n")
}

pub fn whatsapp_url(text: &str) -> String {
    format!("https://wa.me/?text={}", urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_share_text_contents() {
        let text = share_text(&fixtures::delhi_electricity_analysis());
        assert!(text.starts_with("⚠️ *Fact-Check Alert:* Delhi Free Electricity Claim"));
        assert!(text.contains("32/100 (MISLEADING)"));
        assert!(text.contains("• AltNews Fact Check:"));
        assert!(text.contains("• BoomLive Verification:"));
        assert!(text.ends_with(SHARE_FOOTER));
    }

    #[test]
    fn test_share_text_without_evidence() {
        let mut result = fixtures::delhi_electricity_analysis();
        result.evidence.clear();
        assert!(!share_text(&result).contains("*Evidence:*"));
    }

    #[test]
    fn test_whatsapp_url_is_encoded() {
        let url = whatsapp_url("a b&c");
        assert_eq!(url, "https://wa.me/?text=a%20b%26c");
    }
}
