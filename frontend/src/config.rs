use shared::config::ChatConfig;

pub const SITE_NAME: &str = "AI Defense";

/// Chat timing, optionally overridden at build time, e.g.
/// `AI_DEFENSE_TYPING_BASE_MS=300 trunk serve`.
pub fn get_chat_config() -> ChatConfig {
    let base = option_env!("AI_DEFENSE_TYPING_BASE_MS");
    let jitter = option_env!("AI_DEFENSE_TYPING_JITTER_MS");
    match ChatConfig::from_overrides(base, jitter) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}, falling back to default chat timing", e);
            ChatConfig::default()
        }
    }
}
