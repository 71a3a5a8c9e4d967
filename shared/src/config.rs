use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_TYPING_BASE_MS: u32 = 1500;
pub const DEFAULT_TYPING_JITTER_MS: u32 = 1000;

/// Timing of the simulated "bot is typing" pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub typing_base_ms: u32,
    pub typing_jitter_ms: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_base_ms: DEFAULT_TYPING_BASE_MS,
            typing_jitter_ms: DEFAULT_TYPING_JITTER_MS,
        }
    }
}

impl ChatConfig {
    /// Applies optional string overrides (as read from build-time variables) on top of the defaults.
    pub fn from_overrides(base: Option<&str>, jitter: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = base {
            config.typing_base_ms = parse_millis("typing_base_ms", value)?;
        }
        if let Some(value) = jitter {
            config.typing_jitter_ms = parse_millis("typing_jitter_ms", value)?;
        }
        Ok(config)
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.typing_base_ms))
    }
}

fn parse_millis(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_gives_defaults() {
        assert_eq!(ChatConfig::from_overrides(None, None), Ok(ChatConfig::default()));
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = ChatConfig::from_overrides(Some(" 200 "), Some("0")).expect("valid overrides");
        assert_eq!(config.typing_base_ms, 200);
        assert_eq!(config.typing_jitter_ms, 0);
    }

    #[test]
    fn test_bad_override_is_reported() {
        let err = ChatConfig::from_overrides(Some("fast"), None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "typing_base_ms",
                value: "fast".to_string()
            }
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ChatConfig = serde_json::from_str(r#"{"typing_jitter_ms": 10}"#).expect("parse");
        assert_eq!(config.typing_base_ms, DEFAULT_TYPING_BASE_MS);
        assert_eq!(config.typing_jitter_ms, 10);
    }
}
