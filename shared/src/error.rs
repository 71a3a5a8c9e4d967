use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Score {0} is outside 0..=100")]
    ScoreOutOfRange(u32),
    #[error("Unknown verdict: {0}")]
    UnknownVerdict(String),
    #[error("Unknown post category: {0}")]
    UnknownCategory(String),
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
    #[error("Unknown technique: {0}")]
    UnknownTechnique(String),
    #[error("No learn card at index {0}")]
    UnknownCard(usize),
    #[error("No demo step at index {0}")]
    UnknownStep(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
