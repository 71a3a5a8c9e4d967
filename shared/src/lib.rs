//! Site logic for the AI Defense demo: mock data, the keyword chatbot
//! responder and the list filters. Nothing here touches the browser, so the
//! whole crate builds and tests natively.

pub mod chat;
pub mod config;
pub mod demo;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod learn;
pub mod models;
pub mod prompts;
pub mod responder;
pub mod routes;
pub mod share;

pub use error::{ConfigError, ModelError};
