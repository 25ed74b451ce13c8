//! AlphaChat - Terminal AI chat client library
//!
//! This library provides the core functionality for the AlphaChat client:
//! conversation management, prompt construction, history summarization,
//! transcript export, and the remote model client.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: Message processing orchestration over one conversation
//! - `history`: Append-only conversation store
//! - `prompt`: Prompt construction from recent history
//! - `summarizer`: History compaction via one remote call
//! - `suggestions`: Keyword-based input hints
//! - `export`: JSON, CSV, and PDF transcript encoders
//! - `providers`: Remote model client abstraction and Cohere implementation
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use alphachat::config::Config;
//! use alphachat::providers::create_provider;
//! use alphachat::ChatSession;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let provider = create_provider(&config.provider.provider_type, &config.provider)?;
//!     let mut session = ChatSession::new(provider);
//!     let reply = session.process_message("Hello", &config.chat).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod prompt;
pub mod providers;
pub mod session;
pub mod suggestions;
pub mod summarizer;

// Re-export commonly used types
pub use config::Config;
pub use error::{AlphachatError, Result};
pub use history::{History, Turn};
pub use session::{ChatSession, Reply, SessionState};

#[cfg(test)]
pub mod test_utils;
