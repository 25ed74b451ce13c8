//! Configuration management for AlphaChat
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{AlphachatError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Smallest accepted prompt window size
pub const MIN_WINDOW: usize = 1;

/// Largest accepted prompt window size
pub const MAX_WINDOW: usize = 20;

/// Main configuration structure for AlphaChat
///
/// Holds the provider settings and the chat session defaults. None of it
/// is persisted back; the file is read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Provider configuration
    pub provider: ProviderConfig,

    /// Chat session settings
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Provider configuration
///
/// Specifies which remote model client to use and its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Type of provider to use
    #[serde(rename = "type")]
    pub provider_type: String,

    /// Cohere configuration
    #[serde(default)]
    pub cohere: CohereConfig,
}

/// Cohere provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CohereConfig {
    /// Optional API base URL override (useful for tests and local mocks)
    ///
    /// When set, this base is used to build the chat endpoint, which
    /// allows tests to point the provider at a mock server.
    #[serde(default)]
    pub api_base: Option<String>,

    /// API key override; when absent the `COHERE_API_KEY` environment
    /// variable is consulted at startup
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Chat session settings
///
/// These are the user-adjustable values of a session: the prompt window,
/// the model identifier, and the auto-summarize flag. They are read at
/// submission time, so slash commands can change them mid-session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Model identifier sent with every request (free text)
    #[serde(default = "default_model")]
    pub model: String,

    /// Number of most-recent turns included in a generated prompt, and
    /// the keep-last count when history is summarized (1-20)
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,

    /// Compact old history with a summarization call once it grows past
    /// the auto-summarize threshold
    #[serde(default)]
    pub auto_summarize: bool,

    /// Directory where exported transcripts are written
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

fn default_model() -> String {
    "command-nightly".to_string()
}

fn default_max_turns() -> usize {
    6
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_turns: default_max_turns(),
            auto_summarize: false,
            export_dir: default_export_dir(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// Priority order (lowest to highest): defaults, config file,
    /// environment variables, CLI arguments.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default_config()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn default_config() -> Self {
        Self {
            provider: ProviderConfig {
                provider_type: "cohere".to_string(),
                cohere: CohereConfig::default(),
            },
            chat: ChatConfig::default(),
        }
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AlphachatError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| AlphachatError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(provider_type) = std::env::var("ALPHACHAT_PROVIDER") {
            self.provider.provider_type = provider_type;
        }

        if let Ok(api_base) = std::env::var("ALPHACHAT_COHERE_API_BASE") {
            self.provider.cohere.api_base = Some(api_base);
        }

        if let Ok(model) = std::env::var("ALPHACHAT_MODEL") {
            self.chat.model = model;
        }

        if let Ok(max_turns) = std::env::var("ALPHACHAT_MAX_TURNS") {
            if let Ok(value) = max_turns.parse() {
                self.chat.max_turns = value;
            } else {
                tracing::warn!("Invalid ALPHACHAT_MAX_TURNS: {}", max_turns);
            }
        }

        if let Ok(auto) = std::env::var("ALPHACHAT_AUTO_SUMMARIZE") {
            match auto.parse::<bool>() {
                Ok(value) => self.chat.auto_summarize = value,
                Err(_) => tracing::warn!("Invalid ALPHACHAT_AUTO_SUMMARIZE: {}", auto),
            }
        }

        if let Ok(dir) = std::env::var("ALPHACHAT_EXPORT_DIR") {
            self.chat.export_dir = PathBuf::from(dir);
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let crate::cli::Commands::Chat {
            model,
            window,
            auto_summarize,
            export_dir,
        } = &cli.command;

        if let Some(model) = model {
            self.chat.model = model.clone();
        }
        if let Some(window) = window {
            self.chat.max_turns = *window;
        }
        if *auto_summarize {
            self.chat.auto_summarize = true;
        }
        if let Some(dir) = export_dir {
            self.chat.export_dir = dir.clone();
        }
    }

    /// Validate the configuration
    ///
    /// Ensures all configuration values are within acceptable ranges
    /// and that required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.provider.provider_type.is_empty() {
            return Err(AlphachatError::Config("Provider type cannot be empty".to_string()).into());
        }

        let valid_providers = ["cohere"];
        if !valid_providers.contains(&self.provider.provider_type.as_str()) {
            return Err(AlphachatError::Config(format!(
                "Invalid provider type: {}. Must be one of: {}",
                self.provider.provider_type,
                valid_providers.join(", ")
            ))
            .into());
        }

        if self.chat.model.trim().is_empty() {
            return Err(AlphachatError::Config("Model name cannot be empty".to_string()).into());
        }

        if !(MIN_WINDOW..=MAX_WINDOW).contains(&self.chat.max_turns) {
            return Err(AlphachatError::Config(format!(
                "max_turns must be between {} and {}",
                MIN_WINDOW, MAX_WINDOW
            ))
            .into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
