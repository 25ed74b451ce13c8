//! Command-line interface definition for AlphaChat
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AlphaChat - Terminal AI chat client
///
/// Chat with a hosted model, keep recent context in the prompt window,
/// and export the transcript as JSON, CSV, or PDF.
#[derive(Parser, Debug, Clone)]
#[command(name = "alphachat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for AlphaChat
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Override the model identifier from config
        #[arg(short, long)]
        model: Option<String>,

        /// Override the prompt window size (1-20 recent turns)
        #[arg(short, long)]
        window: Option<usize>,

        /// Enable automatic history summarization
        #[arg(long)]
        auto_summarize: bool,

        /// Directory for exported transcripts
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            command: Commands::Chat {
                model: None,
                window: None,
                auto_summarize: false,
                export_dir: None,
            },
        }
    }
}
