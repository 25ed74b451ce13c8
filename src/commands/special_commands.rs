//! Special commands parser for interactive chat mode
//!
//! This module parses and handles special commands that can be entered
//! during interactive chat sessions. Special commands allow users to:
//! - Adjust session settings (model, prompt window, auto-summarize)
//! - Export the transcript in one or all formats
//! - Clear the history, view status, read the FAQ
//! - Display help information and exit the session
//!
//! Commands are prefixed with `/` and are case-insensitive.

use crate::config::{MAX_WINDOW, MIN_WINDOW};
use crate::export::ExportFormat;
use colored::Colorize;
use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Special commands that can be executed during interactive chat
///
/// These commands modify the session state or produce artifacts, rather
/// than being sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Display help information
    Help,

    /// Print the canned FAQ entries
    Faq,

    /// Show session settings, state, and history length
    ShowStatus,

    /// Drop all conversation history
    Clear,

    /// Export the transcript in one format
    Export(ExportFormat),

    /// Export the transcript in all formats
    ExportAll,

    /// Set the model identifier (free text)
    SetModel(String),

    /// Set the prompt window / keep-last count (1-20)
    SetWindow(usize),

    /// Turn auto-summarization on or off
    SetAutoSummarize(bool),

    /// Exit the interactive session
    Exit,

    /// Not a special command
    ///
    /// The input should be processed as a regular chat message.
    None,
}

/// Canned FAQ entries shown by `/faq`
const FAQ_TABLE: &[(&str, &str)] = &[
    (
        "What can this bot do?",
        "It can answer questions, provide suggestions, and summarize conversations.",
    ),
    (
        "How does the bot remember context?",
        "It keeps track of recent messages and can summarize older chats to maintain context.",
    ),
    (
        "Can I export the chat?",
        "Yes! You can download the chat history as JSON, CSV, or PDF.",
    ),
    (
        "Does it support multiple personalities?",
        "Yes, the bot can switch modes like casual, study helper, or recommendations.",
    ),
];

/// Parse a user input string into a special command
///
/// Checks if the input matches any special command pattern. Commands are
/// case-insensitive and may have aliases. Input not starting with `/` is
/// never a command.
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` if input starts with "/" but is
/// not a valid command, `UnsupportedArgument` for an invalid argument, and
/// `MissingArgument` when a required argument is absent.
///
/// # Command Examples
///
/// - `/export json` - Write `chat_history.json`
/// - `/export all` - Write all three artifacts
/// - `/model command-light` - Switch models
/// - `/window 10` - Keep the last 10 turns in the prompt
/// - `/autosummarize on` - Compact old history automatically
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return Ok(SpecialCommand::None);
    }

    let mut parts = trimmed.split_whitespace();
    let command = parts
        .next()
        .map(|c| c.to_lowercase())
        .unwrap_or_default();
    let arg = parts.next();
    let rest: Vec<&str> = trimmed.split_whitespace().skip(1).collect();

    match command.as_str() {
        "/help" | "/h" => Ok(SpecialCommand::Help),
        "/faq" => Ok(SpecialCommand::Faq),
        "/status" => Ok(SpecialCommand::ShowStatus),
        "/clear" => Ok(SpecialCommand::Clear),
        "/quit" | "/exit" | "/q" => Ok(SpecialCommand::Exit),

        "/export" => match arg {
            None => Err(CommandError::MissingArgument {
                command: "/export".to_string(),
                usage: "/export <json|csv|pdf|all>".to_string(),
            }),
            Some(a) if a.eq_ignore_ascii_case("all") => Ok(SpecialCommand::ExportAll),
            Some(a) => ExportFormat::parse_str(a)
                .map(SpecialCommand::Export)
                .map_err(|_| CommandError::UnsupportedArgument {
                    command: "/export".to_string(),
                    arg: a.to_string(),
                }),
        },

        "/model" => {
            if rest.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/model".to_string(),
                    usage: "/model <name>".to_string(),
                })
            } else {
                Ok(SpecialCommand::SetModel(rest.join(" ")))
            }
        }

        "/window" => match arg {
            None => Err(CommandError::MissingArgument {
                command: "/window".to_string(),
                usage: format!("/window <{}-{}>", MIN_WINDOW, MAX_WINDOW),
            }),
            Some(a) => match a.parse::<usize>() {
                Ok(n) if (MIN_WINDOW..=MAX_WINDOW).contains(&n) => {
                    Ok(SpecialCommand::SetWindow(n))
                }
                _ => Err(CommandError::UnsupportedArgument {
                    command: "/window".to_string(),
                    arg: a.to_string(),
                }),
            },
        },

        "/autosummarize" => match arg {
            None => Err(CommandError::MissingArgument {
                command: "/autosummarize".to_string(),
                usage: "/autosummarize <on|off>".to_string(),
            }),
            Some(a) => match a.to_lowercase().as_str() {
                "on" | "true" => Ok(SpecialCommand::SetAutoSummarize(true)),
                "off" | "false" => Ok(SpecialCommand::SetAutoSummarize(false)),
                other => Err(CommandError::UnsupportedArgument {
                    command: "/autosummarize".to_string(),
                    arg: other.to_string(),
                }),
            },
        },

        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Print help for all special commands
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!("  /help                    Show this help");
    println!("  /faq                     Show frequently asked questions");
    println!("  /status                  Show session settings and history length");
    println!("  /clear                   Clear the chat history");
    println!("  /export <json|csv|pdf>   Export the transcript in one format");
    println!("  /export all              Export the transcript in every format");
    println!("  /model <name>            Set the model identifier");
    println!(
        "  /window <{}-{}>           Set how many recent turns the prompt keeps",
        MIN_WINDOW, MAX_WINDOW
    );
    println!("  /autosummarize <on|off>  Toggle automatic history compaction");
    println!("  /quit                    Leave the session");
    println!();
    println!("Anything else is sent to the model as a chat message.");
}

/// Print the canned FAQ table
pub fn print_faq() {
    println!("{}", "FAQ".bold());
    for (question, answer) in FAQ_TABLE {
        println!("  {}", question.cyan());
        println!("    {}", answer);
    }
}
