/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes the interactive chat handler plus the special-command parser it
uses. The handlers are intentionally small and use the library components:
the provider, the chat session, and the export encoders.
*/

use crate::config::{Config, MAX_WINDOW, MIN_WINDOW};
use crate::error::Result;
use crate::export::{export_to_dir, ExportFormat};
use crate::providers::create_provider;
use crate::session::ChatSession;
use crate::suggestions::suggest;

// Special commands parser for session adjustments
pub mod special_commands;

use crate::commands::special_commands::{
    parse_special_command, print_faq, print_help, SpecialCommand,
};

/// Chat command handler
pub mod chat {
    //! Interactive chat mode handler.
    //!
    //! Instantiates the provider, creates a [`ChatSession`], and runs a
    //! readline-based loop that submits user input to the remote model.
    //! Slash commands adjust settings and produce transcript exports.

    use super::*;
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Whether the loop should keep going after a special command
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Flow {
        Continue,
        Quit,
    }

    /// Start interactive chat mode
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be constructed (for
    /// example a missing credential) or the terminal cannot be driven.
    /// Remote failures inside the loop are reported and do not end the
    /// session.
    pub async fn run_chat(config: Config) -> Result<()> {
        tracing::info!("Starting interactive chat mode");

        // A missing credential fails here, before the loop starts.
        let provider = create_provider(&config.provider.provider_type, &config.provider)?;
        let mut session = ChatSession::new(provider);
        let mut settings = config.chat.clone();

        let mut rl = DefaultEditor::new()?;

        print_welcome_banner(&settings);

        loop {
            match rl.readline(">> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(trimmed)?;

                    match parse_special_command(trimmed) {
                        Ok(SpecialCommand::None) => {}
                        Ok(command) => {
                            if handle_special_command(command, &mut session, &mut settings)
                                == Flow::Quit
                            {
                                break;
                            }
                            continue;
                        }
                        Err(e) => {
                            println!("{}", e.to_string().red());
                            continue;
                        }
                    }

                    // UX nicety: show a canned hint when the input
                    // contains a known keyword.
                    if let Some(hint) = suggest(trimmed) {
                        println!("{}", hint.cyan());
                    }

                    match session.process_message(trimmed, &settings).await {
                        Ok(Some(reply)) => {
                            if reply.summarized {
                                println!(
                                    "{}",
                                    "Older history was compacted into a summary".yellow()
                                );
                            }
                            println!("{}", reply.text.green());
                            println!(
                                "{}",
                                format!("Reply received in {:.2}s", reply.latency.as_secs_f64())
                                    .dimmed()
                            );
                        }
                        Ok(None) => {}
                        Err(e) => {
                            println!("{}", format!("Request failed: {}", e).red());
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Apply one parsed special command to the session
    fn handle_special_command(
        command: SpecialCommand,
        session: &mut ChatSession,
        settings: &mut crate::config::ChatConfig,
    ) -> Flow {
        match command {
            SpecialCommand::Help => print_help(),
            SpecialCommand::Faq => print_faq(),
            SpecialCommand::Exit => return Flow::Quit,
            SpecialCommand::Clear => {
                session.clear();
                println!("Chat history cleared.");
            }
            SpecialCommand::ShowStatus => print_status(session, settings),
            SpecialCommand::Export(format) => export_one(session, settings, format),
            SpecialCommand::ExportAll => {
                if session.history().is_empty() {
                    println!("{}", "Nothing to export yet.".yellow());
                } else {
                    for format in ExportFormat::ALL {
                        export_one(session, settings, format);
                    }
                }
            }
            SpecialCommand::SetModel(model) => {
                println!("Model set to {}", model);
                settings.model = model;
            }
            SpecialCommand::SetWindow(window) => {
                // The parser already enforces the range; keep the guard in
                // case a caller constructs the command directly.
                if (MIN_WINDOW..=MAX_WINDOW).contains(&window) {
                    settings.max_turns = window;
                    println!("Prompt window set to {} turns", window);
                } else {
                    println!(
                        "{}",
                        format!(
                            "Window must be between {} and {}",
                            MIN_WINDOW, MAX_WINDOW
                        )
                        .red()
                    );
                }
            }
            SpecialCommand::SetAutoSummarize(enabled) => {
                settings.auto_summarize = enabled;
                println!(
                    "Auto-summarize {}",
                    if enabled { "enabled" } else { "disabled" }
                );
            }
            SpecialCommand::None => {}
        }
        Flow::Continue
    }

    /// Export the transcript in one format, reporting the outcome
    ///
    /// A PDF failure is a warning, not an error: the other export paths
    /// stay available and the session keeps running either way.
    fn export_one(
        session: &ChatSession,
        settings: &crate::config::ChatConfig,
        format: ExportFormat,
    ) {
        if session.history().is_empty() {
            println!("{}", "Nothing to export yet.".yellow());
            return;
        }

        match export_to_dir(session.history(), format, &settings.export_dir) {
            Ok(path) => println!("{}", format!("Saved {}", path.display()).green()),
            Err(e) if format == ExportFormat::Pdf => {
                tracing::warn!("PDF export failed: {}", e);
                println!(
                    "{}",
                    format!("PDF export temporarily unavailable: {}", e).yellow()
                );
            }
            Err(e) => {
                println!("{}", format!("{} export failed: {}", format, e).red());
            }
        }
    }

    /// Print the session banner shown at startup
    fn print_welcome_banner(settings: &crate::config::ChatConfig) {
        println!("{}", "AlphaChat interactive session".bold());
        println!(
            "model: {}  window: {}  auto-summarize: {}",
            settings.model,
            settings.max_turns,
            if settings.auto_summarize { "on" } else { "off" }
        );
        println!("Type '/help' for commands, '/quit' to leave.\n");
    }

    /// Print current settings, processing state, and history length
    fn print_status(session: &ChatSession, settings: &crate::config::ChatConfig) {
        println!("provider:       {}", session.provider_name());
        println!("model:          {}", settings.model);
        println!("window:         {} turns", settings.max_turns);
        println!(
            "auto-summarize: {}",
            if settings.auto_summarize { "on" } else { "off" }
        );
        println!("state:          {}", session.state());
        println!("history:        {} turns", session.history().len());
        println!("export dir:     {}", settings.export_dir.display());
    }
}
