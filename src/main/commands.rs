// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io::Read;
use std::sync::Arc;

use askafrica::cli::{AskArgs, ChatArgs, HistoryArgs, SettingsArgs};
use askafrica::client::AskClient;
use askafrica::config::Settings;
use askafrica::error::{user_message, Result};
use askafrica::history::HistoryStore;
use askafrica::shell::input::{parse_chat_input, ChatInput, HELP_TEXT};
use askafrica::shell::{Shell, SubmitOutcome};
use askafrica::storage::{DurableStore, FileStore, MemoryStore};

use super::output::{
    print_answer, print_error, print_history, print_notice, print_thinking, print_welcome,
    read_question,
};

/// Resolved options shared by every command
pub(super) struct RunContext {
    pub settings: Settings,
    pub backend_url: String,
    pub ephemeral: bool,
}

impl RunContext {
    fn storage(&self) -> Arc<dyn DurableStore> {
        if self.ephemeral {
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(FileStore::new(&self.settings.storage.path))
        }
    }

    fn client(&self) -> Result<AskClient> {
        Settings::validate_backend_url(&self.backend_url)?;
        Ok(AskClient::new(&self.backend_url))
    }

    /// Load history once; this is the only storage read of the run.
    fn shell(&self, book_search: bool) -> Result<Shell<AskClient>> {
        let client = self.client()?;
        let history = HistoryStore::load(self.storage());
        Ok(Shell::new(client, history).with_book_search(book_search))
    }
}

/// Run the interactive session
pub(super) async fn run_chat(args: ChatArgs, ctx: &RunContext) -> Result<()> {
    let mut shell = ctx.shell(args.book || ctx.settings.defaults.book_search)?;

    print_welcome(shell.book_search())?;

    while let Some(line) = read_question(shell.book_search())? {
        match parse_chat_input(&line) {
            ChatInput::Empty => continue,
            ChatInput::Exit => break,
            ChatInput::Help => println!("\n{}\n", HELP_TEXT),
            ChatInput::History => print_history(shell.history(), false)?,
            ChatInput::ToggleBook => {
                let enabled = shell.toggle_book_search();
                print_notice(if enabled {
                    "Book search on: questions go to Python Crash Course."
                } else {
                    "Book search off: questions go to the general model."
                })?;
            }
            ChatInput::Unknown(command) => {
                print_notice(&format!("Unknown command '/{}'. Type /help.", command))?;
            }
            ChatInput::Question(question) => {
                print_thinking()?;
                match shell.submit(&question).await {
                    SubmitOutcome::Answered(_) => {
                        if let Some(answer) = shell.last_answer() {
                            print_answer(&answer.text, answer.book_search)?;
                        }
                    }
                    SubmitOutcome::Failed(message) => print_error(&message)?,
                    SubmitOutcome::Suppressed => {}
                }
            }
        }
    }

    println!();
    Ok(())
}

/// Ask one question and print the answer.
///
/// Blank input is dropped without a request or any output.
pub(super) async fn run_ask(args: AskArgs, ctx: &RunContext) -> Result<()> {
    let question = if args.stdin {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.question.unwrap_or_default()
    };

    let mut shell = ctx.shell(args.book || ctx.settings.defaults.book_search)?;
    match shell.submit(&question).await {
        SubmitOutcome::Answered(exchange) => {
            println!("{}", exchange.answer.trim_end());
            Ok(())
        }
        SubmitOutcome::Failed(message) => {
            print_error(&message)?;
            std::process::exit(1);
        }
        SubmitOutcome::Suppressed => Ok(()),
    }
}

/// List recent questions
pub(super) fn run_history(args: HistoryArgs, ctx: &RunContext) -> Result<()> {
    let history = HistoryStore::load(ctx.storage());
    let shown = args.limit.min(history.len());
    print_history(&history.current()[..shown], args.full)
}

/// Query the backend health endpoint
pub(super) async fn run_health(ctx: &RunContext) -> Result<()> {
    let client = ctx.client()?;
    match client.health().await {
        Ok(health) => {
            let model = health.model.as_deref().unwrap_or("unknown");
            println!("{}: {} (model: {})", client.base_url(), health.status, model);
            if !health.is_healthy() {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            print_error(&format!("{}: {}", client.base_url(), user_message(&e)))?;
            std::process::exit(1);
        }
    }
}

/// Print the active settings
pub(super) fn run_settings(args: SettingsArgs, ctx: &RunContext) -> Result<()> {
    if args.path {
        println!("{}", Settings::default_path().display());
        return Ok(());
    }

    if args.set_url.is_some() || args.set_book_default.is_some() {
        let mut settings = ctx.settings.clone();
        if let Some(url) = args.set_url {
            Settings::validate_backend_url(&url)?;
            settings.backend.base_url = url.trim().to_string();
        }
        if let Some(book) = args.set_book_default {
            settings.defaults.book_search = book;
        }
        settings.save()?;
        println!("Saved {}", Settings::default_path().display());
        return Ok(());
    }

    println!("Settings file: {}", Settings::default_path().display());
    println!("Backend URL:   {}", ctx.backend_url);
    println!("Storage:       {}", ctx.settings.storage.path.display());
    println!(
        "Book search:   {}",
        if ctx.settings.defaults.book_search {
            "on by default"
        } else {
            "off by default"
        }
    );
    Ok(())
}
