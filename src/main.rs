// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! AskAfrica - ask questions of your local AI assistant
//!
//! Entry point for the AskAfrica CLI application.

use clap::Parser;

use askafrica::cli::{ChatArgs, Cli, Commands};
use askafrica::config::Settings;
use askafrica::error::Result;

#[path = "main/commands.rs"]
mod commands;
#[path = "main/output.rs"]
mod output;

use commands::{run_ask, run_chat, run_health, run_history, run_settings};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so answers on stdout stay clean.
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    if cli.verbose > 0 {
        let directive = if cli.verbose > 1 {
            "askafrica=trace"
        } else {
            "askafrica=debug"
        };
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load()?;

    let backend_url = cli.url.clone().unwrap_or_else(|| settings.backend_url());
    tracing::debug!(backend_url = %backend_url, ephemeral = cli.ephemeral, "starting");

    let ctx = commands::RunContext {
        settings,
        backend_url,
        ephemeral: cli.ephemeral,
    };

    match cli.command {
        None => run_chat(ChatArgs::default(), &ctx).await?,
        Some(Commands::Chat(args)) => run_chat(args, &ctx).await?,
        Some(Commands::Ask(args)) => run_ask(args, &ctx).await?,
        Some(Commands::History(args)) => run_history(args, &ctx)?,
        Some(Commands::Health) => run_health(&ctx).await?,
        Some(Commands::Settings(args)) => run_settings(args, &ctx)?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "main/tests.rs"]
mod tests;
