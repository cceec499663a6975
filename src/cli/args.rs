// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// AskAfrica - ask questions of your local AI assistant
#[derive(Parser, Debug)]
#[command(name = "askafrica")]
#[command(version, about = "Ask questions of your local AI assistant")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Backend base URL (overrides settings and ASKAFRICA_BACKEND_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Keep history in memory only; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (default when no command given)
    Chat(ChatArgs),

    /// Ask a single question (non-interactive)
    Ask(AskArgs),

    /// Show recent questions
    History(HistoryArgs),

    /// Check that the backend is up
    Health,

    /// Show current settings
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the chat subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ChatArgs {
    /// Start with book search enabled
    #[arg(short, long)]
    pub book: bool,
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// The question to ask
    #[arg(required_unless_present = "stdin")]
    pub question: Option<String>,

    /// Search the Python Crash Course book instead of asking the model directly
    #[arg(short, long)]
    pub book: bool,

    /// Read the question from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the history subcommand
#[derive(clap::Args, Debug)]
pub struct HistoryArgs {
    /// Maximum number of entries to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Print whole answers instead of a two-line preview
    #[arg(long)]
    pub full: bool,
}

/// Arguments for the settings subcommand
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    /// Print only the settings file path
    #[arg(long)]
    pub path: bool,

    /// Store a new backend base URL
    #[arg(long, value_name = "URL")]
    pub set_url: Option<String>,

    /// Store whether book search is on when a session starts
    #[arg(long, value_name = "BOOL")]
    pub set_book_default: Option<bool>,
}
