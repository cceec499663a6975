// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Parsing of lines typed into the interactive session

/// What a line of interactive input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    /// Blank line
    Empty,
    /// Leave the session
    Exit,
    /// Flip book search mode
    ToggleBook,
    /// List recent questions
    History,
    /// Show available commands
    Help,
    /// Unrecognized slash command
    Unknown(String),
    /// A question for the backend
    Question(String),
}

/// Help text for the interactive session
pub const HELP_TEXT: &str = "\
Commands:
  /book      toggle Python Crash Course book search
  /history   show recent questions
  /help      show this help
  /exit      leave (also /quit, exit, quit)

Anything else is sent as a question.";

/// Classify one line of input
pub fn parse_chat_input(line: &str) -> ChatInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ChatInput::Empty;
    }

    if matches!(trimmed, "exit" | "quit") {
        return ChatInput::Exit;
    }

    let Some(command) = trimmed.strip_prefix('/') else {
        return ChatInput::Question(trimmed.to_string());
    };

    match command.split_whitespace().next().unwrap_or("") {
        "exit" | "quit" | "q" => ChatInput::Exit,
        "book" | "rag" => ChatInput::ToggleBook,
        "history" | "recent" => ChatInput::History,
        "help" | "?" => ChatInput::Help,
        other => ChatInput::Unknown(other.to_string()),
    }
}
