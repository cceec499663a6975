// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Display formatting for the shell
//!
//! Functions return formatted strings rather than writing to stdout, so the
//! CLI and the tests share them.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::client::SOURCE_BOOK;
use crate::history::Exchange;

/// Lines of an answer shown in the history list
pub const PREVIEW_LINES: usize = 2;

/// Characters per preview line
pub const PREVIEW_WIDTH: usize = 96;

/// Format a timestamp like "Oct 15, 02:30 PM" in local time
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    format_time_in(timestamp, &Local)
}

/// Format a timestamp like "Oct 15, 02:30 PM" in the given zone
pub fn format_time_in<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .with_timezone(tz)
        .format("%b %-d, %I:%M %p")
        .to_string()
}

/// Badge for a recorded exchange's source tag
pub fn source_badge(source: &str) -> &'static str {
    if source == SOURCE_BOOK {
        "📚 Book"
    } else {
        "🤖 AI"
    }
}

/// Badge for the answer currently on screen
pub fn mode_badge(book_search: bool) -> &'static str {
    if book_search {
        "📚 Book Search"
    } else {
        "🤖 General AI"
    }
}

/// Prompt label for the current mode
pub fn prompt_label(book_search: bool) -> &'static str {
    if book_search {
        "Ask about Python Crash Course..."
    } else {
        "Ask anything..."
    }
}

/// Truncate a string to at most `max_chars` characters, adding "..." when cut
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Clamp an answer to `max_lines` lines of at most `width` characters.
///
/// Blank lines are skipped. When anything is cut, the last kept line ends
/// with "...".
pub fn answer_preview(answer: &str, max_lines: usize, width: usize) -> String {
    let lines: Vec<&str> = answer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if max_lines == 0 || lines.is_empty() {
        return String::new();
    }

    let mut kept: Vec<String> = lines
        .iter()
        .take(max_lines)
        .map(|line| truncate_chars(line, width))
        .collect();

    let more_lines = lines.len() > max_lines;
    if more_lines {
        if let Some(last) = kept.last_mut() {
            if !last.ends_with("...") {
                let room = width.saturating_sub(3);
                let base: String = last.chars().take(room).collect();
                *last = format!("{}...", base.trim_end());
            }
        }
    }

    kept.join("\n")
}

/// One history entry rendered as a header line and an indented preview
pub fn format_exchange(exchange: &Exchange, full: bool) -> String {
    let header = format!(
        "{}  [{} | {}]",
        exchange.question,
        format_time(&exchange.created_at),
        source_badge(&exchange.source)
    );

    let body = if full {
        exchange.answer.trim().to_string()
    } else {
        answer_preview(&exchange.answer, PREVIEW_LINES, PREVIEW_WIDTH)
    };

    let indented: Vec<String> = body.lines().map(|line| format!("    {}", line)).collect();
    if indented.is_empty() {
        header
    } else {
        format!("{}\n{}", header, indented.join("\n"))
    }
}
