// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io::{self, Write};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use askafrica::error::Result;
use askafrica::history::Exchange;
use askafrica::shell::display::{format_exchange, mode_badge, prompt_label};

/// Print text in a color, then reset
fn print_colored(color: Color, text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(color))?;
    print!("{}", text);
    stdout.execute(ResetColor)?;
    Ok(())
}

pub(super) fn print_welcome(book_search: bool) -> Result<()> {
    println!();
    print_colored(Color::Cyan, "AskAfrica")?;
    println!(" - your local AI assistant");
    println!("Type /help for commands. Mode: {}", mode_badge(book_search));
    println!();
    Ok(())
}

/// Prompt for one line. Returns `None` at end of input.
pub(super) fn read_question(book_search: bool) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Green))?;
    print!("{} ", prompt_label(book_search));
    stdout.execute(ResetColor)?;
    stdout.flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}

pub(super) fn print_thinking() -> Result<()> {
    print_colored(Color::DarkGrey, "Thinking...\r")?;
    io::stdout().flush()?;
    Ok(())
}

pub(super) fn print_answer(answer: &str, book_search: bool) -> Result<()> {
    // Overwrite the "Thinking..." line.
    print!("{}\r", " ".repeat(12));
    print_colored(Color::Cyan, "AI Response")?;
    println!(" [{}]", mode_badge(book_search));
    println!("{}", answer.trim_end());
    println!();
    Ok(())
}

pub(super) fn print_error(message: &str) -> Result<()> {
    print!("{}\r", " ".repeat(12));
    print_colored(Color::Red, message)?;
    println!();
    println!();
    Ok(())
}

pub(super) fn print_notice(message: &str) -> Result<()> {
    print_colored(Color::Yellow, message)?;
    println!();
    Ok(())
}

pub(super) fn print_history(exchanges: &[Exchange], full: bool) -> Result<()> {
    if exchanges.is_empty() {
        println!("\nNo recent questions.\n");
        return Ok(());
    }

    println!();
    print_colored(Color::Cyan, "Recent Questions")?;
    println!("\n");
    for exchange in exchanges {
        println!("{}", format_exchange(exchange, full));
        println!();
    }
    Ok(())
}
