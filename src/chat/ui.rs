//! Chat mode UI components.

use crate::layout::LayoutHints;
use crate::render::MarkdownRenderer;
use crate::ui::Style;

use super::session::SessionConfig;
use super::transcript::{Message, Role, Transcript};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Realtime alt.f Help Interface",
        Style::header("rahi"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

/// One-shot hint shown at session start (the widget tooltip, basically).
pub fn print_hint() {
    println!("{}", Style::hint("Ask me anything about alt.f"));
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig, profile_complete: bool) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}           {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}   {}",
        Style::label("profile complete"),
        Style::value(profile_complete)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}  {}",
        Style::command("/toggle"),
        Style::secondary("Hide or show the chat window")
    );
    println!(
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("End the session")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

pub fn print_hidden_notice() {
    println!(
        "{}",
        Style::hint("(chat hidden - /toggle brings it back; messages still go through)")
    );
    println!();
}

/// Prints one transcript entry: speaker tag, then the body.
///
/// Assistant entries go through the markdown skin; user entries are printed
/// verbatim. Compact mode (narrow terminals) inlines the user tag and drops
/// the blank separator line.
pub fn print_message(renderer: &MarkdownRenderer, hints: &LayoutHints, message: &Message) {
    let label = message.role.label();
    let tag = match message.role {
        Role::User => Style::user_tag(label),
        Role::Assistant => Style::assistant_tag(label),
    };

    match message.role {
        Role::Assistant => {
            println!("{tag}");
            print!("{}", renderer.render(&message.content, hints.wrap_cols));
        }
        Role::User if hints.compact => println!("{tag}: {}", message.content),
        Role::User => {
            println!("{tag}");
            println!("{}", message.content);
        }
    }
    if !hints.compact {
        println!();
    }
}

/// Prints the transcript tail that fits the current pane height.
///
/// The newest entry always prints, even if it alone overflows the pane.
pub fn print_transcript(renderer: &MarkdownRenderer, hints: &LayoutHints, transcript: &Transcript) {
    let messages = transcript.messages();
    let mut start = messages.len();
    let mut budget = hints.transcript_rows;

    for (i, message) in messages.iter().enumerate().rev() {
        let rows = rendered_rows(renderer, hints, message);
        if rows > budget && start < messages.len() {
            break;
        }
        budget = budget.saturating_sub(rows);
        start = i;
        if budget == 0 {
            break;
        }
    }

    if start > 0 {
        let noun = if start == 1 { "message" } else { "messages" };
        println!("{}", Style::hint(format!("({start} earlier {noun} hidden)")));
        println!();
    }

    for message in &messages[start..] {
        print_message(renderer, hints, message);
    }
}

fn rendered_rows(renderer: &MarkdownRenderer, hints: &LayoutHints, message: &Message) -> usize {
    let body_rows = match message.role {
        Role::Assistant => renderer
            .render(&message.content, hints.wrap_cols)
            .lines()
            .count(),
        Role::User if hints.compact => 0,
        Role::User => message.content.lines().count(),
    };
    let tag_row = 1;
    let separator = usize::from(!hints.compact);
    body_rows + tag_row + separator
}
