//! Terminal surface — renders the wizard and chat over stdout/stderr.
//!
//! Conversation content goes to stdout; prompts, indicators, and notices go
//! to stderr so piped output stays clean.

use std::io::Write;

use crate::chat::Author;
use crate::markup::Span;
use crate::wizard::StepView;

use super::Surface;

const BAR_WIDTH: usize = 20;

/// Stdout-backed implementation of `Surface`.
#[derive(Default)]
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for TerminalSurface {
    fn show_wizard(&mut self) {
        println!("Let's get a few details first.\n");
    }

    fn render_step(&mut self, view: &StepView) {
        println!(
            "Step {}/{}  {}",
            view.index + 1,
            view.total,
            progress_bar(view.index, view.total, BAR_WIDTH)
        );
        println!("{}", view.title);
        if !view.desc.is_empty() {
            println!("{}", view.desc);
        }
        for (i, option) in view.options.iter().enumerate() {
            let marker = if view.selected == Some(i) { "●" } else { "○" };
            println!("  {marker} {}. {option}", i + 1);
        }
        let mut nav = vec![format!("[n] {}", view.next_label)];
        if view.previous_enabled {
            nav.push("[p] Previous".to_string());
        }
        println!("  {}\n", nav.join("  "));
    }

    fn notice(&mut self, text: &str) {
        eprintln!("⚠️  {text}");
    }

    fn show_chat(&mut self) {
        println!("\n── Chat ───────────────────────────────");
    }

    fn append_bubble(&mut self, author: Author, spans: &[Span]) {
        let who = match author {
            Author::User => "You",
            Author::Bot => "Finny",
        };
        println!("{who}: {}", format_spans(spans));
    }

    fn show_typing(&mut self) {
        eprint!("Finny is typing…");
        let _ = std::io::stderr().flush();
    }

    fn clear_typing(&mut self) {
        // Wipe the typing line.
        eprint!("\r\x1b[2K");
        let _ = std::io::stderr().flush();
    }

    fn set_chips(&mut self, chips: &[String]) {
        if chips.is_empty() {
            return;
        }
        let numbered: Vec<String> = chips
            .iter()
            .enumerate()
            .map(|(i, chip)| format!("[{}] {chip}", i + 1))
            .collect();
        println!("   Suggestions: {}", numbered.join("  "));
    }

    fn clear_input(&mut self) {
        // The terminal line was already consumed by the read loop.
    }

    fn scroll_to_end(&mut self) {
        // The terminal scrolls on its own.
    }
}

/// Proportional progress bar, `(index + 1) / total` of `width` cells filled.
fn progress_bar(index: usize, total: usize, width: usize) -> String {
    let filled = ((index + 1) * width) / total.max(1);
    let filled = filled.min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// ANSI rendering: emphasized spans come out bold, delimiters are gone.
fn format_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| {
            if span.emphasized {
                format!("\x1b[1m{}\x1b[22m", span.text)
            } else {
                span.text.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_is_proportional() {
        assert_eq!(progress_bar(0, 2, 4), "[██░░]");
        assert_eq!(progress_bar(1, 2, 4), "[████]");
        assert_eq!(progress_bar(0, 1, 4), "[████]");
    }

    #[test]
    fn progress_bar_never_overflows() {
        let bar = progress_bar(9, 10, 20);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 20);
        assert_eq!(bar.chars().filter(|&c| c == '░').count(), 0);
    }

    #[test]
    fn format_spans_bolds_emphasis_only() {
        let spans = vec![Span::plain("Your "), Span::strong("rate")];
        let out = format_spans(&spans);
        assert_eq!(out, "Your \x1b[1mrate\x1b[22m");
        assert!(!out.contains('*'));
    }
}
