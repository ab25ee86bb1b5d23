//! Chat transcript model — append-only bubbles plus the typing marker.

use chrono::{DateTime, Utc};

use crate::markup::{self, Span};

/// Who authored a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

/// One rendered transcript entry.
#[derive(Debug, Clone)]
pub struct Bubble {
    pub author: Author,
    pub spans: Vec<Span>,
    pub at: DateTime<Utc>,
}

impl Bubble {
    /// A user bubble carries the literal text, unformatted.
    pub fn user(text: &str) -> Self {
        Self {
            author: Author::User,
            spans: vec![Span::plain(text)],
            at: Utc::now(),
        }
    }

    /// A bot bubble gets `**bold**` emphasis applied.
    pub fn bot(text: &str) -> Self {
        Self {
            author: Author::Bot,
            spans: markup::emphasis_spans(text),
            at: Utc::now(),
        }
    }

    /// Concatenated span text, delimiters already stripped.
    pub fn text(&self) -> String {
        markup::plain_text(&self.spans)
    }
}

/// Append-only transcript. Entries are never edited or removed; the typing
/// marker is the only transient element, and its presence is the session's
/// only "awaiting response" state.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Bubble>,
    typing: bool,
}

impl Transcript {
    pub fn push(&mut self, bubble: Bubble) {
        self.entries.push(bubble);
    }

    pub fn entries(&self) -> &[Bubble] {
        &self.entries
    }

    pub fn begin_typing(&mut self) {
        self.typing = true;
    }

    pub fn end_typing(&mut self) {
        self.typing = false;
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_bubble_keeps_literal_text() {
        let bubble = Bubble::user("I earn **a lot**");
        assert_eq!(bubble.author, Author::User);
        // User text is never run through the markup pass.
        assert_eq!(bubble.text(), "I earn **a lot**");
        assert_eq!(bubble.spans.len(), 1);
    }

    #[test]
    fn bot_bubble_applies_emphasis() {
        let bubble = Bubble::bot("Your **rate** is low");
        assert_eq!(bubble.author, Author::Bot);
        assert_eq!(bubble.text(), "Your rate is low");
        assert!(bubble.spans.iter().any(|s| s.emphasized && s.text == "rate"));
    }

    #[test]
    fn transcript_appends_in_order() {
        let mut transcript = Transcript::default();
        transcript.push(Bubble::user("hi"));
        transcript.push(Bubble::bot("hello"));

        let texts: Vec<String> = transcript.entries().iter().map(Bubble::text).collect();
        assert_eq!(texts, vec!["hi", "hello"]);
    }

    #[test]
    fn typing_marker_toggles() {
        let mut transcript = Transcript::default();
        assert!(!transcript.is_typing());
        transcript.begin_typing();
        assert!(transcript.is_typing());
        transcript.end_typing();
        assert!(!transcript.is_typing());
    }
}
