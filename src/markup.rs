//! Reply markup: `**bold**` emphasis, the only formatting the backend uses.

use std::sync::LazyLock;

use regex::Regex;

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// A run of message text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasized: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// Split `text` into spans, stripping the `**` delimiters around emphasized
/// runs. Unpaired delimiters are left as literal text.
pub fn emphasis_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in EMPHASIS.captures_iter(text) {
        let whole = caps.get(0).expect("match always has group 0");
        if whole.start() > last {
            spans.push(Span::plain(&text[last..whole.start()]));
        }
        spans.push(Span::strong(caps.get(1).expect("group 1 is not optional").as_str()));
        last = whole.end();
    }
    if last < text.len() {
        spans.push(Span::plain(&text[last..]));
    }
    spans
}

/// Concatenated text of all spans, delimiters gone.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_emphasis() {
        let spans = emphasis_spans("Your **rate** is low");
        assert_eq!(
            spans,
            vec![
                Span::plain("Your "),
                Span::strong("rate"),
                Span::plain(" is low"),
            ]
        );
        assert_eq!(plain_text(&spans), "Your rate is low");
        assert!(!plain_text(&spans).contains('*'));
    }

    #[test]
    fn no_markup_is_one_plain_span() {
        let spans = emphasis_spans("hello there");
        assert_eq!(spans, vec![Span::plain("hello there")]);
    }

    #[test]
    fn multiple_emphasized_runs() {
        let spans = emphasis_spans("**a** and **b**");
        assert_eq!(
            spans,
            vec![
                Span::strong("a"),
                Span::plain(" and "),
                Span::strong("b"),
            ]
        );
    }

    #[test]
    fn unpaired_delimiter_stays_literal() {
        let spans = emphasis_spans("oops **half open");
        assert_eq!(spans, vec![Span::plain("oops **half open")]);
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(emphasis_spans("").is_empty());
    }

    #[test]
    fn empty_emphasis_is_not_a_match() {
        // `.+?` requires at least one character between the delimiters.
        let spans = emphasis_spans("a **** b");
        assert_eq!(plain_text(&spans), "a **** b");
    }
}
