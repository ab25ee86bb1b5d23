//! Chat session controller — relays each turn to the backend and renders
//! the reply, chips, and escalation notices.

use crate::session::SessionId;
use crate::surface::Surface;
use crate::transport::{Backend, ChatRequest};

use super::transcript::{Bubble, Transcript};

/// Fallback chips shown after a typed turn when the backend suggests none.
pub const DEFAULT_CHIPS: [&str; 3] = [
    "What documents do I need?",
    "What's the process?",
    "Book a broker call",
];

/// Fixed advisory appended when the backend flags an escalation.
pub const ESCALATION_NOTICE: &str = "This looks like it needs a broker. \
    I can book a quick call and make sure we meet Best Interests Duty.";

/// Fixed apology appended when a turn fails in transit. No retry follows.
pub const FAILURE_NOTICE: &str =
    "Sorry, I hit a snag. Please try again or speak with a broker.";

/// Sentinel first message eliciting the backend's opening line. Not treated
/// as literal chat text by the backend.
const OPENING_MESSAGE: &str = "start";

/// Manages the linear transcript and the current chip set for one session.
pub struct ChatController {
    session: SessionId,
    transcript: Transcript,
    chips: Vec<String>,
}

impl ChatController {
    pub fn new(session: SessionId) -> Self {
        Self {
            session,
            transcript: Transcript::default(),
            chips: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The currently visible quick-reply chips.
    pub fn chips(&self) -> &[String] {
        &self.chips
    }

    /// Typed submission. Whitespace-only input is a no-op. The input and
    /// chips are cleared synchronously before the request goes out.
    pub async fn submit_text(
        &mut self,
        surface: &mut dyn Surface,
        backend: &dyn Backend,
        text: &str,
    ) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.append(surface, Bubble::user(text));
        surface.clear_input();
        self.replace_chips(surface, Vec::new());
        surface.scroll_to_end();
        self.send(surface, backend, text, true).await;
    }

    /// Quick-reply selection. Sends the chip's label as the turn; an
    /// out-of-range index is a no-op.
    pub async fn submit_chip(
        &mut self,
        surface: &mut dyn Surface,
        backend: &dyn Backend,
        index: usize,
    ) {
        let Some(label) = self.chips.get(index).cloned() else {
            return;
        };
        self.append(surface, Bubble::user(&label));
        self.replace_chips(surface, Vec::new());
        surface.scroll_to_end();
        self.send(surface, backend, &label, false).await;
    }

    /// Synthetic first turn after the wizard hand-off: no user bubble, no
    /// fallback chips for this turn.
    pub async fn open(&mut self, surface: &mut dyn Surface, backend: &dyn Backend) {
        self.send(surface, backend, OPENING_MESSAGE, false).await;
    }

    /// One request/response cycle. Inserts the typing marker exactly once
    /// and removes it exactly once, on both success and failure paths, and
    /// always scrolls the transcript afterward.
    async fn send(
        &mut self,
        surface: &mut dyn Surface,
        backend: &dyn Backend,
        message: &str,
        show_default_chips_on_empty: bool,
    ) {
        self.transcript.begin_typing();
        surface.show_typing();

        let request = ChatRequest {
            session_id: self.session.as_str().to_string(),
            message: message.to_string(),
        };

        match backend.chat(&request).await {
            Ok(response) => {
                self.transcript.end_typing();
                surface.clear_typing();

                self.append(surface, Bubble::bot(&response.reply));

                if !response.chips.is_empty() {
                    self.replace_chips(surface, response.chips);
                } else if show_default_chips_on_empty {
                    let fallback = DEFAULT_CHIPS.iter().map(|&c| c.to_string()).collect();
                    self.replace_chips(surface, fallback);
                }
                // Otherwise the chip row stays as cleared at submission time.

                if response.escalation {
                    self.append(surface, Bubble::bot(ESCALATION_NOTICE));
                }
            }
            Err(e) => {
                tracing::warn!("Chat turn failed: {e}");
                self.transcript.end_typing();
                surface.clear_typing();
                self.append(surface, Bubble::bot(FAILURE_NOTICE));
            }
        }

        surface.scroll_to_end();
    }

    fn append(&mut self, surface: &mut dyn Surface, bubble: Bubble) {
        surface.append_bubble(bubble.author, &bubble.spans);
        self.transcript.push(bubble);
    }

    fn replace_chips(&mut self, surface: &mut dyn Surface, chips: Vec<String>) {
        surface.set_chips(&chips);
        self.chips = chips;
    }
}
