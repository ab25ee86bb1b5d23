//! Rendering seam between the controllers and the host UI.
//!
//! The controllers never touch a concrete front end; they drive whatever
//! implements `Surface` (the terminal in this binary, a recorder in tests).

pub mod terminal;

pub use terminal::TerminalSurface;

use crate::chat::Author;
use crate::markup::Span;
use crate::wizard::StepView;

/// Everything the controllers ask of the host UI.
pub trait Surface {
    /// Reveal the wizard surface and bring it into view.
    fn show_wizard(&mut self);

    /// Render one wizard step: title, progress, options, nav state.
    fn render_step(&mut self, view: &StepView);

    /// Blocking validation notice.
    fn notice(&mut self, text: &str);

    /// Hide the wizard surface and reveal the chat surface.
    fn show_chat(&mut self);

    /// Append one message bubble to the transcript view.
    fn append_bubble(&mut self, author: Author, spans: &[Span]);

    /// Insert the transient typing indicator.
    fn show_typing(&mut self);

    /// Remove the typing indicator.
    fn clear_typing(&mut self);

    /// Replace the visible quick-reply chips with `chips` (may be empty).
    fn set_chips(&mut self, chips: &[String]);

    /// Clear the free-text input.
    fn clear_input(&mut self);

    /// Scroll the transcript view to its end.
    fn scroll_to_end(&mut self);
}
