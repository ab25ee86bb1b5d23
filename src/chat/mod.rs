//! Chat session: transcript model and the turn-relay controller.

pub mod controller;
pub mod transcript;

pub use controller::{ChatController, DEFAULT_CHIPS, ESCALATION_NOTICE, FAILURE_NOTICE};
pub use transcript::{Author, Bubble, Transcript};
