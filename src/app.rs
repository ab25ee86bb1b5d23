//! Session-scoped application state and the wizard → chat hand-off.

use std::sync::Arc;

use crate::chat::ChatController;
use crate::session::SessionId;
use crate::surface::Surface;
use crate::transport::{Backend, PrimeRequest};
use crate::wizard::{Advance, AnswerSet, StepDef, WizardController, GOAL_KEY, TIMELINE_KEY};

/// Lifecycle phases of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The wizard is collecting answers.
    Asking,
    /// Terminal transition in progress: priming has been dispatched.
    Priming,
    /// The chat session owns the conversation.
    Chatting,
}

/// Owns the per-run session identity, the phase, and both controllers.
/// There is exactly one `App` per run; nothing conversational lives outside
/// it.
pub struct App {
    session: SessionId,
    phase: Phase,
    wizard: WizardController,
    chat: ChatController,
    backend: Arc<dyn Backend>,
}

impl App {
    pub fn new(session: SessionId, steps: Vec<StepDef>, backend: Arc<dyn Backend>) -> Self {
        Self {
            chat: ChatController::new(session.clone()),
            session,
            phase: Phase::Asking,
            wizard: WizardController::new(steps),
            backend,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    pub fn chat(&self) -> &ChatController {
        &self.chat
    }

    /// Chips currently offered to the user.
    pub fn chips(&self) -> &[String] {
        self.chat.chips()
    }

    /// Reveal the wizard and render its first step.
    pub fn start(&mut self, surface: &mut dyn Surface) {
        self.wizard.start(surface);
    }

    /// Select an option on the current step and re-render it.
    pub fn select_option(&mut self, surface: &mut dyn Surface, option_index: usize) {
        if self.phase != Phase::Asking {
            return;
        }
        self.wizard.select(option_index);
        self.wizard.render_step(surface);
    }

    /// Step the wizard back.
    pub fn previous(&mut self, surface: &mut dyn Surface) {
        if self.phase == Phase::Asking {
            self.wizard.previous(surface);
        }
    }

    /// Advance the wizard; on the terminal step, run the finish sequence.
    pub async fn next(&mut self, surface: &mut dyn Surface) {
        if self.phase != Phase::Asking {
            return;
        }
        if let Advance::Finished(answers) = self.wizard.next(surface) {
            self.finish(surface, answers).await;
        }
    }

    /// Relay a typed chat turn. Ignored until the hand-off has happened.
    pub async fn submit_text(&mut self, surface: &mut dyn Surface, text: &str) {
        if self.phase == Phase::Chatting {
            self.chat
                .submit_text(surface, self.backend.as_ref(), text)
                .await;
        }
    }

    /// Relay a chip selection. Ignored until the hand-off has happened.
    pub async fn submit_chip(&mut self, surface: &mut dyn Surface, index: usize) {
        if self.phase == Phase::Chatting {
            self.chat
                .submit_chip(surface, self.backend.as_ref(), index)
                .await;
        }
    }

    /// Terminal transition: dispatch the priming call, flip surfaces, then
    /// send the synthetic opening turn.
    async fn finish(&mut self, surface: &mut dyn Surface, answers: AnswerSet) {
        self.phase = Phase::Priming;

        let request = PrimeRequest {
            session_id: self.session.as_str().to_string(),
            goal: answers.get(GOAL_KEY).unwrap_or("").to_string(),
            timeline: answers.get(TIMELINE_KEY).unwrap_or("").to_string(),
        };
        let backend = Arc::clone(&self.backend);
        // Best-effort context seeding: the task is never awaited and its
        // failure must not block or alter the hand-off.
        tokio::spawn(async move {
            if let Err(e) = backend.prime(&request).await {
                tracing::debug!("Priming call failed (ignored): {e}");
            }
        });

        surface.show_chat();
        self.phase = Phase::Chatting;
        self.chat.open(surface, self.backend.as_ref()).await;
    }
}
