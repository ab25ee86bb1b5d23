//! Wizard controller — one question at a time, an answer required to
//! advance, terminal step hands the collected answers back to the app.

use crate::surface::Surface;

use super::steps::StepDef;
use super::{AnswerSet, StepView};

/// Outcome of a `next()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Validation blocked the transition; the step index is unchanged.
    Stayed,
    /// Moved to the following step.
    Moved,
    /// The last step was confirmed; answers are handed off for priming.
    Finished(AnswerSet),
}

/// Drives the ordered question sequence and owns the answer set until the
/// finish hand-off.
pub struct WizardController {
    steps: Vec<StepDef>,
    answers: AnswerSet,
    index: usize,
}

impl WizardController {
    /// `steps` must be non-empty.
    pub fn new(steps: Vec<StepDef>) -> Self {
        debug_assert!(!steps.is_empty(), "wizard needs at least one step");
        Self {
            steps,
            answers: AnswerSet::default(),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Reveal the wizard surface and render the current step. Safe to call
    /// again; state is unaffected by a re-render.
    pub fn start(&self, surface: &mut dyn Surface) {
        surface.show_wizard();
        self.render_step(surface);
    }

    /// Render the current step through the surface.
    pub fn render_step(&self, surface: &mut dyn Surface) {
        surface.render_step(&self.step_view());
    }

    /// Render payload for the current step.
    pub fn step_view(&self) -> StepView {
        let step = &self.steps[self.index];
        let selected = self
            .answers
            .get(step.key)
            .and_then(|answer| step.options.iter().position(|&opt| opt == answer));
        StepView {
            title: step.title.to_string(),
            desc: step.desc.to_string(),
            index: self.index,
            total: self.steps.len(),
            options: step.options.iter().map(|&opt| opt.to_string()).collect(),
            selected,
            previous_enabled: self.index > 0,
            next_label: if self.index + 1 == self.steps.len() {
                "Finish"
            } else {
                "Next"
            },
        }
    }

    /// Store the option at `option_index` as the current step's answer.
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, option_index: usize) {
        let step = &self.steps[self.index];
        if let Some(&option) = step.options.get(option_index) {
            self.answers.set(step.key, option);
        }
    }

    /// Step back one question. No-op on the first step.
    pub fn previous(&mut self, surface: &mut dyn Surface) {
        if self.index > 0 {
            self.index -= 1;
            self.render_step(surface);
        }
    }

    /// Advance, or finish on the last step. An unanswered step blocks with
    /// a validation notice and leaves all state untouched.
    pub fn next(&mut self, surface: &mut dyn Surface) -> Advance {
        let step = &self.steps[self.index];
        if !self.answers.is_answered(step.key) {
            surface.notice("Please choose one option.");
            return Advance::Stayed;
        }

        if self.index + 1 < self.steps.len() {
            self.index += 1;
            self.render_step(surface);
            Advance::Moved
        } else {
            Advance::Finished(std::mem::take(&mut self.answers))
        }
    }
}
