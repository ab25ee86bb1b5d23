//! Intake wizard: a fixed sequence of single-choice questions answered
//! before chat opens.

pub mod controller;
pub mod steps;

pub use controller::{Advance, WizardController};
pub use steps::{default_steps, StepDef, GOAL_KEY, TIMELINE_KEY};

use std::collections::HashMap;

/// Collected wizard answers, keyed by step key.
///
/// Mutated only by the rendered step's selection handler; moved out whole
/// when the wizard finishes. The backend, not the client, remembers the
/// values after priming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet(HashMap<String, String>);

impl AnswerSet {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    /// A step may only be advanced past when its key holds a non-empty value.
    pub fn is_answered(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }
}

/// Everything a `Surface` needs to draw one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub title: String,
    pub desc: String,
    /// Zero-based step index.
    pub index: usize,
    pub total: usize,
    pub options: Vec<String>,
    /// Position of the stored answer within `options`, if any.
    pub selected: Option<usize>,
    pub previous_enabled: bool,
    pub next_label: &'static str,
}

impl StepView {
    /// Progress through the wizard as a fraction, `(index + 1) / total`.
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.total as f64
    }
}
