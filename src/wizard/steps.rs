//! Static question definitions for the intake wizard.

/// Answer key the priming endpoint reads the goal from.
pub const GOAL_KEY: &str = "goal";
/// Answer key the priming endpoint reads the timeline from.
pub const TIMELINE_KEY: &str = "timeline";

/// One wizard question: a title, a short description, the answer key it
/// fills, and its ordered option labels.
#[derive(Debug, Clone)]
pub struct StepDef {
    pub title: &'static str,
    pub desc: &'static str,
    pub key: &'static str,
    pub options: &'static [&'static str],
}

/// The two-step deployment shipped with the client. The controller itself
/// works with any positive-length step list.
pub fn default_steps() -> Vec<StepDef> {
    vec![
        StepDef {
            title: "What brings you in today?",
            desc: "Choose the option that best matches your goal.",
            key: GOAL_KEY,
            options: &[
                "First home",
                "Refinance",
                "Investor",
                "Upgrade",
                "Construction",
            ],
        },
        StepDef {
            title: "What's your timeline?",
            desc: "Roughly when are you hoping to move ahead?",
            key: TIMELINE_KEY,
            options: &[
                "ASAP (0-1 month)",
                "Soon (1-3 months)",
                "Planning (3-6 months)",
                "Exploring (6+ months)",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_deployment_has_two_steps() {
        let steps = default_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].key, GOAL_KEY);
        assert_eq!(steps[1].key, TIMELINE_KEY);
    }

    #[test]
    fn every_step_has_options() {
        for step in default_steps() {
            assert!(!step.options.is_empty(), "{} has no options", step.key);
            assert!(!step.title.is_empty());
        }
    }
}
