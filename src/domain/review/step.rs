//! Steps of the review flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Position of a session in the linear review flow.
///
/// `Rating -> Comment -> Product -> Complete`. No skips, no going back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStep {
    Rating,
    Comment,
    Product,
    Complete,
}

impl ReviewStep {
    /// 1-based step number as shown to users ("Step 2 of 3").
    pub fn number(&self) -> u8 {
        match self {
            ReviewStep::Rating => 1,
            ReviewStep::Comment => 2,
            ReviewStep::Product => 3,
            ReviewStep::Complete => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStep::Rating => "rating",
            ReviewStep::Comment => "comment",
            ReviewStep::Product => "product",
            ReviewStep::Complete => "complete",
        }
    }
}

/// Number of steps a user actively fills in.
pub const INPUT_STEPS: u8 = 3;

impl StateMachine for ReviewStep {
    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            ReviewStep::Rating => vec![ReviewStep::Comment],
            ReviewStep::Comment => vec![ReviewStep::Product],
            ReviewStep::Product => vec![ReviewStep::Complete],
            ReviewStep::Complete => vec![],
        }
    }
}

impl fmt::Display for ReviewStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ReviewStep; 4] = [
        ReviewStep::Rating,
        ReviewStep::Comment,
        ReviewStep::Product,
        ReviewStep::Complete,
    ];

    #[test]
    fn flow_is_strictly_linear() {
        for (i, step) in ALL.iter().enumerate() {
            for (j, target) in ALL.iter().enumerate() {
                assert_eq!(
                    step.can_transition_to(target),
                    j == i + 1,
                    "{:?} -> {:?}",
                    step,
                    target
                );
            }
        }
    }

    #[test]
    fn complete_is_the_only_terminal_step() {
        assert!(ReviewStep::Complete.is_terminal());
        assert!(!ReviewStep::Rating.is_terminal());
        assert!(!ReviewStep::Comment.is_terminal());
        assert!(!ReviewStep::Product.is_terminal());
    }

    #[test]
    fn cannot_skip_comment() {
        assert!(ReviewStep::Rating.transition_to(ReviewStep::Product).is_err());
    }

    #[test]
    fn steps_order_by_progress() {
        assert!(ReviewStep::Rating < ReviewStep::Comment);
        assert!(ReviewStep::Product < ReviewStep::Complete);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReviewStep::Product).unwrap(),
            "\"product\""
        );
    }
}
