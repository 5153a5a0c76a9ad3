//! State machine trait for step enums.
//!
//! Gives every linear or branching lifecycle enum the same vocabulary for
//! checking and performing transitions. The review flow's `ReviewStep` is the
//! main implementor.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list their legal targets; validated transitions come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for ReviewStep {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Rating => vec![Comment],
///             Comment => vec![Product],
///             Product => vec![Complete],
///             Complete => vec![],
///         }
///     }
/// }
///
/// let next = ReviewStep::Rating.transition_to(ReviewStep::Comment)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Off,
        On,
        Broken,
    }

    impl StateMachine for Light {
        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Light::Off => vec![Light::On, Light::Broken],
                Light::On => vec![Light::Off, Light::Broken],
                Light::Broken => vec![],
            }
        }
    }

    #[test]
    fn default_can_transition_follows_valid_transitions() {
        assert!(Light::Off.can_transition_to(&Light::On));
        assert!(!Light::Broken.can_transition_to(&Light::On));
    }

    #[test]
    fn transition_to_reports_both_states() {
        let err = Light::Broken.transition_to(Light::Off).unwrap_err();
        assert!(err.to_string().contains("Broken"));
        assert!(err.to_string().contains("Off"));
    }

    #[test]
    fn terminal_state_has_no_exits() {
        assert!(Light::Broken.is_terminal());
        assert!(!Light::On.is_terminal());
    }
}
