//! Review flow tuning

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::review::CommentBounds;

/// Platform cap on a text input's length.
const TEXT_INPUT_LIMIT: usize = 4000;

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConfig {
    /// Minimum comment length in characters
    #[serde(default = "default_comment_min")]
    pub comment_min_length: usize,

    /// Maximum comment length in characters
    #[serde(default = "default_comment_max")]
    pub comment_max_length: usize,

    /// Evict sessions idle this long; 0 keeps them until completed or replaced
    #[serde(default)]
    pub session_idle_timeout_secs: u64,
}

impl ReviewConfig {
    pub fn comment_bounds(&self) -> CommentBounds {
        CommentBounds::new(self.comment_min_length, self.comment_max_length)
    }

    /// Idle cutoff for the session reaper, if enabled.
    pub fn session_idle_timeout(&self) -> Option<chrono::Duration> {
        match self.session_idle_timeout_secs {
            0 => None,
            secs => i64::try_from(secs).ok().map(chrono::Duration::seconds),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.comment_min_length == 0
            || self.comment_min_length > self.comment_max_length
            || self.comment_max_length > TEXT_INPUT_LIMIT
        {
            return Err(ValidationError::InvalidCommentBounds);
        }
        Ok(())
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            comment_min_length: default_comment_min(),
            comment_max_length: default_comment_max(),
            session_idle_timeout_secs: 0,
        }
    }
}

fn default_comment_min() -> usize {
    10
}

fn default_comment_max() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_comment_bounds_default() {
        let config = ReviewConfig::default();
        assert_eq!(config.comment_bounds(), CommentBounds::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reaper_disabled_by_default() {
        assert_eq!(ReviewConfig::default().session_idle_timeout(), None);
    }

    #[test]
    fn reaper_timeout_in_seconds() {
        let config = ReviewConfig {
            session_idle_timeout_secs: 900,
            ..Default::default()
        };
        assert_eq!(
            config.session_idle_timeout(),
            Some(chrono::Duration::minutes(15))
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let config = ReviewConfig {
            comment_min_length: 50,
            comment_max_length: 20,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCommentBounds));
    }

    #[test]
    fn zero_minimum_is_rejected() {
        let config = ReviewConfig {
            comment_min_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn maximum_above_text_input_limit_is_rejected() {
        let config = ReviewConfig {
            comment_max_length: 5000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
