//! Free-text review comment.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Characters shown before a comment preview is cut off.
pub const PREVIEW_LENGTH: usize = 100;

/// Length bounds for a comment, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentBounds {
    pub min: usize,
    pub max: usize,
}

impl CommentBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Default for CommentBounds {
    fn default() -> Self {
        Self { min: 10, max: 1000 }
    }
}

/// A validated comment. The stored text is never truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comment(String);

impl Comment {
    /// Validates `text` against `bounds`.
    ///
    /// Whitespace-only text counts as empty. Length is measured in characters.
    pub fn new(text: impl Into<String>, bounds: CommentBounds) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("comment"));
        }
        let len = text.chars().count();
        if len < bounds.min.max(1) || len > bounds.max {
            return Err(ValidationError::out_of_range(
                "comment",
                bounds.min as i64,
                bounds.max as i64,
                len as i64,
            ));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first `PREVIEW_LENGTH` characters, with `...` when cut.
    pub fn preview(&self) -> String {
        if self.0.chars().count() > PREVIEW_LENGTH {
            let head: String = self.0.chars().take(PREVIEW_LENGTH).collect();
            format!("{}...", head)
        } else {
            self.0.clone()
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
