//! Hex color value object for embeds.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Default accent for review embeds.
pub const DEFAULT_EMBED_COLOR: &str = "#3498db";

/// Accent used on the completion message.
pub const SUCCESS_COLOR: &str = "#27ae60";

/// Accent used on the admin configuration panel.
pub const ADMIN_PANEL_COLOR: &str = "#e74c3c";

/// A `#rgb` or `#rrggbb` color, case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmbedColor(String);

impl EmbedColor {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let digits = value.strip_prefix('#').ok_or_else(|| {
            ValidationError::invalid_format("embed_color", "must start with '#'")
        })?;
        if !(digits.len() == 3 || digits.len() == 6) {
            return Err(ValidationError::invalid_format(
                "embed_color",
                "must have 3 or 6 hex digits",
            ));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::invalid_format(
                "embed_color",
                "contains non-hex characters",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Packed `0xRRGGBB` value, expanding the short form.
    pub fn to_rgb(&self) -> u32 {
        let digits = &self.0[1..];
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };
        // Validated in `new`, so parsing cannot fail.
        u32::from_str_radix(&expanded, 16).unwrap_or_default()
    }

    fn trusted(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn success() -> Self {
        Self::trusted(SUCCESS_COLOR)
    }

    pub fn admin_panel() -> Self {
        Self::trusted(ADMIN_PANEL_COLOR)
    }
}

impl Default for EmbedColor {
    fn default() -> Self {
        Self::trusted(DEFAULT_EMBED_COLOR)
    }
}

impl TryFrom<String> for EmbedColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EmbedColor::new(value)
    }
}

impl From<EmbedColor> for String {
    fn from(color: EmbedColor) -> Self {
        color.0
    }
}

impl fmt::Display for EmbedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
