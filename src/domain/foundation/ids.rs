//! Strongly-typed identifier value objects.
//!
//! Platform identifiers (guilds, users, channels, roles) are opaque snowflake
//! strings handed to us by the chat platform. Review identifiers are assigned
//! by the review store; session identifiers exist only for log correlation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! platform_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates the identifier, returning error if empty.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

platform_id!(
    /// Identifier of a community (guild). Every setting and review is scoped to one.
    GuildId,
    "guild_id"
);

platform_id!(
    /// Identifier of a platform user.
    UserId,
    "user_id"
);

platform_id!(
    /// Identifier of a text channel that receives review announcements.
    ChannelId,
    "channel_id"
);

platform_id!(
    /// Identifier of a guild role that grants admin rights over the review system.
    RoleId,
    "role_id"
);

/// Store-assigned identifier of a persisted review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(i64);

impl ReviewId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Correlation identifier for one in-flight review session.
///
/// Never persisted; it only ties together the log lines of one flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guild_id_accepts_snowflake() {
        let id = GuildId::new("112233445566778899").unwrap();
        assert_eq!(id.as_str(), "112233445566778899");
    }

    #[test]
    fn user_id_rejects_empty_string() {
        let result = UserId::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "user_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn role_id_rejects_whitespace() {
        assert!(RoleId::new("   ").is_err());
    }

    #[test]
    fn channel_id_parses_from_str() {
        let id: ChannelId = "998877".parse().unwrap();
        assert_eq!(format!("{}", id), "998877");
    }

    #[test]
    fn platform_ids_serialize_as_plain_strings() {
        let id = RoleId::new("55").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"55\"");
        assert_eq!(serde_json::from_str::<RoleId>("\"55\"").unwrap(), id);
    }

    #[test]
    fn deserializing_blank_id_fails() {
        assert!(serde_json::from_str::<GuildId>("\"  \"").is_err());
    }

    #[test]
    fn review_id_displays_number() {
        assert_eq!(ReviewId::new(42).to_string(), "42");
        assert_eq!(ReviewId::new(42).value(), 42);
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }
}
