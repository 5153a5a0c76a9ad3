//! Admin predicate for the review system.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RoleId, ValidationError};

use super::GuildSettings;

/// Most admin roles a guild may configure.
pub const MAX_ADMIN_ROLES: usize = 25;

/// What the platform tells us about the acting member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPermissions {
    #[serde(default)]
    pub administrator: bool,
    #[serde(default)]
    pub manage_guild: bool,
    #[serde(default)]
    pub role_ids: Vec<RoleId>,
}

impl MemberPermissions {
    /// Platform-native admin: Administrator or Manage Guild.
    pub fn has_native_admin(&self) -> bool {
        self.administrator || self.manage_guild
    }

    /// Native admin, or holds one of the guild's configured admin roles.
    pub fn is_review_admin(&self, settings: &GuildSettings) -> bool {
        self.has_native_admin()
            || settings
                .admin_roles
                .iter()
                .any(|role| self.role_ids.contains(role))
    }
}

/// Parses the admin-role form text.
///
/// Tokens are split on whitespace and commas. Each is a numeric role id or a
/// `<@&id>` mention. Empty text clears the list.
pub fn parse_role_list(text: &str) -> Result<Vec<RoleId>, ValidationError> {
    let roles = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let id = token
                .strip_prefix("<@&")
                .and_then(|rest| rest.strip_suffix('>'))
                .unwrap_or(token);
            if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ValidationError::invalid_format(
                    "admin_roles",
                    format!("'{}' is not a role id or role mention", token),
                ));
            }
            RoleId::new(id)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if roles.len() > MAX_ADMIN_ROLES {
        return Err(ValidationError::out_of_range(
            "admin_roles",
            0,
            MAX_ADMIN_ROLES as i64,
            roles.len() as i64,
        ));
    }
    Ok(roles)
}
