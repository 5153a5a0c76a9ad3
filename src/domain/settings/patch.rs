//! Partial settings updates.
//!
//! `SettingsPatch` has one optional field per updatable column and nothing
//! else, so the set of writable columns is fixed at compile time. Untyped
//! input goes through `SettingsPatch::from_fields`, which rejects any name
//! outside `SettingsField::ALL`.

use serde_json::Value;
use std::fmt;

use crate::domain::foundation::{ChannelId, RoleId, ValidationError};

use super::catalog::validate_products;
use super::guild_settings::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use super::EmbedColor;

/// The writable settings columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    EmbedTitle,
    EmbedDescription,
    EmbedColor,
    Products,
    ReviewChannelId,
    AdminRoles,
}

impl SettingsField {
    pub const ALL: [SettingsField; 6] = [
        SettingsField::EmbedTitle,
        SettingsField::EmbedDescription,
        SettingsField::EmbedColor,
        SettingsField::Products,
        SettingsField::ReviewChannelId,
        SettingsField::AdminRoles,
    ];

    /// Column name in the `settings` table.
    pub fn column(&self) -> &'static str {
        match self {
            SettingsField::EmbedTitle => "embed_title",
            SettingsField::EmbedDescription => "embed_description",
            SettingsField::EmbedColor => "embed_color",
            SettingsField::Products => "products",
            SettingsField::ReviewChannelId => "review_channel_id",
            SettingsField::AdminRoles => "admin_roles",
        }
    }

    /// Resolves a field name. Anything outside the allow-list is an error.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        SettingsField::ALL
            .into_iter()
            .find(|field| field.column() == name)
            .ok_or_else(|| ValidationError::unknown_field(name))
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// A validated partial update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub embed_title: Option<String>,
    pub embed_description: Option<String>,
    pub embed_color: Option<EmbedColor>,
    pub products: Option<Vec<String>>,
    pub review_channel_id: Option<ChannelId>,
    pub admin_roles: Option<Vec<RoleId>>,
}

impl SettingsPatch {
    /// Patch for the embed form: title, description and color together.
    pub fn embed(
        title: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            embed_title: Some(validate_text("embed_title", title.into(), MAX_TITLE_LENGTH)?),
            embed_description: Some(validate_text(
                "embed_description",
                description.into(),
                MAX_DESCRIPTION_LENGTH,
            )?),
            embed_color: Some(EmbedColor::new(color)?),
            ..Default::default()
        })
    }

    pub fn products(products: Vec<String>) -> Result<Self, ValidationError> {
        validate_products(&products)?;
        Ok(Self {
            products: Some(products),
            ..Default::default()
        })
    }

    pub fn review_channel(channel_id: ChannelId) -> Self {
        Self {
            review_channel_id: Some(channel_id),
            ..Default::default()
        }
    }

    pub fn admin_roles(roles: Vec<RoleId>) -> Self {
        Self {
            admin_roles: Some(roles),
            ..Default::default()
        }
    }

    /// Builds a patch from untyped `(name, value)` pairs.
    ///
    /// Text fields take JSON strings, `products` and `admin_roles` take arrays
    /// of strings. Unknown names and wrongly typed values are rejected.
    pub fn from_fields<I, K>(fields: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut patch = SettingsPatch::default();
        for (name, value) in fields {
            let field = SettingsField::from_name(name.as_ref())?;
            match field {
                SettingsField::EmbedTitle => {
                    let text = expect_string(field, value)?;
                    patch.embed_title = Some(validate_text(field.column(), text, MAX_TITLE_LENGTH)?);
                }
                SettingsField::EmbedDescription => {
                    let text = expect_string(field, value)?;
                    patch.embed_description = Some(validate_text(
                        field.column(),
                        text,
                        MAX_DESCRIPTION_LENGTH,
                    )?);
                }
                SettingsField::EmbedColor => {
                    patch.embed_color = Some(EmbedColor::new(expect_string(field, value)?)?);
                }
                SettingsField::Products => {
                    let products = expect_string_list(field, value)?;
                    validate_products(&products)?;
                    patch.products = Some(products);
                }
                SettingsField::ReviewChannelId => {
                    patch.review_channel_id = Some(ChannelId::new(expect_string(field, value)?)?);
                }
                SettingsField::AdminRoles => {
                    let roles = expect_string_list(field, value)?
                        .into_iter()
                        .map(RoleId::new)
                        .collect::<Result<Vec<_>, _>>()?;
                    patch.admin_roles = Some(roles);
                }
            }
        }
        Ok(patch)
    }

    /// Fields this patch would write.
    pub fn fields(&self) -> Vec<SettingsField> {
        let mut fields = Vec::new();
        if self.embed_title.is_some() {
            fields.push(SettingsField::EmbedTitle);
        }
        if self.embed_description.is_some() {
            fields.push(SettingsField::EmbedDescription);
        }
        if self.embed_color.is_some() {
            fields.push(SettingsField::EmbedColor);
        }
        if self.products.is_some() {
            fields.push(SettingsField::Products);
        }
        if self.review_channel_id.is_some() {
            fields.push(SettingsField::ReviewChannelId);
        }
        if self.admin_roles.is_some() {
            fields.push(SettingsField::AdminRoles);
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

fn validate_text(field: &str, text: String, max: usize) -> Result<String, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = text.chars().count();
    if len > max {
        return Err(ValidationError::out_of_range(field, 1, max as i64, len as i64));
    }
    Ok(text)
}

fn expect_string(field: SettingsField, value: Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(ValidationError::invalid_format(field.column(), "expected a string")),
    }
}

fn expect_string_list(field: SettingsField, value: Value) -> Result<Vec<String>, ValidationError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(ValidationError::invalid_format(
                    field.column(),
                    "expected an array of strings",
                )),
            })
            .collect(),
        _ => Err(ValidationError::invalid_format(
            field.column(),
            "expected an array of strings",
        )),
    }
}
