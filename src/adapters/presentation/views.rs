//! UI descriptors serialized in the platform's message-component JSON shape.

use serde::{Serialize, Serializer};

use crate::domain::foundation::Timestamp;
use crate::domain::settings::EmbedColor;

/// Message flag that shows a reply only to the invoking user.
pub const EPHEMERAL_FLAG: u64 = 1 << 6;

const ACTION_ROW: u8 = 1;
const BUTTON: u8 = 2;
const STRING_SELECT: u8 = 3;
const TEXT_INPUT: u8 = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

impl EmbedView {
    pub fn new(color: &EmbedColor) -> Self {
        Self {
            title: None,
            description: None,
            color: color.to_rgb(),
            footer: None,
            timestamp: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter { text: text.into() });
        self
    }

    pub fn with_timestamp(mut self, at: &Timestamp) -> Self {
        self.timestamp = Some(at.to_rfc3339());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
}

impl Serialize for ButtonStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let code = match self {
            ButtonStyle::Primary => 1,
            ButtonStyle::Secondary => 2,
            ButtonStyle::Success => 3,
            ButtonStyle::Danger => 4,
        };
        serializer.serialize_u8(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputStyle {
    Short,
    Paragraph,
}

impl Serialize for TextInputStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(match self {
            TextInputStyle::Short => 1,
            TextInputStyle::Paragraph => 2,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonView {
    #[serde(rename = "type")]
    kind: u8,
    pub custom_id: String,
    pub label: String,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOptionView {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectMenuView {
    #[serde(rename = "type")]
    kind: u8,
    pub custom_id: String,
    pub placeholder: String,
    pub options: Vec<SelectOptionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextInputView {
    #[serde(rename = "type")]
    kind: u8,
    pub custom_id: String,
    pub label: String,
    pub style: TextInputStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl TextInputView {
    pub fn new(custom_id: &str, label: &str, style: TextInputStyle) -> Self {
        Self {
            kind: TEXT_INPUT,
            custom_id: custom_id.to_string(),
            label: label.to_string(),
            style,
            min_length: None,
            max_length: None,
            required: true,
            value: None,
            placeholder: None,
        }
    }

    pub fn with_length(mut self, min: Option<usize>, max: usize) -> Self {
        self.min_length = min;
        self.max_length = Some(max);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentView {
    Button(ButtonView),
    SelectMenu(SelectMenuView),
    TextInput(TextInputView),
}

impl ComponentView {
    pub fn button(custom_id: &str, label: &str, style: ButtonStyle) -> Self {
        ComponentView::Button(ButtonView {
            kind: BUTTON,
            custom_id: custom_id.to_string(),
            label: label.to_string(),
            style,
            disabled: false,
        })
    }

    pub fn disabled_button(custom_id: &str, label: &str, style: ButtonStyle) -> Self {
        ComponentView::Button(ButtonView {
            kind: BUTTON,
            custom_id: custom_id.to_string(),
            label: label.to_string(),
            style,
            disabled: true,
        })
    }

    pub fn select_menu(custom_id: &str, placeholder: &str, options: Vec<SelectOptionView>) -> Self {
        ComponentView::SelectMenu(SelectMenuView {
            kind: STRING_SELECT,
            custom_id: custom_id.to_string(),
            placeholder: placeholder.to_string(),
            options,
        })
    }

    pub fn custom_id(&self) -> &str {
        match self {
            ComponentView::Button(b) => &b.custom_id,
            ComponentView::SelectMenu(s) => &s.custom_id,
            ComponentView::TextInput(t) => &t.custom_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRowView {
    #[serde(rename = "type")]
    kind: u8,
    pub components: Vec<ComponentView>,
}

impl ActionRowView {
    pub fn new(components: Vec<ComponentView>) -> Self {
        Self {
            kind: ACTION_ROW,
            components,
        }
    }
}

/// A message body: content, embeds, components and flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub embeds: Vec<EmbedView>,
    pub components: Vec<ActionRowView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl MessageView {
    pub fn embed(embed: EmbedView, components: Vec<ActionRowView>) -> Self {
        Self {
            content: None,
            embeds: vec![embed],
            components,
            flags: None,
        }
    }

    /// Plain text visible only to the invoking user.
    pub fn ephemeral_text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            flags: Some(EPHEMERAL_FLAG),
            ..Default::default()
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.flags = Some(EPHEMERAL_FLAG);
        self
    }

    pub fn is_ephemeral(&self) -> bool {
        self.flags.is_some_and(|f| f & EPHEMERAL_FLAG != 0)
    }

    /// Every custom id on the message, in order.
    pub fn custom_ids(&self) -> Vec<&str> {
        self.components
            .iter()
            .flat_map(|row| row.components.iter().map(ComponentView::custom_id))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalView {
    pub custom_id: String,
    pub title: String,
    pub components: Vec<ActionRowView>,
}

impl ModalView {
    /// A modal with one text input per row.
    pub fn new(custom_id: &str, title: &str, inputs: Vec<TextInputView>) -> Self {
        Self {
            custom_id: custom_id.to_string(),
            title: title.to_string(),
            components: inputs
                .into_iter()
                .map(|input| ActionRowView::new(vec![ComponentView::TextInput(input)]))
                .collect(),
        }
    }
}
