//! Slash command registration payload.

use serde::Serialize;

use super::custom_ids::{
    ADMIN_CONFIG_COMMAND, CHANNEL_OPTION, REVIEW_MENU_COMMAND, SET_REVIEW_CHANNEL_COMMAND,
};

/// Option type for a channel argument.
const CHANNEL_OPTION_TYPE: u8 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOption {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
    pub required: bool,
}

/// The three commands the bot registers.
pub fn command_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            name: REVIEW_MENU_COMMAND,
            description: "Opens the review menu for customers to leave reviews",
            options: Vec::new(),
        },
        CommandDefinition {
            name: SET_REVIEW_CHANNEL_COMMAND,
            description: "Set the channel where reviews will be sent (Admin only)",
            options: vec![CommandOption {
                name: CHANNEL_OPTION,
                description: "The channel to send reviews to",
                kind: CHANNEL_OPTION_TYPE,
                required: true,
            }],
        },
        CommandDefinition {
            name: ADMIN_CONFIG_COMMAND,
            description: "Configure the review system (Admin only)",
            options: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_review_channel_has_required_channel_option() {
        let value = serde_json::to_value(command_definitions()).unwrap();
        assert_eq!(value[1]["name"], json!("setreviewchannel"));
        assert_eq!(
            value[1]["options"][0],
            json!({
                "name": "channel",
                "description": "The channel to send reviews to",
                "type": 7,
                "required": true
            })
        );
        assert!(value[0].get("options").is_none());
    }
}
