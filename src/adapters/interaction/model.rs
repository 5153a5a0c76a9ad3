//! Decoded interactions in, interaction responses out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::adapters::presentation::{MessageView, ModalView};
use crate::domain::foundation::{ChannelId, GuildId, UserId};
use crate::domain::settings::MemberPermissions;

/// One inbound interaction, as relayed by the gateway.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Interaction {
    pub guild_id: GuildId,
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub member: MemberPermissions,
    pub data: InteractionData,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionData {
    Command {
        name: String,
        #[serde(default)]
        channel: Option<ChannelOption>,
    },
    Button {
        custom_id: String,
    },
    SelectMenu {
        custom_id: String,
        #[serde(default)]
        values: Vec<String>,
    },
    ModalSubmit {
        custom_id: String,
        #[serde(default)]
        fields: HashMap<String, String>,
    },
}

impl InteractionData {
    pub fn kind(&self) -> &'static str {
        match self {
            InteractionData::Command { .. } => "command",
            InteractionData::Button { .. } => "button",
            InteractionData::SelectMenu { .. } => "select_menu",
            InteractionData::ModalSubmit { .. } => "modal_submit",
        }
    }

    /// Command name or component custom id.
    pub fn name(&self) -> &str {
        match self {
            InteractionData::Command { name, .. } => name,
            InteractionData::Button { custom_id }
            | InteractionData::SelectMenu { custom_id, .. }
            | InteractionData::ModalSubmit { custom_id, .. } => custom_id,
        }
    }
}

/// A resolved channel argument.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChannelOption {
    pub id: ChannelId,
    /// Whether the channel accepts text messages.
    #[serde(default)]
    pub text_based: bool,
}

/// How the bot answers an interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionResponse {
    /// Send a new message.
    Reply(MessageView),
    /// Edit the message the component was on.
    Update(MessageView),
    /// Open a form.
    Modal(ModalView),
}

const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;
const UPDATE_MESSAGE: u8 = 7;
const MODAL: u8 = 9;

#[derive(Serialize)]
#[serde(untagged)]
enum ResponseData<'a> {
    Message(&'a MessageView),
    Modal(&'a ModalView),
}

#[derive(Serialize)]
struct WireResponse<'a> {
    #[serde(rename = "type")]
    kind: u8,
    data: ResponseData<'a>,
}

impl Serialize for InteractionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            InteractionResponse::Reply(message) => WireResponse {
                kind: CHANNEL_MESSAGE_WITH_SOURCE,
                data: ResponseData::Message(message),
            },
            InteractionResponse::Update(message) => WireResponse {
                kind: UPDATE_MESSAGE,
                data: ResponseData::Message(message),
            },
            InteractionResponse::Modal(modal) => WireResponse {
                kind: MODAL,
                data: ResponseData::Modal(modal),
            },
        };
        wire.serialize(serializer)
    }
}

impl InteractionResponse {
    pub fn message(&self) -> Option<&MessageView> {
        match self {
            InteractionResponse::Reply(message) | InteractionResponse::Update(message) => {
                Some(message)
            }
            InteractionResponse::Modal(_) => None,
        }
    }

    pub fn modal(&self) -> Option<&ModalView> {
        match self {
            InteractionResponse::Modal(modal) => Some(modal),
            _ => None,
        }
    }

    /// Text content of a plain message reply.
    pub fn content(&self) -> Option<&str> {
        self.message().and_then(|m| m.content.as_deref())
    }
}
