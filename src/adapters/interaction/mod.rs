//! Interaction adapter - the inbound edge of the bot.

mod model;
mod router;

pub use model::{ChannelOption, Interaction, InteractionData, InteractionResponse};
pub use router::InteractionRouter;
