//! Review Desk - guided review collection for chat-platform communities.
//!
//! Members rate, comment on and pick a product for an experience through a
//! three-step interactive form; completed reviews are stored and announced
//! to a configured channel. Administrators tune the form per guild.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
