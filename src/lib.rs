//! Builders for Discord channel messages, direct messages and interaction responses
//!
//! Each builder collects optional payload fields, dispatches them with a single
//! `send`, and keeps the identifiers needed to `edit` or `delete` the result.
//! Requests go through a [`DiscordService`]; [`SerenityDiscordService`] is the
//! implementation backed by serenity's HTTP client.
//!
//! ```no_run
//! use msgkit::{ChannelMessage, MessageOption, Params, SerenityDiscordService};
//! use serenity::model::id::ChannelId;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let discord = SerenityDiscordService::from_params(&Params::new()?);
//!
//! let mut message = ChannelMessage::new([MessageOption::Content("hello".to_string())]);
//! message.send(&discord, ChannelId::new(123456789)).await?;
//!
//! let message = message.with_content("hello again");
//! message.edit(&discord).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod error;
pub mod message;
pub mod params;

pub use adapters::{DiscordService, InteractionRef, SerenityDiscordService};
pub use error::MessageError;
pub use message::{ChannelMessage, DirectMessage, InteractionResponse, MessageOption, ResponseType};
pub use params::Params;
