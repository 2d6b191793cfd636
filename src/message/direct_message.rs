use super::accessors::payload_accessors;
use super::option::MessageOption;
use super::record::MessageRecord;
use crate::adapters::DiscordService;
use crate::error::MessageError;
use serde::Serialize;
use serenity::model::channel::MessageReference;
use serenity::model::id::{ChannelId, MessageId, StickerId, UserId};
use tracing::debug;

/// A message posted to a user's private channel
///
/// Behaves like [`ChannelMessage`](super::ChannelMessage), except `send` takes
/// a user and opens the DM channel first. The resolved channel is what later
/// edits and deletes use.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DirectMessage {
    record: MessageRecord,
}

payload_accessors!(DirectMessage);

impl DirectMessage {
    /// Create a direct message from options applied in order
    pub fn new(options: impl IntoIterator<Item = MessageOption>) -> Self {
        Self {
            record: MessageRecord::new(options),
        }
    }

    /// Set the DM channel of a previously sent message
    pub fn with_channel_id(mut self, channel_id: ChannelId) -> Self {
        self.record.channel_id = Some(channel_id);
        self
    }

    /// Set the ID of a previously sent message
    pub fn with_message_id(mut self, message_id: MessageId) -> Self {
        self.record.message_id = Some(message_id);
        self
    }

    /// Reply to another message in the DM channel
    pub fn with_reference(mut self, reference: impl Into<MessageReference>) -> Self {
        self.record.reference = Some(reference.into());
        self
    }

    pub fn with_sticker_ids(mut self, sticker_ids: Vec<StickerId>) -> Self {
        self.record.sticker_ids = sticker_ids;
        self
    }

    pub fn channel_id(&self) -> Option<ChannelId> {
        self.record.channel_id
    }

    pub fn message_id(&self) -> Option<MessageId> {
        self.record.message_id
    }

    /// Send the message to a user
    ///
    /// Opens the private channel with `user_id`, then posts to it. If either
    /// request fails its error is returned and no IDs are stored.
    pub async fn send<D>(&mut self, discord: &D, user_id: UserId) -> Result<MessageId, MessageError>
    where
        D: DiscordService + ?Sized,
    {
        debug!(user_id = %user_id, "Resolving private channel");

        let channel_id = discord.create_private_channel(user_id).await?;
        self.record.send_to_channel(discord, channel_id).await
    }

    /// Push the current content, components, embeds and suppress-embeds flag
    pub async fn edit<D>(&self, discord: &D) -> Result<(), MessageError>
    where
        D: DiscordService + ?Sized,
    {
        self.record.edit_sent(discord).await
    }

    /// Delete the sent message and clear its ID
    pub async fn delete<D>(&mut self, discord: &D) -> Result<(), MessageError>
    where
        D: DiscordService + ?Sized,
    {
        self.record.delete_sent(discord).await
    }
}
