use super::accessors::payload_accessors;
use super::option::MessageOption;
use super::record::MessageRecord;
use crate::adapters::DiscordService;
use crate::error::MessageError;
use serde::Serialize;
use serenity::model::channel::MessageReference;
use serenity::model::id::{ChannelId, MessageId, StickerId};

/// A message posted to a guild or DM channel
///
/// `send` remembers the channel and message IDs so the same value can later
/// `edit` or `delete` what it posted. Lifecycle methods take `&mut self`;
/// share a message between tasks only behind your own lock.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ChannelMessage {
    record: MessageRecord,
}

payload_accessors!(ChannelMessage);

impl ChannelMessage {
    /// Create a message from options applied in order
    pub fn new(options: impl IntoIterator<Item = MessageOption>) -> Self {
        Self {
            record: MessageRecord::new(options),
        }
    }

    /// Set the channel of a previously sent message
    pub fn with_channel_id(mut self, channel_id: ChannelId) -> Self {
        self.record.channel_id = Some(channel_id);
        self
    }

    /// Set the ID of a previously sent message
    pub fn with_message_id(mut self, message_id: MessageId) -> Self {
        self.record.message_id = Some(message_id);
        self
    }

    /// Reply to another message
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

    /// Post the message to a channel
    ///
    /// On success the channel and the new message ID are stored for later
    /// edits and deletes. On failure nothing is stored.
    pub async fn send<D>(
        &mut self,
        discord: &D,
        channel_id: ChannelId,
    ) -> Result<MessageId, MessageError>
    where
        D: DiscordService + ?Sized,
    {
        self.record.send_to_channel(discord, channel_id).await
    }

    /// Push the current content, components, embeds and suppress-embeds flag
    ///
    /// # Errors
    ///
    /// - [`MessageError::MissingChannelId`] / [`MessageError::MissingMessageId`]
    ///   if the message has not been sent
    /// - [`MessageError::Discord`] if the request fails
    pub async fn edit<D>(&self, discord: &D) -> Result<(), MessageError>
    where
        D: DiscordService + ?Sized,
    {
        self.record.edit_sent(discord).await
    }

    /// Delete the sent message and clear its ID
    ///
    /// Fails with the same precondition errors as [`ChannelMessage::edit`].
    pub async fn delete<D>(&mut self, discord: &D) -> Result<(), MessageError>
    where
        D: DiscordService + ?Sized,
    {
        self.record.delete_sent(discord).await
    }
}
