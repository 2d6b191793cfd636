use super::interaction_ref::InteractionRef;
use serenity::async_trait;
use serenity::builder::{CreateInteractionResponse, CreateMessage, EditInteractionResponse, EditMessage};
use serenity::model::id::{ChannelId, MessageId, UserId};

/// Interface for the Discord operations messages are dispatched through
///
/// Every method is a single request. Implementations must not retry; errors are
/// handed back to the caller unchanged.
#[async_trait]
pub trait DiscordService: Send + Sync {
    /// Post a new message to a channel
    ///
    /// # Returns
    ///
    /// The ID Discord assigned to the created message
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, serenity::Error>;

    /// Replace the editable fields of an existing message
    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: EditMessage,
    ) -> Result<(), serenity::Error>;

    /// Delete a message
    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), serenity::Error>;

    /// Open (or reuse) the private channel with a user
    ///
    /// # Returns
    ///
    /// The ID of the DM channel
    async fn create_private_channel(&self, user_id: UserId) -> Result<ChannelId, serenity::Error>;

    /// Send the initial response to an interaction
    async fn create_interaction_response(
        &self,
        interaction: &InteractionRef,
        response: CreateInteractionResponse,
    ) -> Result<(), serenity::Error>;

    /// Edit the original response of an interaction
    async fn edit_interaction_response(
        &self,
        interaction: &InteractionRef,
        response: EditInteractionResponse,
    ) -> Result<(), serenity::Error>;

    /// Delete the original response of an interaction
    async fn delete_interaction_response(
        &self,
        interaction: &InteractionRef,
    ) -> Result<(), serenity::Error>;
}
