use super::discord_service::DiscordService;
use super::interaction_ref::InteractionRef;
use crate::params::Params;
use serenity::async_trait;
use serenity::builder::{
    Builder as _, CreateInteractionResponse, CreateMessage, EditInteractionResponse, EditMessage,
};
use serenity::http::Http;
use serenity::model::id::{ApplicationId, ChannelId, MessageId, UserId};
use std::sync::Arc;
use tracing::debug;

/// Implementation for Discord operations via Serenity
pub struct SerenityDiscordService {
    http: Arc<Http>,
}

impl SerenityDiscordService {
    /// Create a new SerenityDiscordService
    ///
    /// # Arguments
    ///
    /// * `http` - The serenity HTTP client (e.g. `ctx.http` inside an event handler)
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Create a standalone HTTP client from configuration
    ///
    /// Without an application ID, interaction response edits and deletes are
    /// rejected by Discord.
    pub fn from_params(params: &Params) -> Self {
        let http = Http::new(&params.discord_token);
        if let Some(application_id) = params.application_id {
            http.set_application_id(ApplicationId::new(application_id.get()));
        }
        Self::new(Arc::new(http))
    }

    /// Get the underlying HTTP client
    pub fn http(&self) -> &Arc<Http> {
        &self.http
    }
}

#[async_trait]
impl DiscordService for SerenityDiscordService {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, serenity::Error> {
        let sent = channel_id.send_message(&self.http, message).await?;
        Ok(sent.id)
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: EditMessage,
    ) -> Result<(), serenity::Error> {
        channel_id
            .edit_message(&self.http, message_id, message)
            .await?;
        Ok(())
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), serenity::Error> {
        channel_id.delete_message(&self.http, message_id).await
    }

    async fn create_private_channel(&self, user_id: UserId) -> Result<ChannelId, serenity::Error> {
        let channel = user_id.create_dm_channel(&self.http).await?;
        debug!(
            user_id = %user_id,
            channel_id = %channel.id,
            "Private channel resolved"
        );
        Ok(channel.id)
    }

    async fn create_interaction_response(
        &self,
        interaction: &InteractionRef,
        response: CreateInteractionResponse,
    ) -> Result<(), serenity::Error> {
        response
            .execute(&self.http, (interaction.id, interaction.token.as_str()))
            .await
    }

    async fn edit_interaction_response(
        &self,
        interaction: &InteractionRef,
        response: EditInteractionResponse,
    ) -> Result<(), serenity::Error> {
        response
            .execute(&self.http, interaction.token.as_str())
            .await?;
        Ok(())
    }

    async fn delete_interaction_response(
        &self,
        interaction: &InteractionRef,
    ) -> Result<(), serenity::Error> {
        self.http
            .delete_original_interaction_response(&interaction.token)
            .await
    }
}
