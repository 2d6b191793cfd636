use super::accessors::payload_accessors;
use super::option::MessageOption;
use super::record::MessageRecord;
use super::response_type::ResponseType;
use crate::adapters::{DiscordService, InteractionRef};
use crate::error::MessageError;
use serde::Serialize;
use serenity::builder::AutocompleteChoice;
use serenity::model::channel::{Attachment, MessageFlags};
use tracing::{debug, info};

/// The response to a slash command, component or modal interaction
///
/// Instead of a channel/message pair this keeps the [`InteractionRef`] the
/// response was sent to, which edits and deletes of the original response
/// go through.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct InteractionResponse {
    record: MessageRecord,
}

payload_accessors!(InteractionResponse);

impl InteractionResponse {
    /// Create a response from options applied in order
    pub fn new(options: impl IntoIterator<Item = MessageOption>) -> Self {
        Self {
            record: MessageRecord::new(options),
        }
    }

    /// Set the interaction of a previously sent response
    pub fn with_interaction(mut self, interaction: impl Into<InteractionRef>) -> Self {
        self.record.interaction = Some(interaction.into());
        self
    }

    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.record.response_type = Some(response_type);
        self
    }

    /// Set the existing attachments kept when editing
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.record.attachments = attachments;
        self
    }

    /// Set the choices of an autocomplete response
    pub fn with_choices(mut self, choices: Vec<AutocompleteChoice>) -> Self {
        self.record.choices = choices;
        self
    }

    /// Set the custom ID of a modal response
    pub fn with_custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.record.custom_id = custom_id.into();
        self
    }

    /// Set the title of a modal response
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.record.title = title.into();
        self
    }

    /// Set or clear the ephemeral flag
    pub fn with_ephemeral(mut self, ephemeral: bool) -> Self {
        self.record.flags.set(MessageFlags::EPHEMERAL, ephemeral);
        self
    }

    pub fn interaction(&self) -> Option<&InteractionRef> {
        self.record.interaction.as_ref()
    }

    /// Configured response type, or the default used when sending
    pub fn response_type(&self) -> ResponseType {
        self.record.response_type()
    }

    pub fn is_ephemeral(&self) -> bool {
        self.record.flags.contains(MessageFlags::EPHEMERAL)
    }

    /// Respond to an interaction
    ///
    /// The payload depends on the response type:
    /// - message types carry content, embeds, components, files, TTS,
    ///   allowed mentions and flags
    /// - `Modal` carries the custom ID, title and components
    /// - `Autocomplete` carries the choices
    /// - `Pong` and `DeferredUpdateMessage` carry nothing
    ///
    /// On success the interaction is stored for later edits and deletes.
    pub async fn send<D>(
        &mut self,
        discord: &D,
        interaction: impl Into<InteractionRef>,
    ) -> Result<(), MessageError>
    where
        D: DiscordService + ?Sized,
    {
        let interaction = interaction.into();
        let response_type = self.record.response_type();

        debug!(
            interaction_id = %interaction.id,
            ?response_type,
            "Sending interaction response"
        );

        discord
            .create_interaction_response(&interaction, self.record.interaction_response())
            .await?;

        info!(
            interaction_id = %interaction.id,
            ?response_type,
            "Interaction response sent"
        );

        self.record.interaction = Some(interaction);
        Ok(())
    }

    /// Toggle the ephemeral flag, then [`send`](Self::send)
    ///
    /// The flag is flipped, not set: calling this twice on the same response
    /// sends the second one as a public message. Use
    /// [`with_ephemeral`](Self::with_ephemeral) to set it explicitly.
    pub async fn send_ephemeral<D>(
        &mut self,
        discord: &D,
        interaction: impl Into<InteractionRef>,
    ) -> Result<(), MessageError>
    where
        D: DiscordService + ?Sized,
    {
        self.record.flags.toggle(MessageFlags::EPHEMERAL);
        self.send(discord, interaction).await
    }

    /// Edit the original response
    ///
    /// Sends the current content, components, embeds, kept attachments and
    /// allowed mentions.
    ///
    /// # Errors
    ///
    /// - [`MessageError::MissingInteraction`] if no interaction is stored
    /// - [`MessageError::Discord`] if the request fails
    pub async fn edit<D>(&self, discord: &D) -> Result<(), MessageError>
    where
        D: DiscordService + ?Sized,
    {
        let interaction = self
            .record
            .interaction
            .as_ref()
            .ok_or(MessageError::MissingInteraction)?;

        debug!(
            interaction_id = %interaction.id,
            "Editing interaction response"
        );

        discord
            .edit_interaction_response(interaction, self.record.edit_interaction_response())
            .await?;
        Ok(())
    }

    /// Delete the original response and forget the interaction
    pub async fn delete<D>(&mut self, discord: &D) -> Result<(), MessageError>
    where
        D: DiscordService + ?Sized,
    {
        let interaction = self
            .record
            .interaction
            .as_ref()
            .ok_or(MessageError::MissingInteraction)?;

        discord.delete_interaction_response(interaction).await?;

        info!(
            interaction_id = %interaction.id,
            "Interaction response deleted"
        );

        self.record.interaction = None;
        Ok(())
    }
}
