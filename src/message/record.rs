use super::option::MessageOption;
use super::response_type::ResponseType;
use crate::adapters::{DiscordService, InteractionRef};
use crate::error::MessageError;
use serde::Serialize;
use serenity::builder::{
    AutocompleteChoice, CreateActionRow, CreateAllowedMentions, CreateAttachment,
    CreateAutocompleteResponse, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, CreateModal, EditInteractionResponse,
    EditMessage,
};
use serenity::model::application::InteractionResponseFlags;
use serenity::model::channel::{Attachment, MessageFlags, MessageReference};
use serenity::model::id::{ChannelId, MessageId, StickerId};
use tracing::{debug, info};

/// Fields shared by every message facade
///
/// Payload fields are copied into the outgoing serenity builders untouched.
/// `channel_id`/`message_id` (channel and direct messages) and `interaction`
/// (interaction responses) correlate later edits and deletes with what was sent.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MessageRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) allowed_mentions: Option<CreateAllowedMentions>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) channel_id: Option<ChannelId>,
    /// Autocomplete responses only
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) choices: Vec<AutocompleteChoice>,
    pub(crate) components: Vec<CreateActionRow>,
    pub(crate) content: String,
    /// Modal responses only
    #[serde(skip_serializing_if = "String::is_empty")]
    pub(crate) custom_id: String,
    pub(crate) embeds: Vec<CreateEmbed>,
    #[serde(skip)]
    pub(crate) files: Vec<CreateAttachment>,
    /// Only EPHEMERAL and SUPPRESS_EMBEDS are meaningful
    #[serde(skip_serializing_if = "MessageFlags::is_empty")]
    pub(crate) flags: MessageFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) interaction: Option<InteractionRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message_id: Option<MessageId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) reference: Option<MessageReference>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) response_type: Option<ResponseType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) sticker_ids: Vec<StickerId>,
    /// Modal responses only
    #[serde(skip_serializing_if = "String::is_empty")]
    pub(crate) title: String,
    pub(crate) tts: bool,
}

impl Default for MessageRecord {
    fn default() -> Self {
        Self {
            allowed_mentions: None,
            attachments: Vec::new(),
            channel_id: None,
            choices: Vec::new(),
            components: Vec::new(),
            content: String::new(),
            custom_id: String::new(),
            embeds: Vec::new(),
            files: Vec::new(),
            flags: MessageFlags::empty(),
            interaction: None,
            message_id: None,
            reference: None,
            response_type: None,
            sticker_ids: Vec::new(),
            title: String::new(),
            tts: false,
        }
    }
}

impl MessageRecord {
    /// Build a record by applying options in order to a blank one
    pub(crate) fn new(options: impl IntoIterator<Item = MessageOption>) -> Self {
        let mut record = Self::default();
        for option in options {
            option.apply(&mut record);
        }
        record
    }

    /// Payload for posting a new channel or direct message
    pub(crate) fn create_message(&self) -> CreateMessage {
        let mut message = CreateMessage::new()
            .embeds(self.embeds.clone())
            .components(self.components.clone())
            .add_files(self.files.clone())
            .sticker_ids(self.sticker_ids.iter().copied())
            .tts(self.tts)
            .flags(self.flags);

        if !self.content.is_empty() {
            message = message.content(self.content.clone());
        }
        if let Some(allowed_mentions) = &self.allowed_mentions {
            message = message.allowed_mentions(allowed_mentions.clone());
        }
        if let Some(reference) = &self.reference {
            message = message.reference_message(reference.clone());
        }

        message
    }

    /// Payload for editing a sent channel or direct message
    ///
    /// Components and embeds replace the whole list on Discord's side, so an
    /// empty list removes them from the message.
    pub(crate) fn edit_message(&self) -> EditMessage {
        EditMessage::new()
            .content(self.content.clone())
            .components(self.components.clone())
            .embeds(self.embeds.clone())
            .suppress_embeds(self.flags.contains(MessageFlags::SUPPRESS_EMBEDS))
    }

    /// Response type to send, falling back to a plain message
    pub(crate) fn response_type(&self) -> ResponseType {
        self.response_type.unwrap_or_default()
    }

    /// Payload for the initial response to an interaction
    pub(crate) fn interaction_response(&self) -> CreateInteractionResponse {
        match self.response_type() {
            ResponseType::Pong => CreateInteractionResponse::Pong,
            ResponseType::ChannelMessageWithSource => {
                CreateInteractionResponse::Message(self.response_message())
            }
            ResponseType::DeferredChannelMessageWithSource => {
                CreateInteractionResponse::Defer(self.response_message())
            }
            ResponseType::DeferredUpdateMessage => CreateInteractionResponse::Acknowledge,
            ResponseType::UpdateMessage => {
                CreateInteractionResponse::UpdateMessage(self.response_message())
            }
            ResponseType::Autocomplete => CreateInteractionResponse::Autocomplete(
                CreateAutocompleteResponse::new().set_choices(self.choices.clone()),
            ),
            ResponseType::Modal => CreateInteractionResponse::Modal(
                CreateModal::new(self.custom_id.clone(), self.title.clone())
                    .components(self.components.clone()),
            ),
        }
    }

    fn response_message(&self) -> CreateInteractionResponseMessage {
        let mut message = CreateInteractionResponseMessage::new()
            .embeds(self.embeds.clone())
            .components(self.components.clone())
            .add_files(self.files.clone())
            .tts(self.tts)
            .flags(self.response_flags());

        if !self.content.is_empty() {
            message = message.content(self.content.clone());
        }
        if let Some(allowed_mentions) = &self.allowed_mentions {
            message = message.allowed_mentions(allowed_mentions.clone());
        }

        message
    }

    fn response_flags(&self) -> InteractionResponseFlags {
        let mut flags = InteractionResponseFlags::empty();
        if self.flags.contains(MessageFlags::EPHEMERAL) {
            flags |= InteractionResponseFlags::EPHEMERAL;
        }
        if self.flags.contains(MessageFlags::SUPPRESS_EMBEDS) {
            flags |= InteractionResponseFlags::SUPPRESS_EMBEDS;
        }
        flags
    }

    /// Payload for editing the original response of an interaction
    pub(crate) fn edit_interaction_response(&self) -> EditInteractionResponse {
        let mut response = EditInteractionResponse::new()
            .content(self.content.clone())
            .components(self.components.clone())
            .embeds(self.embeds.clone());

        for attachment in &self.attachments {
            response = response.keep_existing_attachment(attachment.id);
        }
        if let Some(allowed_mentions) = &self.allowed_mentions {
            response = response.allowed_mentions(allowed_mentions.clone());
        }

        response
    }

    /// Identifiers of a sent channel or direct message
    ///
    /// The channel is checked first, matching the order callers see errors in.
    pub(crate) fn sent_ids(&self) -> Result<(ChannelId, MessageId), MessageError> {
        let channel_id = self.channel_id.ok_or(MessageError::MissingChannelId)?;
        let message_id = self.message_id.ok_or(MessageError::MissingMessageId)?;
        Ok((channel_id, message_id))
    }

    /// Post the payload to a channel and remember where it went
    pub(crate) async fn send_to_channel<D>(
        &mut self,
        discord: &D,
        channel_id: ChannelId,
    ) -> Result<MessageId, MessageError>
    where
        D: DiscordService + ?Sized,
    {
        debug!(
            channel_id = %channel_id,
            content_len = self.content.chars().count(),
            embeds = self.embeds.len(),
            files = self.files.len(),
            "Sending message"
        );

        let message_id = discord
            .send_message(channel_id, self.create_message())
            .await?;

        self.channel_id = Some(channel_id);
        self.message_id = Some(message_id);

        info!(
            channel_id = %channel_id,
            message_id = %message_id,
            "Message sent"
        );

        Ok(message_id)
    }

    pub(crate) async fn edit_sent<D>(&self, discord: &D) -> Result<(), MessageError>
    where
        D: DiscordService + ?Sized,
    {
        let (channel_id, message_id) = self.sent_ids()?;

        debug!(
            channel_id = %channel_id,
            message_id = %message_id,
            "Editing message"
        );

        discord
            .edit_message(channel_id, message_id, self.edit_message())
            .await?;
        Ok(())
    }

    /// Delete the sent message and forget its ID
    pub(crate) async fn delete_sent<D>(&mut self, discord: &D) -> Result<(), MessageError>
    where
        D: DiscordService + ?Sized,
    {
        let (channel_id, message_id) = self.sent_ids()?;

        discord.delete_message(channel_id, message_id).await?;
        self.message_id = None;

        info!(
            channel_id = %channel_id,
            message_id = %message_id,
            "Message deleted"
        );

        Ok(())
    }
}
