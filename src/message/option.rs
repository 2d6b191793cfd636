use super::record::MessageRecord;
use super::response_type::ResponseType;
use crate::adapters::InteractionRef;
use serenity::builder::{
    AutocompleteChoice, CreateActionRow, CreateAllowedMentions, CreateAttachment, CreateEmbed,
};
use serenity::model::channel::{Attachment, MessageFlags, MessageReference};
use serenity::model::id::{ChannelId, MessageId, StickerId};

/// A single field assignment applied when constructing a message
///
/// Options are applied in order, so when two options target the same field
/// the later one wins. Nothing is validated at construction time.
///
/// ```
/// use msgkit::{ChannelMessage, MessageOption};
///
/// let message = ChannelMessage::new([
///     MessageOption::Content("hello".to_string()),
///     MessageOption::Tts(true),
/// ]);
/// assert_eq!(message.content(), "hello");
/// ```
#[derive(Debug, Clone)]
pub enum MessageOption {
    AllowedMentions(CreateAllowedMentions),
    /// Existing attachments to keep when editing an interaction response
    Attachments(Vec<Attachment>),
    ChannelId(ChannelId),
    /// Autocomplete responses only
    Choices(Vec<AutocompleteChoice>),
    Components(Vec<CreateActionRow>),
    Content(String),
    /// Modal responses only
    CustomId(String),
    Embeds(Vec<CreateEmbed>),
    /// New files to upload
    Files(Vec<CreateAttachment>),
    Flags(MessageFlags),
    Interaction(InteractionRef),
    MessageId(MessageId),
    /// Message to reply to
    Reference(MessageReference),
    ResponseType(ResponseType),
    StickerIds(Vec<StickerId>),
    /// Modal responses only
    Title(String),
    Tts(bool),
}

impl MessageOption {
    pub(crate) fn apply(self, record: &mut MessageRecord) {
        match self {
            Self::AllowedMentions(allowed_mentions) => {
                record.allowed_mentions = Some(allowed_mentions)
            }
            Self::Attachments(attachments) => record.attachments = attachments,
            Self::ChannelId(channel_id) => record.channel_id = Some(channel_id),
            Self::Choices(choices) => record.choices = choices,
            Self::Components(components) => record.components = components,
            Self::Content(content) => record.content = content,
            Self::CustomId(custom_id) => record.custom_id = custom_id,
            Self::Embeds(embeds) => record.embeds = embeds,
            Self::Files(files) => record.files = files,
            Self::Flags(flags) => record.flags = flags,
            Self::Interaction(interaction) => record.interaction = Some(interaction),
            Self::MessageId(message_id) => record.message_id = Some(message_id),
            Self::Reference(reference) => record.reference = Some(reference),
            Self::ResponseType(response_type) => record.response_type = Some(response_type),
            Self::StickerIds(sticker_ids) => record.sticker_ids = sticker_ids,
            Self::Title(title) => record.title = title,
            Self::Tts(tts) => record.tts = tts,
        }
    }
}
