/// Generate the payload setters and getters every facade shares
///
/// The facade must have a `record: MessageRecord` field.
macro_rules! payload_accessors {
    ($facade:ty) => {
        impl $facade {
            /// Set the text content
            pub fn with_content(mut self, content: impl Into<String>) -> Self {
                self.record.content = content.into();
                self
            }

            /// Set the embeds, replacing any previously set
            pub fn with_embeds(mut self, embeds: Vec<serenity::builder::CreateEmbed>) -> Self {
                self.record.embeds = embeds;
                self
            }

            /// Set the component rows, replacing any previously set
            pub fn with_components(
                mut self,
                components: Vec<serenity::builder::CreateActionRow>,
            ) -> Self {
                self.record.components = components;
                self
            }

            pub fn with_allowed_mentions(
                mut self,
                allowed_mentions: serenity::builder::CreateAllowedMentions,
            ) -> Self {
                self.record.allowed_mentions = Some(allowed_mentions);
                self
            }

            /// Set the files uploaded on send
            pub fn with_files(mut self, files: Vec<serenity::builder::CreateAttachment>) -> Self {
                self.record.files = files;
                self
            }

            pub fn with_flags(mut self, flags: serenity::model::channel::MessageFlags) -> Self {
                self.record.flags = flags;
                self
            }

            pub fn with_tts(mut self, tts: bool) -> Self {
                self.record.tts = tts;
                self
            }

            pub fn content(&self) -> &str {
                &self.record.content
            }

            pub fn embeds(&self) -> &[serenity::builder::CreateEmbed] {
                &self.record.embeds
            }

            pub fn components(&self) -> &[serenity::builder::CreateActionRow] {
                &self.record.components
            }

            pub fn flags(&self) -> serenity::model::channel::MessageFlags {
                self.record.flags
            }

            pub fn tts(&self) -> bool {
                self.record.tts
            }
        }
    };
}

pub(crate) use payload_accessors;
