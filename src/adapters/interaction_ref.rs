use crate::params::mask_token;
use serde::{Deserialize, Serialize};
use serenity::model::application::{
    CommandInteraction, ComponentInteraction, Interaction, ModalInteraction,
};
use serenity::model::id::InteractionId;

/// Handle to a pending interaction that a response is sent to
///
/// Holds the interaction ID and its continuation token. The token stays valid
/// for 15 minutes after the interaction was created; edits and deletes of the
/// original response need it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRef {
    pub id: InteractionId,
    pub token: String,
}

impl InteractionRef {
    pub fn new(id: InteractionId, token: impl Into<String>) -> Self {
        Self {
            id,
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for InteractionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionRef")
            .field("id", &self.id)
            .field("token", &mask_token(&self.token))
            .finish()
    }
}

impl From<&Interaction> for InteractionRef {
    fn from(interaction: &Interaction) -> Self {
        Self::new(interaction.id(), interaction.token())
    }
}

impl From<&CommandInteraction> for InteractionRef {
    fn from(interaction: &CommandInteraction) -> Self {
        Self::new(interaction.id, interaction.token.as_str())
    }
}

impl From<&ComponentInteraction> for InteractionRef {
    fn from(interaction: &ComponentInteraction) -> Self {
        Self::new(interaction.id, interaction.token.as_str())
    }
}

impl From<&ModalInteraction> for InteractionRef {
    fn from(interaction: &ModalInteraction) -> Self {
        Self::new(interaction.id, interaction.token.as_str())
    }
}
