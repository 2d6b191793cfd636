use serde::{Deserialize, Serialize};

/// Kind of response sent back to an interaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// ACK a ping
    Pong,
    /// Respond with a message
    #[default]
    ChannelMessageWithSource,
    /// ACK now, edit the response later (shows a loading state)
    DeferredChannelMessageWithSource,
    /// ACK a component interaction, edit the original message later
    DeferredUpdateMessage,
    /// Edit the message the component was attached to
    UpdateMessage,
    /// Respond to an autocomplete interaction with choices
    Autocomplete,
    /// Respond with a popup modal
    Modal,
}

impl ResponseType {
    /// Numeric value used by the Discord API
    pub fn code(self) -> u8 {
        match self {
            Self::Pong => 1,
            Self::ChannelMessageWithSource => 4,
            Self::DeferredChannelMessageWithSource => 5,
            Self::DeferredUpdateMessage => 6,
            Self::UpdateMessage => 7,
            Self::Autocomplete => 8,
            Self::Modal => 9,
        }
    }
}
