#![allow(dead_code)]

use msgkit::adapters::{DiscordService, InteractionRef};
use serde::Serialize;
use serde_json::Value;
use serenity::async_trait;
use serenity::builder::{
    CreateInteractionResponse, CreateMessage, EditInteractionResponse, EditMessage,
};
use serenity::model::id::{ChannelId, InteractionId, MessageId, UserId};
use std::sync::{Arc, Mutex};

/// Error message returned by a failing operation
pub const FAILURE: &str = "mock discord failure";

/// Operations the mock can be told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SendMessage,
    EditMessage,
    DeleteMessage,
    CreatePrivateChannel,
    CreateInteractionResponse,
    EditInteractionResponse,
    DeleteInteractionResponse,
}

/// A request received by the mock, with its payload serialized to JSON
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    SendMessage {
        channel_id: ChannelId,
        payload: Value,
    },
    EditMessage {
        channel_id: ChannelId,
        message_id: MessageId,
        payload: Value,
    },
    DeleteMessage {
        channel_id: ChannelId,
        message_id: MessageId,
    },
    CreatePrivateChannel {
        user_id: UserId,
    },
    CreateInteractionResponse {
        interaction_id: InteractionId,
        payload: Value,
    },
    EditInteractionResponse {
        interaction_id: InteractionId,
        payload: Value,
    },
    DeleteInteractionResponse {
        interaction_id: InteractionId,
    },
}

pub struct MockDiscordService {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    message_id: MessageId,
    private_channel_id: ChannelId,
    failing: Option<Operation>,
}

impl Default for MockDiscordService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDiscordService {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            message_id: MessageId::new(42),
            private_channel_id: ChannelId::new(777),
            failing: None,
        }
    }

    /// ID returned for every sent message
    pub fn with_message_id(mut self, message_id: u64) -> Self {
        self.message_id = MessageId::new(message_id);
        self
    }

    /// Channel returned when opening a private channel
    pub fn with_private_channel_id(mut self, channel_id: u64) -> Self {
        self.private_channel_id = ChannelId::new(channel_id);
        self
    }

    /// Make one operation fail with `serenity::Error::Other(FAILURE)`
    pub fn failing(mut self, operation: Operation) -> Self {
        self.failing = Some(operation);
        self
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear()
    }

    fn record(&self, operation: Operation, call: RecordedCall) -> Result<(), serenity::Error> {
        self.calls.lock().unwrap().push(call);
        if self.failing == Some(operation) {
            return Err(serenity::Error::Other(FAILURE));
        }
        Ok(())
    }
}

fn to_json<T: Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).expect("payload should serialize")
}

#[async_trait]
impl DiscordService for MockDiscordService {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, serenity::Error> {
        self.record(
            Operation::SendMessage,
            RecordedCall::SendMessage {
                channel_id,
                payload: to_json(&message),
            },
        )?;
        Ok(self.message_id)
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: EditMessage,
    ) -> Result<(), serenity::Error> {
        self.record(
            Operation::EditMessage,
            RecordedCall::EditMessage {
                channel_id,
                message_id,
                payload: to_json(&message),
            },
        )
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), serenity::Error> {
        self.record(
            Operation::DeleteMessage,
            RecordedCall::DeleteMessage {
                channel_id,
                message_id,
            },
        )
    }

    async fn create_private_channel(&self, user_id: UserId) -> Result<ChannelId, serenity::Error> {
        self.record(
            Operation::CreatePrivateChannel,
            RecordedCall::CreatePrivateChannel { user_id },
        )?;
        Ok(self.private_channel_id)
    }

    async fn create_interaction_response(
        &self,
        interaction: &InteractionRef,
        response: CreateInteractionResponse,
    ) -> Result<(), serenity::Error> {
        self.record(
            Operation::CreateInteractionResponse,
            RecordedCall::CreateInteractionResponse {
                interaction_id: interaction.id,
                payload: to_json(&response),
            },
        )
    }

    async fn edit_interaction_response(
        &self,
        interaction: &InteractionRef,
        response: EditInteractionResponse,
    ) -> Result<(), serenity::Error> {
        self.record(
            Operation::EditInteractionResponse,
            RecordedCall::EditInteractionResponse {
                interaction_id: interaction.id,
                payload: to_json(&response),
            },
        )
    }

    async fn delete_interaction_response(
        &self,
        interaction: &InteractionRef,
    ) -> Result<(), serenity::Error> {
        self.record(
            Operation::DeleteInteractionResponse,
            RecordedCall::DeleteInteractionResponse {
                interaction_id: interaction.id,
            },
        )
    }
}
