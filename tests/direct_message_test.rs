// Lifecycle tests for DirectMessage
// These tests verify private channel resolution and identifier bookkeeping

mod adapters;

use adapters::mock_discord::FAILURE;
use adapters::{MockDiscordService, Operation, RecordedCall};
use msgkit::{DirectMessage, MessageError, MessageOption};
use serenity::model::id::{ChannelId, MessageId, UserId};

#[tokio::test]
async fn test_send_resolves_private_channel_first() {
    let discord = MockDiscordService::new()
        .with_private_channel_id(777)
        .with_message_id(42);
    let mut dm = DirectMessage::new([MessageOption::Content("psst".to_string())]);

    let message_id = dm.send(&discord, UserId::new(5)).await.unwrap();

    assert_eq!(message_id, MessageId::new(42));
    assert_eq!(dm.channel_id(), Some(ChannelId::new(777)));
    assert_eq!(dm.message_id(), Some(MessageId::new(42)));

    let calls = discord.get_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        RecordedCall::CreatePrivateChannel {
            user_id: UserId::new(5)
        }
    );
    match &calls[1] {
        RecordedCall::SendMessage {
            channel_id,
            payload,
        } => {
            assert_eq!(*channel_id, ChannelId::new(777));
            assert_eq!(payload["content"], "psst");
        }
        other => panic!("unexpected call: {other:?}"),
    }
}

#[tokio::test]
async fn test_send_returns_resolution_error_verbatim() {
    let discord = MockDiscordService::new().failing(Operation::CreatePrivateChannel);
    let mut dm = DirectMessage::new([MessageOption::Content("psst".to_string())]);

    let result = dm.send(&discord, UserId::new(5)).await;

    assert!(matches!(
        result,
        Err(MessageError::Discord(serenity::Error::Other(FAILURE)))
    ));
    assert_eq!(dm.message_id(), None);
    assert_eq!(dm.channel_id(), None);

    // Nothing is posted when the channel cannot be opened
    let calls = discord.get_calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], RecordedCall::CreatePrivateChannel { .. }));
}

#[tokio::test]
async fn test_send_failure_after_resolution_stores_nothing() {
    let discord = MockDiscordService::new().failing(Operation::SendMessage);
    let mut dm = DirectMessage::default();

    let result = dm.send(&discord, UserId::new(5)).await;

    assert!(matches!(result, Err(MessageError::Discord(_))));
    assert_eq!(dm.channel_id(), None);
    assert_eq!(dm.message_id(), None);
}

#[tokio::test]
async fn test_edit_and_delete_require_sent_message() {
    let discord = MockDiscordService::new();
    let mut dm = DirectMessage::default();

    assert!(matches!(
        dm.edit(&discord).await,
        Err(MessageError::MissingChannelId)
    ));
    assert!(matches!(
        dm.delete(&discord).await,
        Err(MessageError::MissingChannelId)
    ));
    assert!(discord.get_calls().is_empty());
}

#[tokio::test]
async fn test_edit_uses_resolved_channel() {
    let discord = MockDiscordService::new().with_private_channel_id(888);
    let mut dm = DirectMessage::new([MessageOption::Content("draft".to_string())]);
    dm.send(&discord, UserId::new(5)).await.unwrap();
    discord.clear();

    let dm = dm.with_content("final");
    dm.edit(&discord).await.unwrap();

    match &discord.get_calls()[..] {
        [RecordedCall::EditMessage {
            channel_id,
            message_id,
            payload,
        }] => {
            assert_eq!(*channel_id, ChannelId::new(888));
            assert_eq!(*message_id, MessageId::new(42));
            assert_eq!(payload["content"], "final");
        }
        other => panic!("unexpected calls: {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_clears_message_id() {
    let discord = MockDiscordService::new();
    let mut dm = DirectMessage::default();
    dm.send(&discord, UserId::new(5)).await.unwrap();

    dm.delete(&discord).await.unwrap();

    assert_eq!(dm.message_id(), None);
    assert!(matches!(
        dm.edit(&discord).await,
        Err(MessageError::MissingMessageId)
    ));
    assert!(matches!(
        dm.delete(&discord).await,
        Err(MessageError::MissingMessageId)
    ));
}

#[tokio::test]
async fn test_rehydrated_message_can_be_deleted() {
    let discord = MockDiscordService::new();
    let mut dm = DirectMessage::default()
        .with_channel_id(ChannelId::new(321))
        .with_message_id(MessageId::new(654));

    dm.delete(&discord).await.unwrap();

    assert_eq!(
        discord.get_calls(),
        vec![RecordedCall::DeleteMessage {
            channel_id: ChannelId::new(321),
            message_id: MessageId::new(654),
        }]
    );
}
