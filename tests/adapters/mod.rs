// Mock implementations for adapter layer testing

pub mod mock_discord;

pub use mock_discord::{MockDiscordService, Operation, RecordedCall};
