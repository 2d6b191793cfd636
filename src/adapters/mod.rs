// Trait definitions
pub mod discord_service;

// Type definitions
pub mod interaction_ref;

// Implementations
pub mod serenity_discord_service;

// Re-exports for convenience
pub use discord_service::DiscordService;
pub use interaction_ref::InteractionRef;
pub use serenity_discord_service::SerenityDiscordService;
