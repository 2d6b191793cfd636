use anyhow::Context as _;
use serde::Deserialize;
use std::num::NonZeroU64;

/// Connection settings for [`SerenityDiscordService`](crate::adapters::SerenityDiscordService)
///
/// Loaded from environment variables (`DISCORD_TOKEN`, `APPLICATION_ID`).
#[derive(Deserialize, Clone)]
pub struct Params {
    pub discord_token: String,

    /// Required by Discord to edit or delete interaction responses
    #[serde(default)]
    pub application_id: Option<NonZeroU64>,
}

/// Mask sensitive strings by showing only first and last few characters
pub(crate) fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    if s.len() <= VISIBLE_CHARS * 2 {
        // If string is too short, mask everything except first char
        match s.chars().next() {
            None => return "<empty>".to_string(),
            Some(first) => return format!("{first}***"),
        }
    }

    match (s.get(..VISIBLE_CHARS), s.get(s.len() - VISIBLE_CHARS..)) {
        (Some(head), Some(tail)) => format!("{head}***{tail}"),
        // Not on a char boundary
        _ => "***".to_string(),
    }
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("discord_token", &mask_token(&self.discord_token))
            .field("application_id", &self.application_id)
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        envy::from_env::<Params>().context("Failed to load configuration")
    }

    /// Check if interaction responses can be edited and deleted
    pub fn has_application_id(&self) -> bool {
        self.application_id.is_some()
    }
}
