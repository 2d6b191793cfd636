//! Send, edit and delete a channel message and a direct message
//!
//! Required environment: `DISCORD_TOKEN`, `DEMO_CHANNEL_ID`.
//! Optional: `DEMO_USER_ID` to also send a direct message.

use anyhow::Context as _;
use msgkit::{ChannelMessage, DirectMessage, MessageOption, Params, SerenityDiscordService};
use serde::Deserialize;
use serenity::builder::CreateEmbed;
use serenity::model::id::{ChannelId, UserId};
use std::num::NonZeroU64;
use tracing::info;

#[derive(Debug, Deserialize)]
struct DemoParams {
    demo_channel_id: NonZeroU64,
    #[serde(default)]
    demo_user_id: Option<NonZeroU64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Default: msgkit=info, serenity=warn
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "msgkit=info,serenity=warn".into()),
        )
        .init();

    let params = Params::new()?;
    info!(?params, "Parameters loaded");

    let demo = envy::from_env::<DemoParams>().context("Failed to load demo configuration")?;
    let discord = SerenityDiscordService::from_params(&params);

    let mut message = ChannelMessage::new([MessageOption::Content("Hello from msgkit".into())]);
    message
        .send(&discord, ChannelId::new(demo.demo_channel_id.get()))
        .await
        .context("Sending channel message")?;

    let mut message = message
        .with_content("Hello again")
        .with_embeds(vec![CreateEmbed::new().title("Edited")]);
    message.edit(&discord).await.context("Editing channel message")?;
    message
        .delete(&discord)
        .await
        .context("Deleting channel message")?;

    if let Some(user_id) = demo.demo_user_id {
        let mut dm = DirectMessage::new([MessageOption::Content("Hello in private".into())]);
        let message_id = dm
            .send(&discord, UserId::new(user_id.get()))
            .await
            .context("Sending direct message")?;
        info!(%message_id, "Direct message left in place");
    }

    Ok(())
}
