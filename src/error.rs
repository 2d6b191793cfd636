use thiserror::Error;

/// Errors returned by message lifecycle operations
///
/// The `Missing*` variants are local precondition failures raised before any
/// request reaches Discord. Transport failures are carried verbatim in
/// [`MessageError::Discord`] so callers can still inspect the serenity error.
#[derive(Debug, Error)]
pub enum MessageError {
    /// The message has no channel to edit or delete in
    #[error("missing channel ID")]
    MissingChannelId,

    /// The message was never sent, or was already deleted
    #[error("missing message ID")]
    MissingMessageId,

    /// The response has no interaction to edit or delete
    #[error("missing interaction")]
    MissingInteraction,

    /// Error returned by Discord or the HTTP client
    #[error(transparent)]
    Discord(#[from] serenity::Error),
}
