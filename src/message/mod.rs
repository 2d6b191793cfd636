//! Message builders for the three delivery contexts
//!
//! - [`ChannelMessage`]: a message posted to a channel
//! - [`DirectMessage`]: a message posted to a user's private channel
//! - [`InteractionResponse`]: the response to a slash command, component or modal
//!
//! All three are built from the same set of [`MessageOption`]s and keep the
//! identifiers needed to edit or delete what they sent.

mod accessors;
mod channel_message;
mod direct_message;
mod interaction_response;
mod option;
mod record;
mod response_type;

pub use channel_message::ChannelMessage;
pub use direct_message::DirectMessage;
pub use interaction_response::InteractionResponse;
pub use option::MessageOption;
pub use response_type::ResponseType;
