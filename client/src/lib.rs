//! Zeal AI chat client core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything a front end needs to hold a restaurant conversation with the
//! relay: the transcript state machine (`state`), the relay wire types and
//! HTTP transport (`net`), text rendering (`render`), the cosmetic draft hint
//! (`hint`), and the `session` driver that ties a submission to exactly one
//! bot reply. The `zeal` CLI is one such front end.

pub mod hint;
pub mod net;
pub mod render;
pub mod session;
pub mod state;

pub use net::api::{ApiError, AskTransport, RelayClient};
pub use net::types::{AskReply, EmptyReply, RestaurantCard};
pub use session::ChatSession;
pub use state::chat::{Author, ChatMessage, ChatState, MessageBody, Phase, SubmitError};
