//! Submission driver: one query in, one bot message out.
//!
//! DESIGN
//! ======
//! `ChatSession::submit` is the only path that talks to the transport. The
//! pending request is wrapped in an `InFlight` guard whose `Drop` closes it
//! as failed, so `loading` clears on every exit path, including a caller
//! dropping the future mid-request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::AskTransport;
use crate::net::types::AskReply;
use crate::state::chat::{AskOutcome, ChatMessage, ChatState, SubmitError};

pub struct ChatSession<T> {
    state: ChatState,
    transport: T,
}

/// Marks a query as pending until `complete` runs or the guard drops.
struct InFlight<'a> {
    state: &'a mut ChatState,
    done: bool,
}

impl InFlight<'_> {
    fn complete(mut self, outcome: AskOutcome) {
        self.state.finish(outcome);
        self.done = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.done {
            tracing::warn!("query abandoned before a reply arrived");
            self.state.finish(AskOutcome::Failed);
        }
    }
}

impl<T: AskTransport> ChatSession<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { state: ChatState::new(), transport }
    }

    #[must_use]
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Update the unsent draft (drives the cosmetic hint).
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.set_draft(text);
    }

    /// Submit `draft` and wait for the reply.
    ///
    /// Returns the messages this call appended: the user message followed
    /// by exactly one bot message.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] if the draft is blank or a query is already
    /// pending; the transcript is untouched in that case. Transport failures
    /// are not errors here: they become the bot's error message.
    pub async fn submit(&mut self, draft: &str) -> Result<&[ChatMessage], SubmitError> {
        let start = self.state.messages().len();
        self.state.set_draft(draft);
        let query = self.state.begin_submit()?;

        let guard = InFlight { state: &mut self.state, done: false };
        let outcome = match self.transport.ask(&query).await {
            Ok(body) => AskOutcome::Reply(AskReply::from_body(&body)),
            Err(e) => {
                tracing::error!(error = %e, %query, "relay request failed");
                AskOutcome::Failed
            }
        };
        guard.complete(outcome);

        Ok(&self.state.messages()[start..])
    }
}
