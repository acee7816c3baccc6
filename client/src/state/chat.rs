//! Chat transcript state machine.
//!
//! DESIGN
//! ======
//! `ChatState` moves `Idle -> AwaitingResponse` on the first submission,
//! then alternates `AwaitingResponse <-> Ready`. The transcript is
//! append-only: `begin_submit` pushes the user message and `finish` pushes
//! exactly one bot message, so every accepted submission yields one reply.
//! Submissions while a reply is pending are rejected rather than queued.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{AskReply, EmptyReply, RestaurantCard};

pub const NO_RESULTS_TEXT: &str = "No restaurants found! 🍽️";
pub const NO_ANSWER_TEXT: &str = "🤔 No answer was produced for that query.";
pub const ERROR_TEXT: &str = "⚠️ Error fetching results";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

impl Author {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MessageBody {
    Text(String),
    Cards(Vec<RestaurantCard>),
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub author: Author,
    pub body: MessageBody,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { author: Author::User, body: MessageBody::Text(text.into()) }
    }

    #[must_use]
    pub fn bot(body: MessageBody) -> Self {
        Self { author: Author::Bot, body }
    }
}

/// How a pending query ended.
#[derive(Clone, Debug, PartialEq)]
pub enum AskOutcome {
    Reply(AskReply),
    Failed,
}

impl AskOutcome {
    /// The one bot message this outcome appends.
    #[must_use]
    pub fn into_body(self) -> MessageBody {
        match self {
            Self::Reply(AskReply::CardList(cards)) => MessageBody::Cards(cards),
            Self::Reply(AskReply::TextAnswer(text)) => MessageBody::Text(text),
            Self::Reply(AskReply::Empty(EmptyReply::NoResults)) => MessageBody::Text(NO_RESULTS_TEXT.to_owned()),
            Self::Reply(AskReply::Empty(EmptyReply::NoAnswer)) => MessageBody::Text(NO_ANSWER_TEXT.to_owned()),
            Self::Failed => MessageBody::Text(ERROR_TEXT.to_owned()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted yet; the transcript is hidden.
    #[default]
    Idle,
    /// Transcript visible, no query in flight.
    Ready,
    /// Transcript visible, one query in flight.
    AwaitingResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("query is empty")]
    EmptyQuery,
    #[error("a query is already in flight")]
    RequestInFlight,
}

/// Conversation state for one session.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    /// Text typed but not yet submitted.
    pub draft: String,
    phase: Phase,
}

impl ChatState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.phase == Phase::AwaitingResponse
    }

    /// Whether the transcript area is shown (any query ever submitted).
    #[must_use]
    pub fn show_transcript(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Accept the current draft as a query.
    ///
    /// On success the user message is appended, the draft is cleared, and
    /// the state is awaiting a response. The transcript keeps the draft as
    /// typed; the returned query is trimmed.
    ///
    /// # Errors
    ///
    /// [`SubmitError::EmptyQuery`] for a blank draft and
    /// [`SubmitError::RequestInFlight`] while a reply is pending. Neither
    /// changes any state.
    pub fn begin_submit(&mut self) -> Result<String, SubmitError> {
        if self.loading() {
            return Err(SubmitError::RequestInFlight);
        }
        let query = self.draft.trim().to_owned();
        if query.is_empty() {
            return Err(SubmitError::EmptyQuery);
        }

        self.messages.push(ChatMessage::user(std::mem::take(&mut self.draft)));
        self.phase = Phase::AwaitingResponse;
        Ok(query)
    }

    /// Close the pending query with `outcome`, appending one bot message.
    ///
    /// Returns `false` (and changes nothing) if no query was pending.
    pub fn finish(&mut self, outcome: AskOutcome) -> bool {
        if !self.loading() {
            tracing::debug!("finish called with no query in flight; ignored");
            return false;
        }
        self.messages.push(ChatMessage::bot(outcome.into_body()));
        self.phase = Phase::Ready;
        true
    }
}
