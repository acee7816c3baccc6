//! Networking modules for talking to the relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls and `types` decides, once, what a relay
//! response body means for the transcript.

pub mod api;
pub mod types;
