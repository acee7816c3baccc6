//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with explicit transitions so any front end (terminal
//! today) can drive it and tests can assert on it without I/O.

pub mod chat;
