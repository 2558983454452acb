//! Chat Assistant
//!
//! Append-only transcript plus the send state machine of the chat widget.
//! One request may be outstanding at a time; every send ends with exactly
//! two new entries (the user's echo, then a reply or an apology).

mod controller;
mod message;

pub use controller::{
    is_submit_key, ChatController, ChatOutcome, Delivery, OutgoingMessage, SendHook, APOLOGY,
};
pub use message::{Author, ChatMessage, MessageId};
