//! Messaging handlers.

mod chat;

pub use chat::ChatHandler;
