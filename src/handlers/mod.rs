//! Chat command handlers.
//!
//! This module contains the Handler trait and the command registry that
//! dispatches classified payloads to the handler for each command.
//!
//! Handlers never check handshake order themselves: the registry refuses a
//! command the session stage does not admit before any handler runs.

mod channel;
mod connection;
mod core;
mod messaging;
mod moderation;

pub use self::core::{Context, Handler, Registry};
pub use crate::error::{HandlerError, HandlerResult};
