//! State management module.
//!
//! Contains the Hub (shared chat state) and the entities it owns.

mod channel;
mod client;
mod hub;
mod machine;
mod uid;

pub use client::Outbound;
pub use hub::{Hub, JoinOutcome, ModerationAction};
pub use machine::{Guidance, SessionStage};
pub use uid::ClientId;

#[cfg(test)]
pub(crate) use hub::test_support;
