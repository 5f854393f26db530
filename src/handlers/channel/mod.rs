//! Channel command handlers.
//!
//! Handles /join.

mod join;

pub use join::JoinHandler;
