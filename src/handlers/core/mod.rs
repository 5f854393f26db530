//! Core handler infrastructure.
//!
//! This module contains the handler trait, the per-command context and the
//! registry that gates commands by session stage before dispatching them.

pub mod context;
pub mod registry;

pub use context::{Context, Handler};
pub use registry::Registry;
