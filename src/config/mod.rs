//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ServerConfig) and loading
//! - [`listen`]: Network listener configuration (ListenConfig)
//! - [`limits`]: Framing and queue limits (LimitsConfig)
//! - [`policy`]: Session policy switches (PolicyConfig)
//! - [`validation`]: Startup validation of a loaded config

mod defaults;
mod limits;
mod listen;
mod policy;
mod types;
mod validation;

pub use limits::LimitsConfig;
pub use policy::PolicyConfig;
pub use types::Config;
pub use validation::validate;
