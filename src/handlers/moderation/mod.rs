//! Owner-only channel moderation.
//!
//! Authority and target resolution live in the hub, which checks both under
//! one lock. Handlers here only turn the outcome into replies and notices.

mod kick;
mod mute;
mod whois;

pub use kick::KickHandler;
pub use mute::MuteHandler;
pub use whois::WhoisHandler;
