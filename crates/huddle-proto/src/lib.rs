//! # huddle-proto
//!
//! Wire-level building blocks for the huddle chat protocol.
//!
//! ## Features
//!
//! - Command grammar: classifies a text payload into a [`Command`] or chat content
//! - Fixed reply texts shared by server and clients ([`response`])
//! - Length-prefixed frame codec for tokio ([`FrameCodec`])
//! - Framed TCP transport with split reader/writer halves ([`transport`])
//!
//! ## Quick Start
//!
//! ```rust
//! use huddle_proto::Command;
//!
//! assert_eq!(Command::parse("/join lobby"), Command::Join("lobby".into()));
//! assert_eq!(Command::parse("hello there"), Command::Chat("hello there".into()));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod response;

#[cfg(feature = "tokio")]
pub mod codec;
#[cfg(feature = "tokio")]
pub mod transport;

pub use self::command::Command;
pub use self::error::ProtocolError;

#[cfg(feature = "tokio")]
pub use self::codec::FrameCodec;

/// Size in bytes of the length prefix that precedes every frame.
pub const LENGTH_PREFIX_LEN: usize = 4;

/// Default upper bound on a single frame payload.
pub const DEFAULT_MAX_FRAME_LEN: usize = 64 * 1024;
