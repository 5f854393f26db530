//! Framed transport over TCP.
//!
//! [`Transport`] owns a whole connection and is convenient for sequential
//! request/response use (test clients, tools). Servers that read and write
//! concurrently split it with [`Transport::into_split`] into a
//! [`TransportReader`] and a [`TransportWriter`] that can live in separate
//! tasks. Bytes already buffered by the framed codec are carried over.
//!
//! ```ignore
//! use huddle_proto::transport::Transport;
//!
//! let transport = Transport::tcp(stream, 64 * 1024);
//! let (mut reader, mut writer) = transport.into_split();
//! writer.write_message("pong".to_string()).await?;
//! while let Some(payload) = reader.read_message().await? {
//!     // ...
//! }
//! ```

mod error;
mod framed;

pub use error::TransportReadError;
pub use framed::{Transport, TransportReader, TransportWriter};
