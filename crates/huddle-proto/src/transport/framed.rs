//! Framed transport halves.

use futures_util::{SinkExt, StreamExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio_util::codec::{Framed, FramedRead, FramedWrite};
use tracing::warn;

use crate::codec::FrameCodec;
use crate::error::ProtocolError;

use super::error::TransportReadError;

/// A whole framed TCP connection.
pub struct Transport {
    framed: Framed<TcpStream, FrameCodec>,
}

impl Transport {
    /// Wrap a connected stream. Payloads above `max_frame_len` are rejected.
    pub fn tcp(stream: TcpStream, max_frame_len: usize) -> Self {
        if let Err(e) = Self::enable_keepalive(&stream) {
            warn!("failed to enable TCP keepalive: {}", e);
        }

        Self {
            framed: Framed::new(stream, FrameCodec::with_max_len(max_frame_len)),
        }
    }

    fn enable_keepalive(stream: &TcpStream) -> std::io::Result<()> {
        use socket2::{SockRef, TcpKeepalive};
        use std::time::Duration;

        let sock = SockRef::from(stream);
        let keepalive = TcpKeepalive::new()
            .with_time(Duration::from_secs(120))
            .with_interval(Duration::from_secs(30));

        sock.set_tcp_keepalive(&keepalive)
    }

    /// Read the next payload.
    ///
    /// Returns `Ok(None)` when the peer closed the connection cleanly.
    pub async fn read_message(&mut self) -> Result<Option<String>, TransportReadError> {
        match self.framed.next().await {
            Some(Ok(payload)) => Ok(Some(payload)),
            Some(Err(e)) => Err(TransportReadError::from(e)),
            None => Ok(None),
        }
    }

    /// Write one payload and flush it.
    pub async fn write_message(&mut self, payload: impl Into<String>) -> Result<(), ProtocolError> {
        self.framed.send(payload.into()).await
    }

    /// Split into independently owned reader and writer halves.
    pub fn into_split(self) -> (TransportReader, TransportWriter) {
        let parts = self.framed.into_parts();
        let codec = parts.codec;
        let (read_half, write_half) = parts.io.into_split();

        let mut reader = FramedRead::new(read_half, codec);
        *reader.read_buffer_mut() = parts.read_buf;

        let mut writer = FramedWrite::new(write_half, codec);
        *writer.write_buffer_mut() = parts.write_buf;

        (
            TransportReader { framed: reader },
            TransportWriter { framed: writer },
        )
    }
}

/// Read half of a split [`Transport`].
pub struct TransportReader {
    framed: FramedRead<OwnedReadHalf, FrameCodec>,
}

impl TransportReader {
    /// Read the next payload; `Ok(None)` on clean close.
    ///
    /// Cancel-safe: a partially received frame stays buffered.
    pub async fn read_message(&mut self) -> Result<Option<String>, TransportReadError> {
        match self.framed.next().await {
            Some(Ok(payload)) => Ok(Some(payload)),
            Some(Err(e)) => Err(TransportReadError::from(e)),
            None => Ok(None),
        }
    }
}

/// Write half of a split [`Transport`].
pub struct TransportWriter {
    framed: FramedWrite<OwnedWriteHalf, FrameCodec>,
}

impl TransportWriter {
    /// Write one payload and flush it.
    pub async fn write_message(&mut self, payload: String) -> Result<(), ProtocolError> {
        self.framed.send(payload).await
    }

    /// Flush pending bytes and shut down the write direction.
    pub async fn close(&mut self) -> Result<(), ProtocolError> {
        self.framed.close().await
    }
}
