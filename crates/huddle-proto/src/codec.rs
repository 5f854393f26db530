//! Length-prefixed frame codec for tokio.
//!
//! Every frame is a 4-byte little-endian payload length followed by exactly
//! that many payload bytes. Payloads are decoded as UTF-8, replacing invalid
//! sequences rather than rejecting the frame.

use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::error::{self, ProtocolError};
use crate::{DEFAULT_MAX_FRAME_LEN, LENGTH_PREFIX_LEN};

/// Tokio codec for huddle frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameCodec {
    max_frame_len: usize,
}

impl FrameCodec {
    /// Create a codec with the default payload limit.
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_FRAME_LEN)
    }

    /// Create a codec that rejects payloads above `max_frame_len` bytes.
    pub fn with_max_len(max_frame_len: usize) -> Self {
        Self { max_frame_len }
    }

    /// Maximum payload length accepted by the decoder.
    pub fn max_frame_len(&self) -> usize {
        self.max_frame_len
    }
}

impl Default for FrameCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for FrameCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        if src.len() < LENGTH_PREFIX_LEN {
            return Ok(None);
        }

        let mut prefix = [0u8; LENGTH_PREFIX_LEN];
        prefix.copy_from_slice(&src[..LENGTH_PREFIX_LEN]);
        let len = u32::from_le_bytes(prefix) as usize;

        if len > self.max_frame_len {
            return Err(ProtocolError::FrameTooLong {
                actual: len,
                limit: self.max_frame_len,
            });
        }

        let frame_len = LENGTH_PREFIX_LEN + len;
        if src.len() < frame_len {
            src.reserve(frame_len - src.len());
            return Ok(None);
        }

        src.advance(LENGTH_PREFIX_LEN);
        let payload = src.split_to(len);
        Ok(Some(String::from_utf8_lossy(&payload).into_owned()))
    }
}

impl Encoder<String> for FrameCodec {
    type Error = ProtocolError;

    fn encode(&mut self, payload: String, dst: &mut BytesMut) -> error::Result<()> {
        let len = u32::try_from(payload.len())
            .map_err(|_| ProtocolError::PayloadTooLarge(payload.len()))?;

        dst.reserve(LENGTH_PREFIX_LEN + payload.len());
        dst.put_u32_le(len);
        dst.extend_from_slice(payload.as_bytes());
        Ok(())
    }
}
