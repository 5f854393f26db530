//! Test chat client.
//!
//! Speaks the length-prefixed framing through the protocol crate's transport
//! and provides helpers for asserting on replies.

use huddle_proto::DEFAULT_MAX_FRAME_LEN;
use huddle_proto::transport::Transport;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// A test chat client.
pub struct TestClient {
    transport: Transport,
}

impl TestClient {
    /// Connect to a test server.
    pub async fn connect(address: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;
        Ok(Self {
            transport: Transport::tcp(stream, DEFAULT_MAX_FRAME_LEN),
        })
    }

    /// Send one payload.
    pub async fn send(&mut self, payload: &str) -> anyhow::Result<()> {
        self.transport.write_message(payload).await?;
        Ok(())
    }

    /// Receive a single payload from the server.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        match self.recv_timeout(Duration::from_secs(5)).await? {
            Some(line) => Ok(line),
            None => anyhow::bail!("server closed the connection"),
        }
    }

    /// Receive a payload with a timeout; `None` if the server closed.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<Option<String>> {
        Ok(timeout(dur, self.transport.read_message()).await??)
    }

    /// Send `payload` and return the next line received.
    pub async fn request(&mut self, payload: &str) -> anyhow::Result<String> {
        self.send(payload).await?;
        self.recv().await
    }

    /// Send `payload` and assert the next line received is `expected`.
    pub async fn expect_reply(&mut self, payload: &str, expected: &str) -> anyhow::Result<()> {
        let reply = self.request(payload).await?;
        anyhow::ensure!(
            reply == expected,
            "after {payload:?}: expected {expected:?}, got {reply:?}"
        );
        Ok(())
    }

    /// Assert the next line received is `expected`.
    pub async fn expect(&mut self, expected: &str) -> anyhow::Result<()> {
        let line = self.recv().await?;
        anyhow::ensure!(line == expected, "expected {expected:?}, got {line:?}");
        Ok(())
    }

    /// Complete `/connect` and `/nickname`.
    pub async fn handshake(&mut self, nick: &str) -> anyhow::Result<()> {
        self.expect_reply(
            "/connect",
            "Connected to the server. You can now register choosing a nickname with /nickname.",
        )
        .await?;
        self.expect_reply(
            &format!("/nickname {nick}"),
            &format!("Your nickname is now {nick}. You can now join a channel with /join."),
        )
        .await
    }

    /// Join `channel`, returning the server's reply.
    pub async fn join(&mut self, channel: &str) -> anyhow::Result<String> {
        self.request(&format!("/join {channel}")).await
    }

    /// Round-trip a `/ping` so everything sent before it has been processed.
    pub async fn sync(&mut self) -> anyhow::Result<()> {
        self.expect_reply("/ping", "pong").await
    }

    /// Assert nothing arrives within `dur`.
    pub async fn expect_silence(&mut self, dur: Duration) -> anyhow::Result<()> {
        match timeout(dur, self.transport.read_message()).await {
            Err(_) => Ok(()),
            Ok(Ok(Some(line))) => anyhow::bail!("unexpected line: {line:?}"),
            Ok(Ok(None)) => anyhow::bail!("server closed the connection"),
            Ok(Err(e)) => Err(e.into()),
        }
    }
}
