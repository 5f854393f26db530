//! Test server management.
//!
//! Spawns and manages huddled instances for integration testing.

use std::io::Write;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::time::sleep;

/// Knobs written into the generated config file.
#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    pub max_frame_len: Option<usize>,
    pub sendq_capacity: Option<usize>,
    pub unique_nicknames: bool,
}

/// A test server instance.
pub struct TestServer {
    child: Child,
    port: u16,
    // Kept alive so the config file outlives the process start.
    _config: NamedTempFile,
}

impl TestServer {
    /// Spawn a server with default limits on `port`.
    pub async fn spawn(port: u16) -> anyhow::Result<Self> {
        Self::spawn_with(port, ServerOptions::default()).await
    }

    /// Spawn a server with the given options on `port`.
    pub async fn spawn_with(port: u16, options: ServerOptions) -> anyhow::Result<Self> {
        let mut config = NamedTempFile::new()?;
        write!(
            config,
            r#"
[server]
name = "test.huddle"

[listen]
address = "127.0.0.1:{port}"

[policy]
unique_nicknames = {unique}
"#,
            unique = options.unique_nicknames,
        )?;
        if options.max_frame_len.is_some() || options.sendq_capacity.is_some() {
            writeln!(config, "[limits]")?;
            if let Some(max) = options.max_frame_len {
                writeln!(config, "max_frame_len = {max}")?;
            }
            if let Some(depth) = options.sendq_capacity {
                writeln!(config, "sendq_capacity = {depth}")?;
            }
        }
        config.flush()?;

        let child = Command::new(env!("CARGO_BIN_EXE_huddled"))
            .arg(config.path())
            .env("RUST_LOG", "warn")
            .stdout(Stdio::null())
            .spawn()?;

        let server = Self {
            child,
            port,
            _config: config,
        };

        // Wait for server to start listening
        server.wait_until_ready().await?;

        Ok(server)
    }

    /// Wait until the server is accepting connections.
    async fn wait_until_ready(&self) -> anyhow::Result<()> {
        for _ in 0..50 {
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                return Ok(());
            }
            sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("Server failed to start within 5 seconds")
    }

    /// Get the server address.
    pub fn address(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }

    /// Connect a client and consume the welcome line.
    pub async fn connect(&self) -> anyhow::Result<super::client::TestClient> {
        let mut client = super::client::TestClient::connect(&self.address()).await?;
        let welcome = client.recv().await?;
        anyhow::ensure!(
            welcome.starts_with("Welcome to the chat! Your nickname is Client "),
            "unexpected welcome: {welcome:?}"
        );
        Ok(client)
    }

    /// Connect a client and complete `/connect` and `/nickname`.
    pub async fn named(&self, nick: &str) -> anyhow::Result<super::client::TestClient> {
        let mut client = self.connect().await?;
        client.handshake(nick).await?;
        Ok(client)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Kill the server process
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
