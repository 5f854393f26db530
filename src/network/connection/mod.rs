//! Connection - Handles an individual client connection.
//!
//! Each Connection runs in its own Tokio task with a companion writer task:
//!
//! ```text
//!   TransportReader ──▶ Command::parse ──▶ Registry::dispatch
//!                                              │
//!                  replies, broadcasts ────────▼
//!                                     mpsc queue (sendq_capacity)
//!                                              │
//!   TransportWriter ◀── writer task ◀──────────┘
//! ```
//!
//! Everything addressed to the client goes through the queue, so the
//! writer task is the only code that touches the socket's write half. Waits
//! on that queue also watch the disconnect token, so a client whose writer is
//! stuck on a full socket still gets torn down.
//!
//! The session ends on `/quit`, peer close, a read error, a fatal handler
//! error or a cancelled disconnect token. Teardown runs once, here, no matter
//! which of these fired.

mod error_handling;

use error_handling::{ReadErrorAction, classify_read_error};

use crate::config::LimitsConfig;
use crate::handlers::{Context, HandlerError, Registry};
use crate::state::{ClientId, Hub};
use chrono::Utc;
use huddle_proto::transport::{Transport, TransportWriter};
use huddle_proto::{Command, response};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info, warn};

/// How long teardown waits for queued lines to reach the socket.
const WRITER_DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// A client connection handler.
pub struct Connection {
    id: ClientId,
    addr: SocketAddr,
    hub: Arc<Hub>,
    registry: Arc<Registry>,
    transport: Transport,
    sendq_capacity: usize,
}

impl Connection {
    /// Create a new connection handler for an accepted stream.
    pub fn new(
        id: ClientId,
        stream: TcpStream,
        addr: SocketAddr,
        hub: Arc<Hub>,
        registry: Arc<Registry>,
        limits: LimitsConfig,
    ) -> Self {
        Self {
            id,
            addr,
            hub,
            registry,
            transport: Transport::tcp(stream, limits.max_frame_len),
            sendq_capacity: limits.sendq_capacity,
        }
    }

    /// Run the session until it ends, then tear it down.
    pub async fn run(self) -> anyhow::Result<()> {
        let Self {
            id,
            addr,
            hub,
            registry,
            transport,
            sendq_capacity,
        } = self;

        let (tx, rx) = mpsc::channel::<String>(sendq_capacity);
        let disconnect = CancellationToken::new();
        let (mut reader, writer) = transport.into_split();

        hub.attach(id, addr, tx.clone(), disconnect.clone());
        info!("Client connected");

        let mut writer_task = spawn_writer(writer, rx, disconnect.clone());

        let session = async {
            tx.send(response::welcome(&id.placeholder_nick())).await?;

            loop {
                let read = tokio::select! {
                    biased;
                    _ = disconnect.cancelled() => {
                        info!("Disconnect requested, closing session");
                        break;
                    }
                    read = reader.read_message() => read,
                };

                let payload = match read {
                    Ok(Some(payload)) => payload,
                    Ok(None) => {
                        info!("Peer closed connection");
                        break;
                    }
                    Err(e) => {
                        match classify_read_error(&e) {
                            ReadErrorAction::MalformedFrame { error_msg } => {
                                warn!(error = %error_msg, "Malformed frame, closing session");
                            }
                            ReadErrorAction::IoError => {
                                debug!(error = ?e, "I/O error, closing session");
                            }
                        }
                        break;
                    }
                };

                let cmd = Command::parse(&payload);
                debug!(command = cmd.name(), len = payload.len(), "Received payload");

                let mut ctx = Context::new(id, &hub, &tx, addr, &disconnect);
                match registry.dispatch(&mut ctx, &cmd).await {
                    Ok(()) => {}
                    Err(HandlerError::Quit) => {
                        if let Err(e) = ctx.reply(response::FAREWELL).await {
                            debug!(error = %e, "Farewell not queued");
                        }
                        break;
                    }
                    Err(e) => {
                        debug!(error = %e, code = e.error_code(), "Command refused");
                        if let Some(reply) = e.to_reply()
                            && let Err(send_err) = ctx.reply(reply).await
                        {
                            debug!(error = %send_err, "Error reply not queued");
                            break;
                        }
                        if e.is_fatal() {
                            break;
                        }
                    }
                }
            }
            Ok::<(), anyhow::Error>(())
        };
        let result = session.await;

        if let Some(departed) = hub.deregister(id) {
            let duration = Utc::now() - departed.connected_at;
            info!(
                nick = %departed.nickname,
                channel = departed.channel.as_deref().unwrap_or("-"),
                duration_secs = duration.num_seconds(),
                "Client disconnected"
            );
        }

        // The hub's clone is gone; dropping ours lets the writer drain and exit.
        drop(tx);
        if tokio::time::timeout(WRITER_DRAIN_TIMEOUT, &mut writer_task)
            .await
            .is_err()
        {
            warn!("Writer did not drain in time, aborting");
            writer_task.abort();
        }

        result
    }
}

/// Forward queued lines to the socket until every sender is dropped.
///
/// A write failure cancels `disconnect` so the read loop stops too.
fn spawn_writer(
    mut writer: TransportWriter,
    mut rx: mpsc::Receiver<String>,
    disconnect: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(
        async move {
            while let Some(line) = rx.recv().await {
                if let Err(e) = writer.write_message(line).await {
                    debug!(error = %e, "Write failed");
                    disconnect.cancel();
                    return;
                }
            }
            if let Err(e) = writer.close().await {
                debug!(error = %e, "Shutdown of write half failed");
            }
        }
        .in_current_span(),
    )
}
