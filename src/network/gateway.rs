//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds the listening socket and spawns a Connection task for
//! each incoming client. Accept failures are logged and never stop the loop.

use crate::config::LimitsConfig;
use crate::handlers::Registry;
use crate::network::Connection;
use crate::state::Hub;
use crate::telemetry::spans;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{Instrument, error, info, instrument};

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listener: TcpListener,
    hub: Arc<Hub>,
    registry: Arc<Registry>,
    limits: LimitsConfig,
}

impl Gateway {
    /// Bind the gateway to the specified address.
    pub async fn bind(
        addr: SocketAddr,
        hub: Arc<Hub>,
        registry: Arc<Registry>,
        limits: LimitsConfig,
    ) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(address = %listener.local_addr()?, "Listener bound");

        Ok(Self {
            listener,
            hub,
            registry,
            limits,
        })
    }

    /// Run the gateway, accepting connections forever.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let id = self.hub.next_client_id();
                    info!(client = %id, %addr, "Connection accepted");

                    let connection = Connection::new(
                        id,
                        stream,
                        addr,
                        Arc::clone(&self.hub),
                        Arc::clone(&self.registry),
                        self.limits.clone(),
                    );

                    tokio::spawn(
                        async move {
                            if let Err(e) = connection.run().await {
                                error!(error = %e, "Connection error");
                            }
                            info!("Connection closed");
                        }
                        .instrument(spans::connection(id, addr)),
                    );
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}
