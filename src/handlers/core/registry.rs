//! Command handler registry and dispatch.
//!
//! The `Registry` maps command names to handlers, refuses commands the
//! session stage does not admit, and keeps per-command usage counters.

use super::context::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{
    channel::JoinHandler,
    connection::{ConnectHandler, NicknameHandler, PingHandler, QuitHandler},
    messaging::ChatHandler,
    moderation::{KickHandler, MuteHandler, WhoisHandler},
};
use crate::state::SessionStage;
use crate::telemetry::{CommandTimer, spans};
use huddle_proto::Command;
use huddle_proto::command::CHAT;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Instrument, debug};

/// Registry of command handlers.
pub struct Registry {
    handlers: HashMap<&'static str, Box<dyn Handler>>,
    /// Command usage counters, reported at shutdown.
    command_counts: HashMap<&'static str, Arc<AtomicU64>>,
}

impl Registry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, Box<dyn Handler>> = HashMap::new();

        // Handshake and meta commands
        handlers.insert("/connect", Box::new(ConnectHandler));
        handlers.insert("/nickname", Box::new(NicknameHandler));
        handlers.insert("/ping", Box::new(PingHandler));
        handlers.insert("/quit", Box::new(QuitHandler));

        // Channel membership
        handlers.insert("/join", Box::new(JoinHandler));

        // Owner-only moderation
        handlers.insert("/kick", Box::new(KickHandler));
        handlers.insert("/mute", Box::new(MuteHandler::mute()));
        handlers.insert("/unmute", Box::new(MuteHandler::unmute()));
        handlers.insert("/whois", Box::new(WhoisHandler));

        // Everything else
        handlers.insert(CHAT, Box::new(ChatHandler));

        let command_counts = handlers
            .keys()
            .map(|name| (*name, Arc::new(AtomicU64::new(0))))
            .collect();

        Self {
            handlers,
            command_counts,
        }
    }

    /// Dispatch a classified command for the client in `ctx`.
    ///
    /// Commands the current stage does not admit fail with
    /// [`HandlerError::ProtocolViolation`] before any handler runs.
    pub async fn dispatch(&self, ctx: &mut Context<'_>, cmd: &Command) -> HandlerResult {
        let stage = ctx.stage();
        if stage == SessionStage::Disconnected {
            return Err(HandlerError::Internal(format!(
                "dispatch for torn-down client {}",
                ctx.id
            )));
        }
        stage.admits(cmd).map_err(HandlerError::ProtocolViolation)?;

        let name = cmd.name();
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| HandlerError::Internal(format!("no handler for {name}")))?;

        if let Some(counter) = self.command_counts.get(name) {
            counter.fetch_add(1, Ordering::Relaxed);
        }

        debug!(command = name, stage = stage.name(), "Dispatching");
        let span = spans::command(name, ctx.id);
        let _timer = CommandTimer::new(name);
        handler.handle(ctx, cmd).instrument(span).await
    }

    /// Usage count per command, busiest first.
    pub fn command_stats(&self) -> Vec<(&'static str, u64)> {
        let mut stats: Vec<_> = self
            .command_counts
            .iter()
            .map(|(name, count)| (*name, count.load(Ordering::Relaxed)))
            .collect();
        stats.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        stats
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
