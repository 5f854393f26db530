//! /connect handler.

use super::super::{Context, Handler, HandlerResult};
use async_trait::async_trait;
use huddle_proto::{Command, response};
use tracing::info;

/// Handler for `/connect`, the first handshake step.
pub struct ConnectHandler;

#[async_trait]
impl Handler for ConnectHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _cmd: &Command) -> HandlerResult {
        ctx.hub.complete_connect(ctx.id)?;
        info!(client = %ctx.id, addr = %ctx.remote_addr, "Client completed /connect");
        ctx.reply(response::CONNECTED).await
    }
}
