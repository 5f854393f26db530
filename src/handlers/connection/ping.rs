//! /ping handler.

use super::super::{Context, Handler, HandlerResult};
use async_trait::async_trait;
use huddle_proto::{Command, response};

/// Handler for `/ping`.
pub struct PingHandler;

#[async_trait]
impl Handler for PingHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _cmd: &Command) -> HandlerResult {
        ctx.reply(response::PONG).await
    }
}
