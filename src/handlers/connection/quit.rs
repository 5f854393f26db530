//! /quit handler.

use super::super::{Context, Handler, HandlerError, HandlerResult};
use async_trait::async_trait;
use huddle_proto::Command;

/// Handler for `/quit`.
pub struct QuitHandler;

#[async_trait]
impl Handler for QuitHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _cmd: &Command) -> HandlerResult {
        tracing::info!(client = %ctx.id, nick = %ctx.nick(), "Client quit");

        // Signal quit by returning Quit error that connection loop will handle
        Err(HandlerError::Quit)
    }
}
