//! Handler trait and dispatch.
//!
//! The dispatcher is the only place a handler is invoked. Whatever the
//! handler does (returns an error, panics) is turned into a
//! [`DispatchOutcome`] so the console loop keeps running.

use crate::context::SessionContext;
use crate::error::{HandlerError, HandlerResult};
use crate::node::NodeKind;
use crate::resolve::Resolution;
use async_trait::async_trait;
use futures_util::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::{debug_span, warn, Instrument};

/// Executable capability of a leaf command.
///
/// Handlers receive the leftover tokens unexamined and own their argument
/// contract: a usage problem is reported to the session console by the
/// handler itself, which then returns `Ok(())`.
#[async_trait]
pub trait Handler<C: SessionContext>: Send + Sync {
    async fn call(&self, args: &[String], ctx: &C) -> HandlerResult;
}

/// A built-in command the console host has to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRequest {
    /// Name of the built-in node, e.g. `exit` or `!`.
    pub name: String,
    /// Full command path.
    pub path: Vec<String>,
    pub args: Vec<String>,
}

/// A handler that failed; already reported on the console.
#[derive(Debug)]
pub struct HandlerFailure {
    /// Space-joined command path.
    pub command: String,
    pub error: HandlerError,
}

/// Result of dispatching one resolved command.
#[derive(Debug)]
pub enum DispatchOutcome {
    Completed,
    Host(HostRequest),
    Failed(HandlerFailure),
}

impl DispatchOutcome {
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Run the command a resolution points at.
pub async fn dispatch<C: SessionContext>(resolution: Resolution<'_, C>, ctx: &C) -> DispatchOutcome {
    let node = resolution.node();
    let command = resolution.command();

    let handler = match node.kind() {
        NodeKind::Leaf(handler) => handler,
        NodeKind::BuiltIn => {
            let path = resolution.names();
            return DispatchOutcome::Host(HostRequest {
                name: node.name().to_string(),
                path,
                args: resolution.into_args(),
            });
        }
        NodeKind::Group(_) => {
            return fail(
                ctx,
                command,
                HandlerError::Internal("a command group cannot be executed".to_string()),
            );
        }
    };

    let args = resolution.args();
    let span = debug_span!("console.command", command = %command, args = args.len());
    let call = AssertUnwindSafe(handler.call(args, ctx)).catch_unwind();

    match call.instrument(span).await {
        Ok(Ok(())) => DispatchOutcome::Completed,
        Ok(Err(error)) => fail(ctx, command, error),
        Err(payload) => fail(ctx, command, HandlerError::Panicked(panic_message(&*payload))),
    }
}

fn fail<C: SessionContext>(ctx: &C, command: String, error: HandlerError) -> DispatchOutcome {
    warn!(command = %command, error_code = error.error_code(), error = %error, "Command failed");
    ctx.console().error(format!("{command}: {error}"));
    DispatchOutcome::Failed(HandlerFailure { command, error })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
