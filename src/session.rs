//! The attached runtime session.
//!
//! [`Session`] is the host's [`SessionContext`]: it owns the current remote
//! directory, the job registry, the console and the agent connection, and
//! puts a time budget on every agent call made on behalf of a command.

use crate::agent::{Agent, AgentError, RemoteEntry};
use crate::jobs::JobRegistry;
use hookshell_core::{Console, HandlerError, SessionContext};
use parking_lot::RwLock;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct Session {
    directory: RwLock<Option<String>>,
    jobs: JobRegistry,
    console: Console,
    agent: Arc<dyn Agent>,
    call_timeout: Duration,
}

impl Session {
    pub fn new(agent: Arc<dyn Agent>, console: Console, call_timeout: Duration) -> Self {
        Self {
            directory: RwLock::new(None),
            jobs: JobRegistry::new(),
            console,
            agent,
            call_timeout,
        }
    }

    pub fn with_directory(self, directory: Option<String>) -> Self {
        *self.directory.write() = directory;
        self
    }

    #[inline]
    pub fn agent(&self) -> &dyn Agent {
        self.agent.as_ref()
    }

    #[inline]
    pub fn jobs(&self) -> &JobRegistry {
        &self.jobs
    }

    pub fn set_directory(&self, path: impl Into<String>) {
        *self.directory.write() = Some(path.into());
    }

    /// Absolute remote path for `input`, relative to the current directory.
    pub fn resolve_path(&self, input: &str) -> Result<String, HandlerError> {
        if input.starts_with('/') {
            return Ok(join_remote("/", input));
        }
        let cwd = self
            .current_directory()
            .ok_or(HandlerError::SessionUnavailable)?;
        Ok(join_remote(&cwd, input))
    }

    /// Call an agent method within the session's time budget.
    pub async fn call(&self, method: &str, params: Value) -> Result<Value, HandlerError> {
        debug!(method = %method, "Agent call");
        self.bounded(self.agent.call(method, params)).await
    }

    /// List a remote directory within the session's time budget.
    pub async fn list_directory(&self, path: &str) -> Result<Vec<RemoteEntry>, HandlerError> {
        self.bounded(self.agent.list_directory(path)).await
    }

    /// Ask the agent to reconnect to the current target.
    pub async fn reconnect(&self) -> Result<(), HandlerError> {
        self.bounded(self.agent.reconnect()).await
    }

    /// Replace the current directory with the one the agent reports.
    pub async fn refresh_directory(&self) -> Result<(), HandlerError> {
        match self.call("filesystem.pwd", Value::Null).await? {
            Value::String(path) => {
                self.set_directory(path);
                Ok(())
            }
            other => Err(HandlerError::Remote(format!(
                "unexpected working directory: {other}"
            ))),
        }
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, AgentError>>,
    ) -> Result<T, HandlerError> {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result.map_err(HandlerError::from),
            Err(_) => Err(HandlerError::Timeout(self.call_timeout)),
        }
    }
}

impl SessionContext for Session {
    fn current_directory(&self) -> Option<String> {
        self.directory.read().clone()
    }

    fn active_jobs(&self) -> Vec<String> {
        self.jobs.ids()
    }

    fn console(&self) -> &Console {
        &self.console
    }
}

/// Join a remote path onto `base`, resolving `.` and `..` components.
/// Never climbs above `/`.
pub fn join_remote(base: &str, input: &str) -> String {
    let mut parts: Vec<&str> = if input.starts_with('/') {
        Vec::new()
    } else {
        base.split('/').filter(|p| !p.is_empty()).collect()
    };

    for component in input.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            name => parts.push(name),
        }
    }

    format!("/{}", parts.join("/"))
}
