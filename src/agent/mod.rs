//! Runtime agent abstraction.
//!
//! The agent is the process-side half of the console: it runs inside the
//! instrumented application and carries out whatever a command asks for.
//! The console only ever talks to it through [`Agent`], with JSON
//! parameters in and JSON results out.

use async_trait::async_trait;
use hookshell_core::HandlerError;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub mod detached;

#[cfg(test)]
pub mod testing;

pub use detached::DetachedAgent;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("no runtime agent is attached")]
    Detached,
    #[error("{method} failed: {message}")]
    Call { method: String, message: String },
    #[error("no such remote directory: {0}")]
    NoSuchDirectory(String),
}

impl From<AgentError> for HandlerError {
    fn from(e: AgentError) -> Self {
        match e {
            AgentError::Detached => HandlerError::SessionUnavailable,
            other => HandlerError::Remote(other.to_string()),
        }
    }
}

/// One entry of a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteEntry {
    pub name: String,
    #[serde(default)]
    pub directory: bool,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub permissions: Option<String>,
}

#[cfg(test)]
impl RemoteEntry {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            directory: false,
            size: Some(size),
            permissions: None,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: true,
            size: None,
            permissions: None,
        }
    }
}

/// Connection to the runtime agent inside the target process.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Invoke an agent method, e.g. `memory.search`.
    async fn call(&self, method: &str, params: Value) -> Result<Value, AgentError>;

    /// List an absolute remote directory.
    async fn list_directory(&self, path: &str) -> Result<Vec<RemoteEntry>, AgentError>;

    /// Re-establish the connection to the current target.
    async fn reconnect(&self) -> Result<(), AgentError>;

    fn is_attached(&self) -> bool;
}
