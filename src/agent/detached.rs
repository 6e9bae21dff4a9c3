//! Agent used when no runtime is attached.
//!
//! Lets the console start (help, completion of static commands, local
//! built-ins) without a target. Every remote operation fails with
//! [`AgentError::Detached`].

use super::{Agent, AgentError, RemoteEntry};
use async_trait::async_trait;
use serde_json::Value;

pub struct DetachedAgent;

#[async_trait]
impl Agent for DetachedAgent {
    async fn call(&self, _method: &str, _params: Value) -> Result<Value, AgentError> {
        Err(AgentError::Detached)
    }

    async fn list_directory(&self, _path: &str) -> Result<Vec<RemoteEntry>, AgentError> {
        Err(AgentError::Detached)
    }

    async fn reconnect(&self) -> Result<(), AgentError> {
        Err(AgentError::Detached)
    }

    fn is_attached(&self) -> bool {
        false
    }
}
