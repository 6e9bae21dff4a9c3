//! Scripted agent for unit tests.

use super::{Agent, AgentError, RemoteEntry};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Agent with canned responses that records every call it receives.
#[derive(Default)]
pub struct ScriptedAgent {
    responses: Mutex<HashMap<String, Value>>,
    directories: Mutex<HashMap<String, Vec<RemoteEntry>>>,
    calls: Mutex<Vec<(String, Value)>>,
    reconnects: AtomicUsize,
}

impl ScriptedAgent {
    pub fn new() -> Self {
        let agent = Self::default();
        agent.add_directory(
            "/",
            vec![RemoteEntry::directory("var"), RemoteEntry::directory("tmp")],
        );
        agent.add_directory(
            "/var/mobile",
            vec![
                RemoteEntry::directory("Documents"),
                RemoteEntry::directory("Library"),
                RemoteEntry::file("cache.sqlite", 8192),
            ],
        );
        agent.add_directory("/var/mobile/Documents", Vec::new());
        agent.add_directory("/var/mobile/Library", vec![RemoteEntry::file("Info.plist", 512)]);
        agent.add_directory("/var", vec![RemoteEntry::directory("mobile")]);
        agent
    }

    pub fn respond(&self, method: &str, value: Value) {
        self.responses.lock().insert(method.to_string(), value);
    }

    pub fn add_directory(&self, path: &str, entries: Vec<RemoteEntry>) {
        self.directories.lock().insert(path.to_string(), entries);
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Option<(String, Value)> {
        self.calls.lock().last().cloned()
    }

    pub fn reconnects(&self) -> usize {
        self.reconnects.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Agent for ScriptedAgent {
    async fn call(&self, method: &str, params: Value) -> Result<Value, AgentError> {
        self.calls.lock().push((method.to_string(), params));
        self.responses
            .lock()
            .get(method)
            .cloned()
            .ok_or_else(|| AgentError::Call {
                method: method.to_string(),
                message: "not implemented by this agent".to_string(),
            })
    }

    async fn list_directory(&self, path: &str) -> Result<Vec<RemoteEntry>, AgentError> {
        self.directories
            .lock()
            .get(path)
            .cloned()
            .ok_or_else(|| AgentError::NoSuchDirectory(path.to_string()))
    }

    async fn reconnect(&self) -> Result<(), AgentError> {
        self.reconnects.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn is_attached(&self) -> bool {
        true
    }
}
