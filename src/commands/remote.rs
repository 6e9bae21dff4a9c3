//! Commands carried out by the runtime agent.
//!
//! A [`RemoteCommand`] validates the words it was given against its
//! [`ArgSpec`], resolves path arguments, forwards the parameters to one agent
//! method and renders the result. Commands that leave a hook running in the
//! target register the agent's handle as a job instead.

use super::args::{ArgSpec, UsageError};
use super::render::render;
use crate::session::Session;
use async_trait::async_trait;
use hookshell_core::{Handler, HandlerError, HandlerResult, SessionContext};
use serde_json::{Map, Value};
use std::path::PathBuf;

pub struct RemoteCommand {
    method: &'static str,
    args: ArgSpec,
    remote_paths: Vec<&'static str>,
    local_inputs: Vec<&'static str>,
    job: Option<&'static str>,
}

impl RemoteCommand {
    pub fn new(method: &'static str, args: ArgSpec) -> Self {
        Self {
            method,
            args,
            remote_paths: Vec::new(),
            local_inputs: Vec::new(),
            job: None,
        }
    }

    /// Resolve this parameter against the current remote directory.
    pub fn remote_path(mut self, key: &'static str) -> Self {
        self.remote_paths.push(key);
        self
    }

    /// This parameter names a local file that must exist.
    pub fn local_input(mut self, key: &'static str) -> Self {
        self.local_inputs.push(key);
        self
    }

    /// The agent answers with a handle for a hook that keeps running.
    pub fn starts_job(mut self, name: &'static str) -> Self {
        self.job = Some(name);
        self
    }

    /// Rewrite path parameters in place. `false` means a problem was
    /// already reported and the call should not go out.
    async fn prepare(
        &self,
        params: &mut Map<String, Value>,
        session: &Session,
    ) -> Result<bool, HandlerError> {
        for key in &self.remote_paths {
            if let Some(Value::String(path)) = params.get_mut(*key) {
                let resolved = session.resolve_path(path)?;
                *path = resolved;
            }
        }

        for key in &self.local_inputs {
            if let Some(Value::String(path)) = params.get_mut(*key) {
                let local = expand_home(path);
                if tokio::fs::metadata(&local).await.is_err() {
                    session
                        .console()
                        .error(format!("Local file not found: {}", local.display()));
                    return Ok(false);
                }
                *path = local.display().to_string();
            }
        }

        Ok(true)
    }
}

#[async_trait]
impl Handler<Session> for RemoteCommand {
    async fn call(&self, args: &[String], session: &Session) -> HandlerResult {
        let mut params = match self.args.parse(args) {
            Ok(params) => params,
            Err(e) => {
                report_usage(session, self.args.usage(), &e);
                return Ok(());
            }
        };

        if !self.prepare(&mut params, session).await? {
            return Ok(());
        }

        let result = session.call(self.method, Value::Object(params)).await?;
        match self.job {
            Some(name) => start_job(session, name, &result),
            None => {
                render(session.console(), &result);
                Ok(())
            }
        }
    }
}

/// Print a usage problem the way every command does.
pub fn report_usage(session: &Session, usage: &str, error: &UsageError) {
    session.console().error(error.to_string());
    session.console().print(format!("Usage: {usage}"));
}

/// Register the job handle returned by the agent and report the new id.
pub fn start_job(session: &Session, name: &str, result: &Value) -> HandlerResult {
    let handle = result
        .get("handle")
        .and_then(Value::as_str)
        .ok_or_else(|| HandlerError::Remote("agent did not return a job handle".to_string()))?;

    if let Some(message) = result.get("message").and_then(Value::as_str) {
        session.console().print(message);
    }

    let id = session.jobs().register(name, handle);
    session.console().print(format!("Started job {id} ({name})"));
    Ok(())
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}
