//! Completers backed by the remote filesystem.

use crate::session::Session;
use async_trait::async_trait;
use hookshell_core::{CompletionError, DynamicCompleter, SessionContext};

/// Entries of the current remote directory.
#[derive(Debug, Clone, Copy)]
pub struct RemoteEntries {
    directories_only: bool,
}

impl RemoteEntries {
    pub fn directories() -> Self {
        Self {
            directories_only: true,
        }
    }

    pub fn files() -> Self {
        Self {
            directories_only: false,
        }
    }
}

#[async_trait]
impl DynamicCompleter<Session> for RemoteEntries {
    async fn candidates(&self, session: &Session) -> Result<Vec<String>, CompletionError> {
        let cwd = session
            .current_directory()
            .ok_or(CompletionError::SessionUnavailable)?;
        let entries = session
            .agent()
            .list_directory(&cwd)
            .await
            .map_err(|e| CompletionError::Failed(e.to_string()))?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.directory || !self.directories_only)
            .map(|entry| entry.name)
            .collect())
    }
}
