//! Session and completion configuration.

use serde::Deserialize;
use std::time::Duration;

/// Runtime session settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Time budget for a single runtime agent call, in seconds (default: 30).
    #[serde(default = "default_call_timeout_secs")]
    pub call_timeout_secs: u64,
    /// Remote working directory to start in. When unset, the directory
    /// stays unknown until the first `cd`.
    #[serde(default)]
    pub initial_directory: Option<String>,
}

impl SessionConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            call_timeout_secs: default_call_timeout_secs(),
            initial_directory: None,
        }
    }
}

/// Tab-completion settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// Budget for one dynamic completion, in milliseconds (default: 250).
    #[serde(default = "default_budget_ms")]
    pub budget_ms: u64,
}

impl CompletionConfig {
    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            budget_ms: default_budget_ms(),
        }
    }
}

fn default_call_timeout_secs() -> u64 {
    30
}

fn default_budget_ms() -> u64 {
    250
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_correct() {
        let session = SessionConfig::default();
        assert_eq!(session.call_timeout(), Duration::from_secs(30));
        assert!(session.initial_directory.is_none());

        let completion = CompletionConfig::default();
        assert_eq!(completion.budget(), Duration::from_millis(250));
    }

    #[test]
    fn default_budget_matches_core_default() {
        assert_eq!(
            CompletionConfig::default().budget(),
            hookshell_core::DEFAULT_COMPLETION_BUDGET
        );
    }
}
