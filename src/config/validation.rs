//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("console.prompt must not be empty")]
    EmptyPrompt,
    #[error("completion.budget_ms must be between 1 and 5000, got {0}")]
    InvalidCompletionBudget(u64),
    #[error("session.call_timeout_secs must be between 1 and 3600, got {0}")]
    InvalidCallTimeout(u64),
    #[error("session.initial_directory must be an absolute remote path, got '{0}'")]
    RelativeInitialDirectory(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.console.prompt.is_empty() {
        errors.push(ValidationError::EmptyPrompt);
    }

    let budget = config.completion.budget_ms;
    if !(1..=5000).contains(&budget) {
        errors.push(ValidationError::InvalidCompletionBudget(budget));
    }

    let timeout = config.session.call_timeout_secs;
    if !(1..=3600).contains(&timeout) {
        errors.push(ValidationError::InvalidCallTimeout(timeout));
    }

    if let Some(ref dir) = config.session.initial_directory
        && !dir.starts_with('/')
    {
        errors.push(ValidationError::RelativeInitialDirectory(dir.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
