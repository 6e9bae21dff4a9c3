//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: The top-level [`Config`] and file loading
//! - [`console`]: Prompt and startup commands (ConsoleConfig)
//! - [`session`]: Runtime agent call budget, initial directory and the
//!   completion budget (SessionConfig, CompletionConfig)
//! - [`validation`]: Startup checks that report every problem at once

mod console;
mod session;
mod types;
pub mod validation;

pub use types::Config;
