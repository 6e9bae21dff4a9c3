//! Shared fixtures for the core integration tests.
//!
//! Provides an in-memory session with a fake remote filesystem and a
//! registry shaped like the console's real one.

#![allow(dead_code)]

pub mod session;

#[allow(unused_imports)]
pub use session::{registry, Recorder, Subdirectories, TestSession};
