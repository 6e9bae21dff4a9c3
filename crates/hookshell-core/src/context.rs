//! Session context passed to every handler and dynamic completer.

use crate::console::Console;

/// Live, read-only view of the attached runtime session.
///
/// Implementations are owned by the host; the core only reads through
/// this trait. Reads are expected to be cheap snapshots.
pub trait SessionContext: Send + Sync + 'static {
    /// Current remote working directory, or `None` when the session is
    /// unavailable or the directory is not known yet.
    fn current_directory(&self) -> Option<String>;

    /// Identifiers of the currently active jobs.
    fn active_jobs(&self) -> Vec<String>;

    /// Output channel for command results and reported failures.
    fn console(&self) -> &Console;
}
