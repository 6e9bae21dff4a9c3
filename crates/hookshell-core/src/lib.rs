//! # hookshell-core
//!
//! Command routing for an interactive instrumentation console.
//!
//! The crate owns the parts of the console that do not care what a command
//! actually does:
//!
//! - [`Tree`]: the immutable, arbitrarily nested command registry, built and
//!   validated once from [`CommandSpec`]s.
//! - [`Tree::resolve`]: exact, case-sensitive matching of typed words to a
//!   terminal command plus its leftover arguments.
//! - [`CompletionProvider`]: static child-name completion and live,
//!   time-budgeted [`DynamicCompleter`] candidates.
//! - [`Tree::help`]: menus for groups, usage text for commands.
//! - [`dispatch`]: runs a handler and contains whatever it does.
//!
//! Handlers, completers and the session they read from are supplied by the
//! host through [`Handler`], [`DynamicCompleter`] and [`SessionContext`].
//!
//! ```ignore
//! let tree = Tree::build(vec![
//!     CommandSpec::group("jobs", "Work with jobs")
//!         .child(CommandSpec::leaf("list", "List all of the current jobs", ListJobs))
//!         .child(CommandSpec::leaf("kill", "Kill a job", KillJob).completer(ActiveJobs)),
//!     CommandSpec::builtin("exit", "Exit the console"),
//! ])?;
//!
//! let words = split_line("jobs kill 3f2a")?;
//! match tree.resolve(&words) {
//!     Ok(resolution) => { dispatch(resolution, &session).await; }
//!     Err(e) => session.console().error(e.to_string()),
//! }
//! ```

#![deny(clippy::all)]

pub mod complete;
pub mod console;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod line;
pub mod node;
pub mod resolve;
pub mod spec;
pub mod tree;

pub use self::complete::{ActiveJobs, CompletionProvider, DynamicCompleter, DEFAULT_COMPLETION_BUDGET};
pub use self::console::{Console, ConsoleLine, Stream};
pub use self::context::SessionContext;
pub use self::dispatch::{dispatch, DispatchOutcome, Handler, HandlerFailure, HostRequest};
pub use self::error::{
    CompletionError, HandlerError, HandlerResult, LineError, MenuEntry, ResolveError, TreeError,
};
pub use self::help::HelpView;
pub use self::line::{quote_word, split_line, split_partial, split_partial_with_start};
pub use self::node::{Node, NodeKind};
pub use self::resolve::Resolution;
pub use self::spec::CommandSpec;
pub use self::tree::Tree;
