//! Error types for the command core.
//!
//! Only [`TreeError`] is fatal, and only while the tree is being built.
//! Everything raised after startup is recoverable by the console loop.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Convenience alias for handler results.
pub type HandlerResult = Result<(), HandlerError>;

/// A child listed as a valid alternative or continuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Child name (the token a user types).
    pub name: String,
    /// One-line summary of the child.
    pub summary: String,
}

/// Malformed static command declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TreeError {
    /// A group was declared without any children.
    #[error("command group '{path}' has no children")]
    EmptyGroup {
        /// Space-joined path of the group.
        path: String,
    },

    /// Two siblings share the same name.
    #[error("duplicate command '{name}' under '{parent}'")]
    DuplicateName {
        /// Path of the parent group.
        parent: String,
        /// The colliding name.
        name: String,
    },

    /// A node declares more than one of children, handler and built-in.
    #[error("command '{path}' declares conflicting kinds (children, handler or built-in)")]
    ConflictingKind {
        /// Path of the offending node.
        path: String,
    },

    /// A group declares a dynamic completer.
    #[error("command group '{path}' cannot declare a dynamic completer")]
    CompleterOnGroup {
        /// Path of the group.
        path: String,
    },

    /// A name is empty or contains whitespace.
    #[error("invalid command name {name:?} under '{parent}'")]
    InvalidName {
        /// Path of the parent group.
        parent: String,
        /// The rejected name.
        name: String,
    },
}

/// Failure to resolve typed tokens against the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A token matched no child of the current group.
    #[error("{}", render_unknown(.matched, .token, .alternatives))]
    UnknownCommand {
        /// Names matched before the failing token.
        matched: Vec<String>,
        /// The token that matched nothing.
        token: String,
        /// Valid children at that level.
        alternatives: Vec<MenuEntry>,
    },

    /// Input ended while positioned at a group.
    #[error("{}", render_incomplete(.matched))]
    IncompleteCommand {
        /// Names matched so far (empty for the root).
        matched: Vec<String>,
        /// Children that would continue the command.
        continuations: Vec<MenuEntry>,
    },
}

impl ResolveError {
    /// Names matched before resolution stopped.
    pub fn matched(&self) -> &[String] {
        match self {
            Self::UnknownCommand { matched, .. } | Self::IncompleteCommand { matched, .. } => {
                matched
            }
        }
    }

    /// Valid entries at the level where resolution stopped.
    pub fn entries(&self) -> &[MenuEntry] {
        match self {
            Self::UnknownCommand { alternatives, .. } => alternatives,
            Self::IncompleteCommand { continuations, .. } => continuations,
        }
    }

    /// Just the names of [`ResolveError::entries`].
    pub fn alternative_names(&self) -> Vec<&str> {
        self.entries().iter().map(|e| e.name.as_str()).collect()
    }
}

fn render_unknown(matched: &[String], token: &str, alternatives: &[MenuEntry]) -> String {
    let names: Vec<&str> = alternatives.iter().map(|e| e.name.as_str()).collect();
    if matched.is_empty() {
        format!(
            "unknown command '{token}'. Valid commands: {}",
            names.join(", ")
        )
    } else {
        format!(
            "unknown command '{token}' under '{}'. Valid options: {}",
            matched.join(" "),
            names.join(", ")
        )
    }
}

fn render_incomplete(matched: &[String]) -> String {
    if matched.is_empty() {
        "incomplete command".to_string()
    } else {
        format!("incomplete command '{}'", matched.join(" "))
    }
}

/// Errors a handler may return.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HandlerError {
    #[error("no runtime session is attached")]
    SessionUnavailable,

    #[error("remote call failed: {0}")]
    Remote(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("handler panicked: {0}")]
    Panicked(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Static error code for log fields.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SessionUnavailable => "session_unavailable",
            Self::Remote(_) => "remote",
            Self::Io(_) => "io",
            Self::Timeout(_) => "timeout",
            Self::Panicked(_) => "panicked",
            Self::Internal(_) => "internal",
        }
    }
}

/// Errors a dynamic completer may return. Never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("session unavailable")]
    SessionUnavailable,

    #[error("completion failed: {0}")]
    Failed(String),
}

/// Tokenizer errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// A quote was opened and never closed.
    #[error("unterminated quote starting at position {position}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote.
        position: usize,
    },
}

/// Display helper for space-joined command paths.
pub(crate) struct PathDisplay<'a>(pub &'a [String]);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0.join(" "))
        }
    }
}
