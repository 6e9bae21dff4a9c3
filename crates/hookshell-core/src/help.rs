//! Help engine.
//!
//! `help <path>` walks the tree exactly like the resolver, but instead of
//! dispatching it renders what it found: a menu of children for a group, or
//! the usage text of a terminal command.

use crate::context::SessionContext;
use crate::error::{MenuEntry, ResolveError};
use crate::tree::{path_names, Tree, Walk};
use std::fmt;

/// Rendered help for a command path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpView {
    /// Children of a group, in registry order.
    Menu {
        path: Vec<String>,
        entries: Vec<MenuEntry>,
    },
    /// Usage text of a terminal command (its summary when it has none).
    Text { path: Vec<String>, text: String },
}

impl HelpView {
    /// Menu view of the level where an incomplete or unknown command stopped.
    pub fn from_resolve_error(err: &ResolveError) -> Self {
        Self::Menu {
            path: err.matched().to_vec(),
            entries: err.entries().to_vec(),
        }
    }

    pub fn path(&self) -> &[String] {
        match self {
            Self::Menu { path, .. } | Self::Text { path, .. } => path,
        }
    }
}

impl fmt::Display for HelpView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { text, .. } => f.write_str(text),
            Self::Menu { path, entries } => {
                if path.is_empty() {
                    writeln!(f, "Available commands:")?;
                } else {
                    writeln!(f, "Commands under '{}':", path.join(" "))?;
                }
                let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "  {:<width$}  {}", entry.name, entry.summary)?;
                }
                Ok(())
            }
        }
    }
}

impl<C: SessionContext> Tree<C> {
    /// Help for the command at `tokens` (the words after `help`).
    pub fn help<S: AsRef<str>>(&self, tokens: &[S]) -> Result<HelpView, ResolveError> {
        match self.walk(tokens) {
            Walk::Group { path } => Ok(HelpView::Menu {
                path: path_names(&path),
                entries: self.last_or_root(&path).menu(),
            }),
            Walk::Terminal { path, .. } => {
                let node = self.last_or_root(&path);
                Ok(HelpView::Text {
                    path: path_names(&path),
                    text: node.help_text().unwrap_or(node.summary()).to_string(),
                })
            }
            Walk::Unknown { path, index } => Err(ResolveError::UnknownCommand {
                matched: path_names(&path),
                token: tokens[index].as_ref().to_string(),
                alternatives: self.last_or_root(&path).menu(),
            }),
        }
    }
}
