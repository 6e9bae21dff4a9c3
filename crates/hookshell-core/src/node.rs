//! Command node model.
//!
//! A [`Node`] is one entry of the command tree. Its [`NodeKind`] makes the
//! intent explicit: a group only organises children, a leaf carries a
//! handler, and a built-in is left to the console host.
//!
//! Nodes are only constructed by [`Tree::build`](crate::Tree::build), which
//! enforces the structural invariants; this module is plain data access.

use crate::complete::DynamicCompleter;
use crate::context::SessionContext;
use crate::dispatch::Handler;
use crate::error::MenuEntry;
use std::fmt;
use std::sync::Arc;

/// What a node does when it is reached.
pub enum NodeKind<C: SessionContext> {
    /// Organisational node with ordered, uniquely named children.
    Group(Vec<Node<C>>),
    /// Executable command.
    Leaf(Arc<dyn Handler<C>>),
    /// Terminal command handled by the console host itself.
    BuiltIn,
}

/// One entry of the command tree.
pub struct Node<C: SessionContext> {
    pub(crate) name: String,
    pub(crate) summary: String,
    pub(crate) help: Option<String>,
    pub(crate) kind: NodeKind<C>,
    pub(crate) completer: Option<Arc<dyn DynamicCompleter<C>>>,
}

impl<C: SessionContext> Node<C> {
    /// The token a user types to reach this node.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description used in menus.
    #[inline]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Long-form usage text, if any.
    #[inline]
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind<C> {
        &self.kind
    }

    /// Children in registry order. Empty unless this is a group.
    pub fn children(&self) -> &[Node<C>] {
        match &self.kind {
            NodeKind::Group(children) => children.as_slice(),
            NodeKind::Leaf(_) | NodeKind::BuiltIn => &[],
        }
    }

    /// Exact, case-sensitive child lookup.
    pub fn child(&self, name: &str) -> Option<&Node<C>> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Handler of a leaf node.
    pub fn handler(&self) -> Option<&Arc<dyn Handler<C>>> {
        match &self.kind {
            NodeKind::Leaf(handler) => Some(handler),
            NodeKind::Group(_) | NodeKind::BuiltIn => None,
        }
    }

    /// Dynamic completer, only ever present on terminal nodes.
    pub fn completer(&self) -> Option<&Arc<dyn DynamicCompleter<C>>> {
        self.completer.as_ref()
    }

    #[inline]
    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group(_))
    }

    #[inline]
    pub fn is_builtin(&self) -> bool {
        matches!(self.kind, NodeKind::BuiltIn)
    }

    /// Leaf or built-in.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.is_group()
    }

    /// Name and summary of every child, in registry order.
    pub fn menu(&self) -> Vec<MenuEntry> {
        self.children()
            .iter()
            .map(|c| MenuEntry {
                name: c.name.clone(),
                summary: c.summary.clone(),
            })
            .collect()
    }
}

impl<C: SessionContext> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            NodeKind::Group(_) => "group",
            NodeKind::Leaf(_) => "leaf",
            NodeKind::BuiltIn => "builtin",
        };
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("kind", &kind)
            .field("children", &self.children())
            .field("completer", &self.completer.is_some())
            .finish()
    }
}
