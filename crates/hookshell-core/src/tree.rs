//! The immutable command tree.
//!
//! Built once from a list of root-level [`CommandSpec`]s before the console
//! loop starts, then shared read-only (typically behind an `Arc`) by the
//! resolver, the completion provider and the help engine.

use crate::context::SessionContext;
use crate::error::{PathDisplay, TreeError};
use crate::node::{Node, NodeKind};
use crate::spec::CommandSpec;
use std::collections::HashSet;
use std::fmt;

/// Rooted, acyclic, immutable command hierarchy.
pub struct Tree<C: SessionContext> {
    root: Node<C>,
}

impl<C: SessionContext> fmt::Debug for Tree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

/// Where a walk over the tree stopped.
pub(crate) enum Walk<'t, C: SessionContext> {
    /// Reached a terminal node; tokens from `rest` on are its arguments.
    Terminal { path: Vec<&'t Node<C>>, rest: usize },
    /// Tokens ran out at a group (the root when `path` is empty).
    Group { path: Vec<&'t Node<C>> },
    /// The token at `index` matched no child of the group at `path`.
    Unknown { path: Vec<&'t Node<C>>, index: usize },
}

impl<C: SessionContext> Tree<C> {
    /// Validate static command declarations and build the tree.
    ///
    /// Any structural problem is returned as a [`TreeError`]; callers are
    /// expected to treat it as fatal.
    pub fn build(specs: Vec<CommandSpec<C>>) -> Result<Self, TreeError> {
        let children = build_children(specs, &[])?;
        if children.is_empty() {
            return Err(TreeError::EmptyGroup {
                path: PathDisplay(&[]).to_string(),
            });
        }

        Ok(Self {
            root: Node {
                name: String::new(),
                summary: String::new(),
                help: None,
                kind: NodeKind::Group(children),
                completer: None,
            },
        })
    }

    /// The unnamed root group.
    #[inline]
    pub fn root(&self) -> &Node<C> {
        &self.root
    }

    /// Look up the node at an exact path.
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node<C>> {
        path.iter()
            .try_fold(&self.root, |node, name| node.child(name.as_ref()))
    }

    /// Every path that ends at a leaf or built-in, in registry order.
    pub fn leaf_paths(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        collect_paths(&self.root, &mut Vec::new(), &mut out, Node::is_terminal);
        out
    }

    /// Every path that ends at a group, excluding the root.
    pub fn group_paths(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        collect_paths(&self.root, &mut Vec::new(), &mut out, Node::is_group);
        out
    }

    /// Walk tokens from the root, matching exactly one child per token.
    pub(crate) fn walk<'t, S: AsRef<str>>(&'t self, tokens: &[S]) -> Walk<'t, C> {
        let mut node = &self.root;
        let mut path = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            if node.is_terminal() {
                return Walk::Terminal { path, rest: index };
            }
            match node.child(token.as_ref()) {
                Some(child) => {
                    path.push(child);
                    node = child;
                }
                None => return Walk::Unknown { path, index },
            }
        }

        if node.is_terminal() {
            Walk::Terminal {
                path,
                rest: tokens.len(),
            }
        } else {
            Walk::Group { path }
        }
    }

    /// The last node of a walked path, or the root for an empty path.
    pub(crate) fn last_or_root<'t>(&'t self, path: &[&'t Node<C>]) -> &'t Node<C> {
        path.last().copied().unwrap_or(&self.root)
    }
}

pub(crate) fn path_names<C: SessionContext>(path: &[&Node<C>]) -> Vec<String> {
    path.iter().map(|n| n.name.clone()).collect()
}

fn collect_paths<C: SessionContext>(
    node: &Node<C>,
    prefix: &mut Vec<String>,
    out: &mut Vec<Vec<String>>,
    keep: fn(&Node<C>) -> bool,
) {
    for child in node.children() {
        prefix.push(child.name.clone());
        if keep(child) {
            out.push(prefix.clone());
        }
        collect_paths(child, prefix, out, keep);
        prefix.pop();
    }
}

fn build_children<C: SessionContext>(
    specs: Vec<CommandSpec<C>>,
    parent: &[String],
) -> Result<Vec<Node<C>>, TreeError> {
    let mut seen = HashSet::with_capacity(specs.len());
    let mut nodes = Vec::with_capacity(specs.len());

    for spec in specs {
        if spec.name.is_empty() || spec.name.chars().any(char::is_whitespace) {
            return Err(TreeError::InvalidName {
                parent: PathDisplay(parent).to_string(),
                name: spec.name,
            });
        }
        if !seen.insert(spec.name.clone()) {
            return Err(TreeError::DuplicateName {
                parent: PathDisplay(parent).to_string(),
                name: spec.name,
            });
        }
        nodes.push(build_node(spec, parent)?);
    }

    Ok(nodes)
}

fn build_node<C: SessionContext>(
    spec: CommandSpec<C>,
    parent: &[String],
) -> Result<Node<C>, TreeError> {
    let CommandSpec {
        name,
        summary,
        help,
        children,
        handler,
        builtin,
        completer,
    } = spec;

    let mut path = parent.to_vec();
    path.push(name.clone());
    let path_str = || PathDisplay(&path).to_string();

    let kind = match (handler, builtin, children.is_empty()) {
        (Some(_), true, _) | (Some(_), false, false) | (None, true, false) => {
            return Err(TreeError::ConflictingKind { path: path_str() });
        }
        (Some(handler), false, true) => NodeKind::Leaf(handler),
        (None, true, true) => NodeKind::BuiltIn,
        (None, false, true) => return Err(TreeError::EmptyGroup { path: path_str() }),
        (None, false, false) => {
            if completer.is_some() {
                return Err(TreeError::CompleterOnGroup { path: path_str() });
            }
            NodeKind::Group(build_children(children, &path)?)
        }
    };

    Ok(Node {
        name,
        summary,
        help,
        kind,
        completer,
    })
}
