//! Resolver: typed tokens to a terminal node plus leftover arguments.
//!
//! Matching is exact and case-sensitive, one child per token. Sibling names
//! are unique, so the first match is the only match. Prefix matching is the
//! completion provider's business, never the resolver's.

use crate::context::SessionContext;
use crate::error::ResolveError;
use crate::node::Node;
use crate::tree::{path_names, Tree, Walk};

/// A successful resolution: the matched node path and the arguments that
/// follow the terminal node, passed through unexamined.
pub struct Resolution<'t, C: SessionContext> {
    pub(crate) path: Vec<&'t Node<C>>,
    pub(crate) args: Vec<String>,
}

impl<'t, C: SessionContext> Resolution<'t, C> {
    /// Matched nodes from the first root child down to the terminal node.
    #[inline]
    pub fn path(&self) -> &[&'t Node<C>] {
        &self.path
    }

    /// The terminal node (leaf or built-in).
    #[inline]
    pub fn node(&self) -> &'t Node<C> {
        // Never empty: the root is a group, so at least one token matched.
        self.path[self.path.len() - 1]
    }

    #[inline]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Names along the matched path.
    pub fn names(&self) -> Vec<String> {
        path_names(&self.path)
    }

    /// Space-joined command path, e.g. `sqlite execute query`.
    pub fn command(&self) -> String {
        self.names().join(" ")
    }
}

impl<C: SessionContext> std::fmt::Debug for Resolution<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolution")
            .field("command", &self.command())
            .field("args", &self.args)
            .finish()
    }
}

impl<C: SessionContext> Tree<C> {
    /// Resolve a tokenized command line.
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Resolution<'_, C>, ResolveError> {
        match self.walk(tokens) {
            Walk::Terminal { path, rest } => Ok(Resolution {
                path,
                args: tokens[rest..]
                    .iter()
                    .map(|t| t.as_ref().to_string())
                    .collect(),
            }),
            Walk::Group { path } => Err(ResolveError::IncompleteCommand {
                matched: path_names(&path),
                continuations: self.last_or_root(&path).menu(),
            }),
            Walk::Unknown { path, index } => Err(ResolveError::UnknownCommand {
                matched: path_names(&path),
                token: tokens[index].as_ref().to_string(),
                alternatives: self.last_or_root(&path).menu(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{sample_tree, TestContext};
    use crate::{ResolveError, Tree};

    fn tree() -> Tree<TestContext> {
        sample_tree()
    }

    #[test]
    fn resolves_leaf_with_arguments() {
        let tree = tree();
        let res = tree
            .resolve(&["sqlite", "execute", "query", "select", "*", "from", "data;"])
            .expect("resolves");
        assert_eq!(res.command(), "sqlite execute query");
        assert_eq!(res.args(), ["select", "*", "from", "data;"]);
        assert_eq!(res.node().name(), "query");
        assert_eq!(res.path().len(), 3);
    }

    #[test]
    fn leaf_without_arguments() {
        let tree = tree();
        let res = tree.resolve(&["jobs", "kill"]).expect("resolves");
        assert_eq!(res.command(), "jobs kill");
        assert!(res.args().is_empty());
    }

    #[test]
    fn arguments_are_not_matched_against_the_tree() {
        let tree = tree();
        // "list" is a sibling of "kill" but after a leaf it is just an argument.
        let res = tree.resolve(&["jobs", "kill", "list"]).expect("resolves");
        assert_eq!(res.args(), ["list"]);
    }

    #[test]
    fn builtin_resolves_like_a_leaf() {
        let tree = tree();
        let res = tree.resolve(&["!", "uname", "-a"]).expect("resolves");
        assert!(res.node().is_builtin());
        assert_eq!(res.into_args(), vec!["uname".to_string(), "-a".to_string()]);
    }

    #[test]
    fn unknown_token_reports_siblings() {
        let tree = tree();
        let err = tree
            .resolve(&["memory", "list", "nosuchthing"])
            .unwrap_err();
        match &err {
            ResolveError::UnknownCommand { matched, token, .. } => {
                assert_eq!(matched, &["memory", "list"]);
                assert_eq!(token, "nosuchthing");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.alternative_names(), vec!["modules", "exports"]);
    }

    #[test]
    fn group_without_more_tokens_is_incomplete() {
        let tree = tree();
        let err = tree.resolve(&["ios", "hooking", "watch"]).unwrap_err();
        assert!(matches!(err, ResolveError::IncompleteCommand { .. }));
        assert_eq!(err.matched(), ["ios", "hooking", "watch"]);
        assert_eq!(err.alternative_names(), vec!["class", "method"]);
    }

    #[test]
    fn empty_input_is_incomplete_at_root() {
        let tree = tree();
        let err = tree.resolve::<&str>(&[]).unwrap_err();
        assert!(err.matched().is_empty());
        assert_eq!(
            err.alternative_names(),
            tree.root()
                .children()
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn matching_is_case_sensitive_and_exact() {
        let tree = tree();
        assert!(tree.resolve(&["Jobs", "list"]).is_err());
        assert!(tree.resolve(&["job", "list"]).is_err());
        assert!(tree.resolve(&["jobs", "lis"]).is_err());
    }
}
