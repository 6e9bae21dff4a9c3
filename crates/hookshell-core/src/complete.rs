//! Completion provider.
//!
//! Static candidates come from child names; dynamic candidates come from a
//! [`DynamicCompleter`] attached to a terminal node and are computed fresh on
//! every request, since remote state (working directory, jobs) changes under
//! our feet.
//!
//! # Time budget
//!
//! A dynamic completer may query the remote runtime. It runs under a hard
//! time budget; if it errors, panics or overruns, the request degrades to an
//! empty candidate set. The abandoned future is dropped and nothing it
//! touched is shared with the tree.

use crate::context::SessionContext;
use crate::error::CompletionError;
use crate::tree::{Tree, Walk};
use async_trait::async_trait;
use futures_util::FutureExt;
use std::collections::BTreeSet;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tracing::debug;

/// Default budget for one dynamic completer invocation.
pub const DEFAULT_COMPLETION_BUDGET: Duration = Duration::from_millis(250);

/// Produces live argument candidates for a terminal command.
///
/// Must be safe to call repeatedly and must not mutate the tree.
#[async_trait]
pub trait DynamicCompleter<C: SessionContext>: Send + Sync {
    async fn candidates(&self, ctx: &C) -> Result<Vec<String>, CompletionError>;
}

/// Completes with the identifiers of the currently active jobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveJobs;

#[async_trait]
impl<C: SessionContext> DynamicCompleter<C> for ActiveJobs {
    async fn candidates(&self, ctx: &C) -> Result<Vec<String>, CompletionError> {
        Ok(ctx.active_jobs())
    }
}

/// Computes completion candidates for a partially typed line.
#[derive(Debug, Clone, Copy)]
pub struct CompletionProvider {
    budget: Duration,
}

impl Default for CompletionProvider {
    fn default() -> Self {
        Self::new(DEFAULT_COMPLETION_BUDGET)
    }
}

impl CompletionProvider {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    #[inline]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Candidates for `tokens`, whose last element is the partial word
    /// being typed (empty right after a space).
    ///
    /// Never fails: anything that goes wrong yields an empty set.
    pub async fn complete<C, S>(&self, tree: &Tree<C>, tokens: &[S], ctx: &C) -> BTreeSet<String>
    where
        C: SessionContext,
        S: AsRef<str>,
    {
        let (partial, typed) = match tokens.split_last() {
            Some((last, typed)) => (last.as_ref(), typed),
            None => ("", tokens),
        };

        match tree.walk(typed) {
            Walk::Group { path } => tree
                .last_or_root(&path)
                .children()
                .iter()
                .map(|c| c.name())
                .filter(|name| name.starts_with(partial))
                .map(str::to_string)
                .collect(),
            Walk::Terminal { path, .. } => {
                let node = tree.last_or_root(&path);
                let Some(completer) = node.completer() else {
                    return BTreeSet::new();
                };
                self.run_completer(node.name(), completer.as_ref(), ctx)
                    .await
                    .into_iter()
                    .filter(|candidate| candidate.starts_with(partial))
                    .collect()
            }
            Walk::Unknown { .. } => BTreeSet::new(),
        }
    }

    async fn run_completer<C: SessionContext>(
        &self,
        command: &str,
        completer: &dyn DynamicCompleter<C>,
        ctx: &C,
    ) -> Vec<String> {
        let call = AssertUnwindSafe(completer.candidates(ctx)).catch_unwind();

        match tokio::time::timeout(self.budget, call).await {
            Ok(Ok(Ok(candidates))) => candidates,
            Ok(Ok(Err(e))) => {
                debug!(command = %command, error = %e, "Dynamic completion failed");
                Vec::new()
            }
            Ok(Err(_panic)) => {
                debug!(command = %command, "Dynamic completer panicked");
                Vec::new()
            }
            Err(_elapsed) => {
                debug!(command = %command, budget = ?self.budget, "Dynamic completion timed out");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_tree, TestContext};
    use crate::{CommandSpec, Tree};

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn root_candidates_filtered_by_prefix() {
        let tree = sample_tree();
        let ctx = TestContext::default();
        let provider = CompletionProvider::default();

        let all = provider.complete(&tree, &[""], &ctx).await;
        assert_eq!(all.len(), tree.root().children().len());

        let m = provider.complete(&tree, &["m"], &ctx).await;
        assert_eq!(m, set(&["memory"]));
    }

    #[tokio::test]
    async fn empty_token_list_completes_root() {
        let tree = sample_tree();
        let ctx = TestContext::default();
        let none: [&str; 0] = [];
        let all = CompletionProvider::default().complete(&tree, &none, &ctx).await;
        assert!(all.contains("jobs"));
    }

    #[tokio::test]
    async fn nested_group_candidates() {
        let tree = sample_tree();
        let ctx = TestContext::default();
        let provider = CompletionProvider::default();

        assert_eq!(
            provider.complete(&tree, &["ios", "hooking", "watch", ""], &ctx).await,
            set(&["class", "method"])
        );
        assert_eq!(
            provider.complete(&tree, &["jobs", "ki"], &ctx).await,
            set(&["kill"])
        );
    }

    #[tokio::test]
    async fn job_ids_after_trailing_space() {
        let tree = sample_tree();
        let ctx = TestContext::default().with_jobs(&["a1", "b2"]);
        let got = CompletionProvider::default()
            .complete(&tree, &["jobs", "kill", ""], &ctx)
            .await;
        assert_eq!(got, set(&["a1", "b2"]));

        let got = CompletionProvider::default()
            .complete(&tree, &["jobs", "kill", "b"], &ctx)
            .await;
        assert_eq!(got, set(&["b2"]));
    }

    #[tokio::test]
    async fn leaf_without_completer_offers_nothing() {
        let tree = sample_tree();
        let ctx = TestContext::default();
        let got = CompletionProvider::default()
            .complete(&tree, &["jobs", "list", ""], &ctx)
            .await;
        assert!(got.is_empty());
    }

    #[tokio::test]
    async fn unknown_path_offers_nothing() {
        let tree = sample_tree();
        let ctx = TestContext::default();
        let got = CompletionProvider::default()
            .complete(&tree, &["nosuch", ""], &ctx)
            .await;
        assert!(got.is_empty());
    }

    struct Failing;

    #[async_trait]
    impl DynamicCompleter<TestContext> for Failing {
        async fn candidates(&self, _ctx: &TestContext) -> Result<Vec<String>, CompletionError> {
            Err(CompletionError::SessionUnavailable)
        }
    }

    struct Panicking;

    #[async_trait]
    impl DynamicCompleter<TestContext> for Panicking {
        async fn candidates(&self, _ctx: &TestContext) -> Result<Vec<String>, CompletionError> {
            panic!("completer blew up")
        }
    }

    struct Slow;

    #[async_trait]
    impl DynamicCompleter<TestContext> for Slow {
        async fn candidates(&self, _ctx: &TestContext) -> Result<Vec<String>, CompletionError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(vec!["never".to_string()])
        }
    }

    fn degraded_tree() -> Tree<TestContext> {
        Tree::build(vec![
            CommandSpec::builtin("failing", "Fails").completer(Failing),
            CommandSpec::builtin("panicking", "Panics").completer(Panicking),
            CommandSpec::builtin("slow", "Hangs").completer(Slow),
        ])
        .expect("valid tree")
    }

    #[tokio::test]
    async fn failing_completer_degrades_to_empty() {
        let tree = degraded_tree();
        let ctx = TestContext::default();
        let provider = CompletionProvider::default();
        assert!(provider.complete(&tree, &["failing", ""], &ctx).await.is_empty());
        assert!(provider.complete(&tree, &["panicking", ""], &ctx).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_completer_is_abandoned_after_budget() {
        let tree = degraded_tree();
        let ctx = TestContext::default();
        let provider = CompletionProvider::new(Duration::from_millis(50));

        let started = tokio::time::Instant::now();
        let got = provider.complete(&tree, &["slow", ""], &ctx).await;
        assert!(got.is_empty());
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
