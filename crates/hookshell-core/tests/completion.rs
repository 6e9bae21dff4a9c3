//! Completion against live session state.

mod common;

use async_trait::async_trait;
use common::{registry, TestSession};
use hookshell_core::{
    split_partial, CommandSpec, CompletionError, CompletionProvider, DynamicCompleter, Tree,
};
use std::collections::BTreeSet;
use std::time::Duration;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

async fn complete(tree: &Tree<TestSession>, session: &TestSession, line: &str) -> BTreeSet<String> {
    CompletionProvider::default()
        .complete(tree, &split_partial(line), session)
        .await
}

#[tokio::test]
async fn jobs_kill_offers_job_ids_at_call_time() {
    let (tree, _) = registry();
    let session = TestSession::new();

    assert!(complete(&tree, &session, "jobs kill ").await.is_empty());

    session.set_jobs(&["4b1c", "9e2f"]);
    assert_eq!(complete(&tree, &session, "jobs kill ").await, set(&["4b1c", "9e2f"]));

    session.set_jobs(&["9e2f"]);
    assert_eq!(complete(&tree, &session, "jobs kill ").await, set(&["9e2f"]));
}

#[tokio::test]
async fn static_children_are_prefix_filtered() {
    let (tree, _) = registry();
    let session = TestSession::new();

    assert_eq!(complete(&tree, &session, "memory ").await, set(&["dump", "list", "search"]));
    assert_eq!(complete(&tree, &session, "memory d").await, set(&["dump"]));
    assert_eq!(
        complete(&tree, &session, "ios hooking list cl").await,
        set(&["classes", "class_methods"])
    );
    assert!(complete(&tree, &session, "memory x").await.is_empty());
}

#[tokio::test]
async fn completion_is_idempotent_for_unchanged_state() {
    let (tree, _) = registry();
    let session = TestSession::new();

    let first = complete(&tree, &session, "cd ").await;
    let second = complete(&tree, &session, "cd ").await;
    assert_eq!(first, second);
    assert_eq!(first, set(&["Containers", "Documents", "Library"]));
}

#[tokio::test]
async fn directory_change_is_reflected_immediately() {
    let (tree, _) = registry();
    let session = TestSession::new();

    assert_eq!(complete(&tree, &session, "cd L").await, set(&["Library"]));

    session.change_directory("/var/mobile/Library");
    assert_eq!(complete(&tree, &session, "cd C").await, set(&["Caches", "Cookies"]));
}

#[tokio::test]
async fn unavailable_session_degrades_to_nothing() {
    let (tree, _) = registry();
    let session = TestSession::detached();
    assert!(complete(&tree, &session, "cd ").await.is_empty());

    // Static completion does not need the session.
    assert_eq!(complete(&tree, &session, "pw").await, set(&["pwd"]));
}

#[tokio::test]
async fn unlistable_directory_degrades_to_nothing() {
    let (tree, _) = registry();
    let session = TestSession::new();
    session.change_directory("/nowhere");
    assert!(complete(&tree, &session, "cd ").await.is_empty());
}

#[tokio::test]
async fn arguments_after_leaf_still_complete_from_the_leaf() {
    let (tree, _) = registry();
    let session = TestSession::new();
    session.set_jobs(&["4b1c"]);
    assert_eq!(complete(&tree, &session, "jobs kill 1 4").await, set(&["4b1c"]));
}

struct Stalled;

#[async_trait]
impl DynamicCompleter<TestSession> for Stalled {
    async fn candidates(&self, _ctx: &TestSession) -> Result<Vec<String>, CompletionError> {
        std::future::pending::<()>().await;
        Ok(Vec::new())
    }
}

#[tokio::test(start_paused = true)]
async fn stalled_completer_never_blocks_past_the_budget() {
    let tree = Tree::build(vec![CommandSpec::builtin("stall", "Never answers").completer(Stalled)])
        .expect("valid tree");
    let session = TestSession::new();
    let provider = CompletionProvider::new(Duration::from_millis(250));

    let started = tokio::time::Instant::now();
    let got = provider.complete(&tree, &["stall", ""], &session).await;
    assert!(got.is_empty());
    let waited = started.elapsed();
    assert!(waited >= Duration::from_millis(250) && waited < Duration::from_secs(1));

    // The tree is untouched and usable afterwards.
    let got = provider.complete(&tree, &["st"], &session).await;
    assert_eq!(got, set(&["stall"]));
}
