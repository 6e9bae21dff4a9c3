//! Resolver behaviour over a registry shaped like the console's.

mod common;

use common::registry;
use hookshell_core::{split_line, ResolveError, SessionContext};
use proptest::prelude::*;

fn resolve_line(line: &str) -> Result<(String, Vec<String>), ResolveError> {
    let (tree, _) = registry();
    let words = split_line(line).expect("tokenizes");
    let res = tree.resolve(&words)?;
    Ok((res.command(), res.into_args()))
}

#[test]
fn sqlite_query_keeps_sql_words_as_arguments() {
    let (command, args) = resolve_line("sqlite execute query select * from data;").unwrap();
    assert_eq!(command, "sqlite execute query");
    assert_eq!(args, ["select", "*", "from", "data;"]);
}

#[test]
fn memory_dump_from_base_takes_three_arguments() {
    let (command, args) =
        resolve_line("memory dump from_base 0x10009c000 442368 main").unwrap();
    assert_eq!(command, "memory dump from_base");
    assert_eq!(args, ["0x10009c000", "442368", "main"]);
}

#[tokio::test]
async fn jobs_kill_without_id_reaches_handler_which_reports_usage() {
    let (tree, _) = registry();
    let session = common::TestSession::new();

    let res = tree.resolve(&["jobs", "kill"]).expect("resolves");
    assert_eq!(res.command(), "jobs kill");
    assert!(res.args().is_empty());

    let outcome = hookshell_core::dispatch(res, &session).await;
    assert!(outcome.is_completed());
    assert_eq!(
        session.console().captured_text(hookshell_core::Stream::Out),
        "Usage: jobs kill <uuid>"
    );
}

#[test]
fn unknown_subcommand_lists_siblings() {
    let err = resolve_line("memory list nosuchthing").unwrap_err();
    assert!(matches!(err, ResolveError::UnknownCommand { ref token, .. } if token == "nosuchthing"));
    assert_eq!(err.alternative_names(), ["modules", "exports"]);
}

#[test]
fn group_alone_is_incomplete() {
    let err = resolve_line("ios hooking watch").unwrap_err();
    assert!(matches!(err, ResolveError::IncompleteCommand { .. }));
    assert_eq!(err.alternative_names(), ["class", "method"]);
}

#[test]
fn every_group_path_is_incomplete_with_exactly_its_children() {
    let (tree, _) = registry();
    for path in tree.group_paths() {
        let err = tree.resolve(&path).unwrap_err();
        let node = tree.find(&path).expect("group exists");
        let children: Vec<&str> = node.children().iter().map(|c| c.name()).collect();
        match err {
            ResolveError::IncompleteCommand { ref matched, .. } => assert_eq!(matched, &path),
            other => panic!("{path:?} gave {other:?}"),
        }
        assert_eq!(err.alternative_names(), children);
    }
}

#[test]
fn unknown_first_token_lists_root_children() {
    let (tree, _) = registry();
    let err = tree.resolve(&["frobnicate"]).unwrap_err();
    let root: Vec<&str> = tree.root().children().iter().map(|c| c.name()).collect();
    assert!(err.matched().is_empty());
    assert_eq!(err.alternative_names(), root);
    assert!(err.to_string().starts_with("unknown command 'frobnicate'. Valid commands: !, "));
}

#[test]
fn leaf_paths_cover_builtins_and_nested_leaves() {
    let (tree, _) = registry();
    let paths = tree.leaf_paths();
    assert!(paths.contains(&vec!["exit".to_string()]));
    assert!(paths.contains(&vec!["pwd".to_string(), "print".to_string()]));
    assert!(paths.contains(&vec![
        "ios".to_string(),
        "hooking".to_string(),
        "list".to_string(),
        "class_methods".to_string(),
    ]));
}

#[test]
fn every_leaf_path_passes_extra_words_through() {
    let (tree, _) = registry();
    for path in tree.leaf_paths() {
        let mut words = path.clone();
        words.extend(["extra1".to_string(), "extra2".to_string()]);
        let res = tree.resolve(&words).expect("leaf resolves");
        assert_eq!(res.names(), path);
        assert_eq!(res.args(), ["extra1", "extra2"]);
    }
}

proptest! {
    #[test]
    fn any_arguments_after_a_leaf_are_untouched(
        index in 0usize..64,
        extras in proptest::collection::vec("[a-z0-9*;!_-]{1,10}", 0..6),
    ) {
        let (tree, _) = registry();
        let paths = tree.leaf_paths();
        let path = &paths[index % paths.len()];

        let mut words = path.clone();
        words.extend(extras.iter().cloned());
        let res = tree.resolve(&words).expect("leaf resolves");
        prop_assert_eq!(&res.names(), path);
        prop_assert_eq!(res.args(), extras.as_slice());
    }
}
