use async_trait::async_trait;
use hookshell_core::{
    ActiveJobs, CommandSpec, CompletionError, Console, DynamicCompleter, Handler, HandlerResult,
    SessionContext, Tree,
};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

/// Session with a fake remote directory tree and a capturing console.
pub struct TestSession {
    directory: RwLock<Option<String>>,
    listings: RwLock<HashMap<String, Vec<String>>>,
    jobs: RwLock<Vec<String>>,
    console: Console,
}

impl TestSession {
    pub fn new() -> Self {
        let mut listings = HashMap::new();
        listings.insert(
            "/var/mobile".to_string(),
            vec!["Containers".to_string(), "Documents".to_string(), "Library".to_string()],
        );
        listings.insert(
            "/var/mobile/Library".to_string(),
            vec!["Caches".to_string(), "Cookies".to_string(), "Preferences".to_string()],
        );
        Self {
            directory: RwLock::new(Some("/var/mobile".to_string())),
            listings: RwLock::new(listings),
            jobs: RwLock::new(Vec::new()),
            console: Console::capturing(),
        }
    }

    /// A session whose runtime is gone.
    pub fn detached() -> Self {
        let session = Self::new();
        *session.directory.write() = None;
        session
    }

    pub fn change_directory(&self, path: &str) {
        *self.directory.write() = Some(path.to_string());
    }

    pub fn set_jobs(&self, ids: &[&str]) {
        *self.jobs.write() = ids.iter().map(|s| s.to_string()).collect();
    }

    fn listing(&self, path: &str) -> Option<Vec<String>> {
        self.listings.read().get(path).cloned()
    }
}

impl SessionContext for TestSession {
    fn current_directory(&self) -> Option<String> {
        self.directory.read().clone()
    }

    fn active_jobs(&self) -> Vec<String> {
        self.jobs.read().clone()
    }

    fn console(&self) -> &Console {
        &self.console
    }
}

/// Completes with the entries of the current remote directory.
pub struct Subdirectories;

#[async_trait]
impl DynamicCompleter<TestSession> for Subdirectories {
    async fn candidates(&self, ctx: &TestSession) -> Result<Vec<String>, CompletionError> {
        let cwd = ctx
            .current_directory()
            .ok_or(CompletionError::SessionUnavailable)?;
        ctx.listing(&cwd)
            .ok_or_else(|| CompletionError::Failed(format!("cannot list {cwd}")))
    }
}

/// Handler that records every argument list it receives.
#[derive(Clone, Default)]
pub struct Recorder {
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
}

#[async_trait]
impl Handler<TestSession> for Recorder {
    async fn call(&self, args: &[String], _ctx: &TestSession) -> HandlerResult {
        self.calls.lock().push(args.to_vec());
        Ok(())
    }
}

/// Handler enforcing `jobs kill <uuid>` the way real handlers do: usage
/// problems go to the console and the call still succeeds.
struct KillJob;

#[async_trait]
impl Handler<TestSession> for KillJob {
    async fn call(&self, args: &[String], ctx: &TestSession) -> HandlerResult {
        if args.is_empty() {
            ctx.console().print("Usage: jobs kill <uuid>");
        }
        Ok(())
    }
}

type Spec = CommandSpec<TestSession>;

/// A registry shaped like the console's, with every leaf recording into
/// the returned [`Recorder`].
pub fn registry() -> (Tree<TestSession>, Recorder) {
    let rec = Recorder::default();
    let leaf = |name: &str, summary: &str| Spec::leaf(name, summary, rec.clone());

    let tree = Tree::build(vec![
        Spec::builtin("!", "Execute an Operating System command"),
        Spec::builtin("reconnect", "Reconnect to the current device"),
        Spec::builtin("exit", "Exit"),
        leaf("cd", "Change the current working directory").completer(Subdirectories),
        leaf("ls", "List files in the current working directory"),
        Spec::group("pwd", "Work with the current directory")
            .child(leaf("print", "Print the current working directory")),
        Spec::group("memory", "Work with the current processes memory")
            .child(
                Spec::group("dump", "Dump the current processes memory")
                    .child(leaf("all", "Dump the entire memory of the current process"))
                    .child(leaf("from_base", "Dump (x) bytes of memory from a base address")),
            )
            .child(
                Spec::group("list", "List memory related information")
                    .child(leaf("modules", "List loaded modules in the current process"))
                    .child(leaf("exports", "List the exports of a module")),
            )
            .child(leaf("search", "Search for pattern in the applications memory")),
        Spec::group("sqlite", "Work with SQLite databases")
            .child(leaf("status", "Check the status of the SQLite connection"))
            .child(
                Spec::group("execute", "Execute queries on the cached SQLite database")
                    .child(leaf("schema", "Get the database schema"))
                    .child(leaf("query", "Execute a query")),
            ),
        Spec::group("jobs", "Work with jobs")
            .child(leaf("list", "List all of the current jobs"))
            .child(
                Spec::leaf("kill", "Kill a job", KillJob)
                    .help("Usage: jobs kill <uuid>")
                    .completer(ActiveJobs),
            ),
        Spec::group("ios", "Commands specific to iOS").child(
            Spec::group("hooking", "Commands used for hooking methods in iOS")
                .child(
                    Spec::group("list", "Lists various bits of information")
                        .child(leaf("classes", "List classes in the current application"))
                        .child(leaf("class_methods", "List the methods in a class")),
                )
                .child(
                    Spec::group("watch", "Watch invocations of classes and methods")
                        .child(leaf("class", "Hook all methods in a class"))
                        .child(leaf("method", "Hook a specific method")),
                ),
        ),
    ])
    .expect("registry is valid");

    (tree, rec)
}
