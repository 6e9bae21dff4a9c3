//! Interactive console host.
//!
//! [`Repl`] turns raw lines into commands: it tokenizes, answers `help`,
//! resolves against the registry, dispatches, and carries out the built-ins
//! the core hands back (`!`, `reconnect`, `exit`). Line editing and tab
//! completion come from `rustyline`, whose blocking editor drives the async
//! side through a runtime handle.

use crate::commands::host::{EXIT, RECONNECT, SHELL};
use crate::session::Session;
use anyhow::anyhow;
use hookshell_core::{
    dispatch, quote_word, split_line, split_partial, split_partial_with_start,
    CompletionProvider, DispatchOutcome, HelpView, HostRequest, LineError, ResolveError,
    SessionContext, Tree,
};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

const HELP: &str = "help";

/// Whether the loop keeps reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Repl {
    tree: Arc<Tree<Session>>,
    session: Arc<Session>,
    completion: CompletionProvider,
    prompt: String,
}

impl Repl {
    pub fn new(
        tree: Tree<Session>,
        session: Arc<Session>,
        completion: CompletionProvider,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            tree: Arc::new(tree),
            session,
            completion,
            prompt: prompt.into(),
        }
    }

    /// Run one line of input.
    pub async fn execute_line(&self, line: &str) -> Flow {
        let words = match tokenize(line) {
            Ok(words) => words,
            Err(e) => {
                self.session.console().error(e.to_string());
                return Flow::Continue;
            }
        };

        match words.split_first() {
            None => Flow::Continue,
            Some((first, rest)) if first == HELP => {
                self.show_help(rest);
                Flow::Continue
            }
            Some(_) => self.run(&words, line).await,
        }
    }

    /// Run the configured startup commands; stops early on `exit`.
    pub async fn run_startup(&self, commands: &[String]) -> Flow {
        for line in commands {
            info!(command = %line, "Running startup command");
            if self.execute_line(line).await == Flow::Exit {
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Completion candidates for the text left of the cursor.
    pub async fn complete(&self, line: &str) -> BTreeSet<String> {
        if line.trim_start().starts_with(SHELL) {
            return BTreeSet::new();
        }

        let mut tokens = split_partial(line);
        let after_help = tokens.len() > 1 && tokens[0] == HELP;
        if after_help {
            tokens.remove(0);
        }

        let mut candidates = self
            .completion
            .complete(&self.tree, &tokens, &*self.session)
            .await;
        if !after_help && tokens.len() == 1 && HELP.starts_with(tokens[0].as_str()) {
            candidates.insert(HELP.to_string());
        }
        candidates
    }

    async fn run(&self, words: &[String], line: &str) -> Flow {
        let resolution = match self.tree.resolve(words) {
            Ok(resolution) => resolution,
            Err(e @ ResolveError::IncompleteCommand { .. }) => {
                self.session
                    .console()
                    .print(HelpView::from_resolve_error(&e).to_string());
                return Flow::Continue;
            }
            Err(e) => {
                self.session.console().error(e.to_string());
                return Flow::Continue;
            }
        };

        match dispatch(resolution, &*self.session).await {
            DispatchOutcome::Host(request) => self.host(request, line).await,
            DispatchOutcome::Completed | DispatchOutcome::Failed(_) => Flow::Continue,
        }
    }

    fn show_help(&self, path: &[String]) {
        match self.tree.help(path) {
            Ok(view) => self.session.console().print(view.to_string()),
            Err(e) => self.session.console().error(e.to_string()),
        }
    }

    async fn host(&self, request: HostRequest, line: &str) -> Flow {
        match request.name.as_str() {
            EXIT => {
                info!("Exit requested");
                Flow::Exit
            }
            RECONNECT => {
                self.reconnect().await;
                Flow::Continue
            }
            SHELL => {
                let command = line
                    .trim_start()
                    .strip_prefix(SHELL)
                    .unwrap_or_default()
                    .trim();
                self.shell(command).await;
                Flow::Continue
            }
            other => {
                warn!(command = %other, "Unhandled built-in command");
                Flow::Continue
            }
        }
    }

    async fn reconnect(&self) {
        let console = self.session.console();
        if let Err(e) = self.session.reconnect().await {
            console.error(format!("Reconnect failed: {e}"));
            return;
        }
        console.print("Reconnected");
        if let Err(e) = self.session.refresh_directory().await {
            debug!(error = %e, "Could not refresh the working directory");
        }
    }

    async fn shell(&self, command: &str) {
        let console = self.session.console();
        if command.is_empty() {
            console.print("Usage: !<shell command>");
            return;
        }

        debug!(command = %command, "Running shell command");
        let output = match tokio::process::Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                console.error(format!("Unable to run shell: {e}"));
                return;
            }
        };

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            console.print(line);
        }
        for line in String::from_utf8_lossy(&output.stderr).lines() {
            console.error(line);
        }
        if !output.status.success() {
            console.error(format!("Command exited with {}", output.status));
        }
    }

    /// Read and run lines until `exit` or end of input.
    ///
    /// Blocks the calling thread; run it on a blocking thread and pass a
    /// handle to the runtime the session lives on.
    pub fn run_interactive(self: Arc<Self>, handle: Handle) -> anyhow::Result<()> {
        let mut editor: Editor<ConsoleHelper, DefaultHistory> =
            Editor::new().map_err(|e| anyhow!("failed to initialise line editor: {e}"))?;
        editor.set_helper(Some(ConsoleHelper {
            repl: Arc::clone(&self),
            handle: handle.clone(),
        }));

        loop {
            let line = match editor.readline(&self.prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(anyhow!("readline error: {e}")),
            };
            if line.trim().is_empty() {
                continue;
            }

            editor
                .add_history_entry(line.as_str())
                .map_err(|e| anyhow!("failed to record history: {e}"))?;
            if handle.block_on(self.execute_line(&line)) == Flow::Exit {
                break;
            }
        }

        Ok(())
    }
}

/// Split a line into words; a leading `!` is a word of its own so that
/// `!ls -la` reaches the shell built-in.
pub fn tokenize(line: &str) -> Result<Vec<String>, LineError> {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix(SHELL) {
        Some(rest) => {
            let offset = line.len() - rest.len();
            let mut words = vec![SHELL.to_string()];
            words.extend(split_line(rest).map_err(|e| match e {
                LineError::UnterminatedQuote { position } => LineError::UnterminatedQuote {
                    position: position + offset,
                },
            })?);
            Ok(words)
        }
        None => split_line(line),
    }
}

struct ConsoleHelper {
    repl: Arc<Repl>,
    handle: Handle,
}

impl rustyline::Helper for ConsoleHelper {}

impl rustyline::highlight::Highlighter for ConsoleHelper {}

impl rustyline::hint::Hinter for ConsoleHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl rustyline::validate::Validator for ConsoleHelper {}

impl Completer for ConsoleHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = &line[..pos];
        let (_, start) = split_partial_with_start(typed);

        let candidates = self.handle.block_on(self.repl.complete(typed));
        let pairs = candidates
            .into_iter()
            .map(|candidate| Pair {
                replacement: quote_word(&candidate),
                display: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}
