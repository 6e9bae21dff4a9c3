//! hookshell - interactive console for a runtime instrumentation agent
//!
//! Routes typed commands through a nested registry to handlers that talk to
//! an agent running inside the target application.

mod agent;
mod commands;
mod config;
mod jobs;
mod repl;
mod session;

use crate::agent::DetachedAgent;
use crate::config::Config;
use crate::repl::{Flow, Repl};
use crate::session::Session;
use hookshell_core::{CompletionProvider, Console, SessionContext};
use std::sync::Arc;
use std::any::Any;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "hookshell.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr and stay quiet by default so they do not
    // interleave with command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
    install_panic_hook();

    // Load configuration; only the default file may be missing
    let explicit = std::env::args().nth(1);
    let config_path = explicit.clone().unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let loaded = match explicit {
        Some(_) => Config::load(&config_path),
        None => Config::load_or_default(&config_path),
    };
    let config = loaded.map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = config::validation::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        return Err(anyhow::anyhow!(
            "Refusing to start with {} configuration error(s). See messages above.",
            errors.len()
        ));
    }

    let registry = commands::build_registry().map_err(|e| {
        error!(error = %e, "Command registry is malformed");
        e
    })?;
    info!(
        commands = registry.leaf_paths().len(),
        "Command registry built"
    );

    // Without an agent transport every remote command reports that no
    // session is attached.
    let session = Session::new(
        Arc::new(DetachedAgent),
        Console::Stdout,
        config.session.call_timeout(),
    )
    .with_directory(config.session.initial_directory.clone());
    info!(
        attached = session.agent().is_attached(),
        directory = ?session.current_directory(),
        "Session ready"
    );

    let repl = Arc::new(Repl::new(
        registry,
        Arc::new(session),
        CompletionProvider::new(config.completion.budget()),
        config.console.prompt.clone(),
    ));

    if repl.run_startup(&config.console.startup_commands).await == Flow::Exit {
        info!("Exit requested by a startup command");
        return Ok(());
    }

    let handle = tokio::runtime::Handle::current();
    let interactive = Arc::clone(&repl);
    tokio::task::spawn_blocking(move || interactive.run_interactive(handle)).await??;

    info!("Console closed");
    Ok(())
}

/// Send panic reports to the log instead of printing over the prompt.
///
/// Handler and completer panics are caught and reported by the core; a
/// panic that escapes still ends `main` with an error.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(ToString::to_string)
            .unwrap_or_default();
        debug!(%location, message = %panic_message(info.payload()), "Panic");
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
