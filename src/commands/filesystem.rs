//! Remote filesystem commands: `cd`, `ls`, `pwd print`, `upload`, `download`.

use super::args::{ArgSpec, UsageError};
use super::completion::RemoteEntries;
use super::remote::{RemoteCommand, report_usage};
use super::Spec;
use crate::session::Session;
use async_trait::async_trait;
use hookshell_core::{Handler, HandlerError, HandlerResult, SessionContext};

const CD_USAGE: &str = "cd <directory on remote device>";
const LS_USAGE: &str = "ls (optional: <directory on remote device>)";

pub fn commands() -> Vec<Spec> {
    vec![
        Spec::leaf("cd", "Change the current working directory", ChangeDirectory)
            .help(
                "Command: cd\n\
                 \n\
                 Usage: cd <directory on remote device>\n\
                 \n\
                 Changes the current working directory on the device.\n\
                 Many commands are aware of the current working directory. An example\n\
                 of this is the sqlite command, which connects to a file in the current\n\
                 path, or to a file specified with a full path relative to root (/).\n\
                 For more directories that are applicable to the current app, inspect the\n\
                 output of the `env` command.\n\
                 \n\
                 Examples:\n   \
                 cd Library/Caches\n   \
                 cd Preferences\n   \
                 cd /",
            )
            .completer(RemoteEntries::directories()),
        Spec::leaf("ls", "List files in the current working directory", ListDirectory).help(
            "Command: ls\n\
             \n\
             Usage: ls (optional: <directory on remote device>)\n\
             \n\
             Display the contents of a directory on the mobile device. The output details\n\
             the type, permissions and size of each entry. If no directory is specified,\n\
             the current working directory is listed.\n\
             \n\
             Examples:\n   \
             ls Library/Caches\n   \
             ls /\n   \
             ls",
        ),
        Spec::group("pwd", "Work with the current directory")
            .help(
                "Contains subcommands to work with the current working directory\n\
                 on the device.",
            )
            .child(
                Spec::leaf(
                    "print",
                    "Print the current working directory on the device",
                    PrintDirectory,
                )
                .help(
                    "Command: pwd print\n\
                     \n\
                     Usage: pwd print\n\
                     \n\
                     Display the current working directory.\n\
                     \n\
                     Examples:\n   \
                     pwd print",
                ),
            ),
        Spec::leaf(
            "upload",
            "Upload a file",
            RemoteCommand::new(
                "filesystem.upload",
                ArgSpec::new("upload <local source file> <remote destination>")
                    .required("source")
                    .required("destination"),
            )
            .local_input("source")
            .remote_path("destination"),
        )
        .help(
            "Command: upload\n\
             \n\
             Usage: upload <local source file> <remote destination>\n\
             \n\
             Upload a file from the local filesystem to the remote filesystem.\n\
             If a full path is not specified for the remote destination, the current\n\
             working directory is assumed as the relative directory for the upload\n\
             destination.\n\
             If the file already exists on the remote filesystem, it will be overridden.\n\
             \n\
             Examples:\n   \
             upload test.sqlite Documents/Preferences/test.sqlite",
        ),
        Spec::leaf(
            "download",
            "Download a file",
            RemoteCommand::new(
                "filesystem.download",
                ArgSpec::new("download <remote location> <local destination>")
                    .required("source")
                    .required("destination"),
            )
            .remote_path("source"),
        )
        .help(
            "Command: download\n\
             \n\
             Usage: download <remote location> <local destination>\n\
             \n\
             Download a file from a location on the mobile device, to a local destination.\n\
             \n\
             Examples:\n   \
             download Documents/Preferences/test.sqlite test.sqlite",
        )
        .completer(RemoteEntries::files()),
    ]
}

struct ChangeDirectory;

#[async_trait]
impl Handler<Session> for ChangeDirectory {
    async fn call(&self, args: &[String], session: &Session) -> HandlerResult {
        let target = match args {
            [target] => target,
            [] => {
                report_usage(session, CD_USAGE, &UsageError::Missing("directory"));
                return Ok(());
            }
            [_, extra, ..] => {
                report_usage(session, CD_USAGE, &UsageError::Unexpected(extra.clone()));
                return Ok(());
            }
        };

        let path = session.resolve_path(target)?;
        if session.current_directory().as_deref() == Some(path.as_str()) {
            session.console().print(&path);
            return Ok(());
        }

        // The agent confirms the directory exists by listing it.
        match session.list_directory(&path).await {
            Ok(_) => {
                session.set_directory(path.clone());
                session.console().print(&path);
                Ok(())
            }
            Err(HandlerError::Remote(_)) => {
                session.console().error(format!("Invalid path: `{path}`"));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

struct ListDirectory;

#[async_trait]
impl Handler<Session> for ListDirectory {
    async fn call(&self, args: &[String], session: &Session) -> HandlerResult {
        let path = match args {
            [] => session
                .current_directory()
                .ok_or(HandlerError::SessionUnavailable)?,
            [dir] => session.resolve_path(dir)?,
            [_, extra, ..] => {
                report_usage(session, LS_USAGE, &UsageError::Unexpected(extra.clone()));
                return Ok(());
            }
        };

        let mut entries = session.list_directory(&path).await?;
        entries.sort_by(|a, b| b.directory.cmp(&a.directory).then_with(|| a.name.cmp(&b.name)));

        session.console().print(format!(
            "{:<9}  {:<10}  {:>10}  {}",
            "Type", "Perms", "Size", "Name"
        ));
        for entry in &entries {
            let kind = if entry.directory { "Directory" } else { "File" };
            let size = entry.size.map(|s| s.to_string()).unwrap_or_else(|| "-".into());
            session.console().print(format!(
                "{:<9}  {:<10}  {:>10}  {}",
                kind,
                entry.permissions.as_deref().unwrap_or("-"),
                size,
                entry.name
            ));
        }
        session.console().print(format!("\n{} entries in {path}", entries.len()));
        Ok(())
    }
}

struct PrintDirectory;

#[async_trait]
impl Handler<Session> for PrintDirectory {
    async fn call(&self, args: &[String], session: &Session) -> HandlerResult {
        if let Some(extra) = args.first() {
            report_usage(session, "pwd print", &UsageError::Unexpected(extra.clone()));
            return Ok(());
        }
        match session.current_directory() {
            Some(cwd) => {
                session.console().print(format!("Current directory: {cwd}"));
                Ok(())
            }
            None => Err(HandlerError::SessionUnavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::testing::ScriptedAgent;
    use crate::agent::DetachedAgent;
    use hookshell_core::{Console, Stream};
    use std::sync::Arc;
    use std::time::Duration;

    fn session(agent: Arc<dyn crate::agent::Agent>) -> Session {
        Session::new(agent, Console::capturing(), Duration::from_secs(5))
            .with_directory(Some("/var/mobile".into()))
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn cd_relative_then_parent() {
        let s = session(Arc::new(ScriptedAgent::new()));

        ChangeDirectory.call(&words(&["Library"]), &s).await.unwrap();
        assert_eq!(s.current_directory().as_deref(), Some("/var/mobile/Library"));

        ChangeDirectory.call(&words(&[".."]), &s).await.unwrap();
        assert_eq!(s.current_directory().as_deref(), Some("/var/mobile"));

        ChangeDirectory.call(&words(&["/"]), &s).await.unwrap();
        assert_eq!(s.current_directory().as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn cd_to_missing_directory_keeps_cwd() {
        let s = session(Arc::new(ScriptedAgent::new()));
        ChangeDirectory.call(&words(&["Nope"]), &s).await.unwrap();
        assert_eq!(s.current_directory().as_deref(), Some("/var/mobile"));
        assert_eq!(
            s.console().captured_text(Stream::Err),
            "Invalid path: `/var/mobile/Nope`"
        );
    }

    #[tokio::test]
    async fn cd_without_argument_prints_usage() {
        let s = session(Arc::new(ScriptedAgent::new()));
        ChangeDirectory.call(&[], &s).await.unwrap();
        assert_eq!(
            s.console().captured_text(Stream::Out),
            "Usage: cd <directory on remote device>"
        );
    }

    #[tokio::test]
    async fn cd_while_detached_is_session_unavailable() {
        let s = session(Arc::new(DetachedAgent));
        let err = ChangeDirectory.call(&words(&["Library"]), &s).await.unwrap_err();
        assert!(matches!(err, HandlerError::SessionUnavailable));
    }

    #[tokio::test]
    async fn ls_lists_directories_first() {
        let s = session(Arc::new(ScriptedAgent::new()));
        ListDirectory.call(&[], &s).await.unwrap();
        let out = s.console().captured_text(Stream::Out);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("Type"));
        assert!(lines[1].starts_with("Directory") && lines[1].ends_with("Documents"));
        assert!(lines[3].starts_with("File") && lines[3].ends_with("cache.sqlite"));
        assert!(out.ends_with("3 entries in /var/mobile"));
    }

    #[tokio::test]
    async fn pwd_print_reports_cwd() {
        let s = session(Arc::new(ScriptedAgent::new()));
        PrintDirectory.call(&[], &s).await.unwrap();
        assert_eq!(
            s.console().captured_text(Stream::Out),
            "Current directory: /var/mobile"
        );
    }
}
