//! `sqlite` commands.
//!
//! The agent keeps a cached copy of the connected database; queries run
//! against the copy until `sqlite sync` writes it back to the device.

use super::args::ArgSpec;
use super::completion::RemoteEntries;
use super::remote::RemoteCommand;
use super::Spec;

pub fn commands() -> Vec<Spec> {
    vec![
        Spec::group("sqlite", "Work with SQLite databases")
            .help(
                "Contains subcommands to work with SQLite databases on the remote device.\n\
                 Connecting to a SQLite database will result in a copy of the database from\n\
                 the remote device being cached. All queries that are run will be run on the\n\
                 cached database. If the changes need to be available on the remote device,\n\
                 the database should be `sync`'ed back.",
            )
            .child(
                Spec::leaf(
                    "status",
                    "Show the status of the SQLite database connection",
                    RemoteCommand::new("sqlite.status", ArgSpec::new("sqlite status")),
                )
                .help(
                    "Command: sqlite status\n\
                     \n\
                     Usage: sqlite status\n\
                     \n\
                     Check the status of the SQLite connection. Outputs the cached location\n\
                     as well as the remote source it was cached from.\n\
                     \n\
                     Examples:\n   \
                     sqlite status",
                ),
            )
            .child(
                Spec::leaf(
                    "connect",
                    "Connect to a SQLite database (file)",
                    RemoteCommand::new(
                        "sqlite.connect",
                        ArgSpec::new("sqlite connect <remote sqlite database location>")
                            .required("path"),
                    )
                    .remote_path("path"),
                )
                .help(
                    "Command: sqlite connect\n\
                     \n\
                     Usage: sqlite connect <remote sqlite database location>\n\
                     \n\
                     Connect to a SQLite database on the remote device. The connection process caches\n\
                     a copy of the remote database file. The file is then validated to make sure that\n\
                     it is a SQLite3 database file. Once considered a valid database file, the\n\
                     connection is considered complete.\n\
                     The `sqlite status` command will show details about the connection once successful.\n\
                     \n\
                     Examples:\n   \
                     sqlite connect Preferences/settings.sqlite\n   \
                     sqlite connect credentials.sqlite",
                )
                .completer(RemoteEntries::files()),
            )
            .child(
                Spec::leaf(
                    "disconnect",
                    "Disconnect from a SQLite database (file)",
                    RemoteCommand::new("sqlite.disconnect", ArgSpec::new("sqlite disconnect")),
                )
                .help(
                    "Command: sqlite disconnect\n\
                     \n\
                     Usage: sqlite disconnect\n\
                     \n\
                     Disconnect from the currently connected SQLite database file. This command will clean\n\
                     the cached version of the database file. If you made changes you want to save,\n\
                     run the `sqlite sync` command before disconnecting.\n\
                     \n\
                     Examples:\n   \
                     sqlite disconnect",
                ),
            )
            .child(execute())
            .child(
                Spec::leaf(
                    "sync",
                    "Sync the cached SQLite database with the one on the device",
                    RemoteCommand::new("sqlite.sync", ArgSpec::new("sqlite sync")),
                )
                .help(
                    "Command: sqlite sync\n\
                     \n\
                     Usage: sqlite sync\n\
                     \n\
                     Sync the cached SQLite database with the remote database.\n\
                     Any changes made since the last `sqlite connect` will be available on the\n\
                     device post-sync.\n\
                     \n\
                     Examples:\n   \
                     sqlite sync",
                ),
            ),
    ]
}

fn execute() -> Spec {
    Spec::group("execute", "Execute SQLite statements on the connected database")
        .help("Contains subcommands to execute queries against a connected SQLite database.")
        .child(
            Spec::leaf(
                "schema",
                "Dump the schema of the connected database",
                RemoteCommand::new("sqlite.schema", ArgSpec::new("sqlite execute schema")),
            )
            .help(
                "Command: sqlite execute schema\n\
                 \n\
                 Usage: sqlite execute schema\n\
                 \n\
                 Get the database schema for the currently connected SQLite database.\n\
                 \n\
                 Examples:\n   \
                 sqlite execute schema",
            ),
        )
        .child(
            Spec::leaf(
                "query",
                "Execute a query on the connected SQLite database",
                RemoteCommand::new(
                    "sqlite.query",
                    ArgSpec::new("sqlite execute query <sql query>").rest("query"),
                ),
            )
            .help(
                "Command: sqlite execute query\n\
                 \n\
                 Usage: sqlite execute query <sql query>\n\
                 \n\
                 Execute a query against the cached copy of the connected SQLite database.\n\
                 If your changes need to be effective on the device, execute the `sqlite sync`\n\
                 command to upload the modified database back to the device.\n\
                 \n\
                 Examples:\n   \
                 sqlite execute query select * from data;\n   \
                 sqlite execute query delete from data;",
            ),
        )
}
