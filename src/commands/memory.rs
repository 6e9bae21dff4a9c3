//! `memory` commands: dumping, listing, searching and patching process memory.

use super::args::ArgSpec;
use super::remote::RemoteCommand;
use super::Spec;

pub fn commands() -> Vec<Spec> {
    vec![
        Spec::group("memory", "Work with the current processes memory")
            .help(
                "Contains subcommands to work with memory within the current process.\n\
                 Examples include commands to dump the current process memory, dump\n\
                 the memory of a specific loaded module, list exported modules or\n\
                 write raw bytes to memory addresses.",
            )
            .child(dump())
            .child(list())
            .child(
                Spec::leaf(
                    "search",
                    "Search for pattern in the applications memory",
                    RemoteCommand::new(
                        "memory.search",
                        ArgSpec::new("memory search \"<pattern>\" (optional: --string)")
                            .required("pattern")
                            .switch("--string"),
                    ),
                )
                .help(
                    "Command: memory search\n\
                     \n\
                     Usage: memory search \"<pattern>\" (optional: --string)\n\
                     \n\
                     Search the current processes' heap for a pattern. A pattern is represented by a\n\
                     byte sequence such as eb ff aa. It is also possible to specify wildcards such as\n\
                     eb ff ?? aa, indicating that you are looking for a pattern that starts with eb ff,\n\
                     has any other byte and then has aa.\n\
                     It is also possible to provide a raw string, which should be suffixed with the\n\
                     --string flag, indicating to the command that it should convert the string to\n\
                     bytes before executing the search. Wildcards are not supported in string searches.\n\
                     \n\
                     Examples:\n   \
                     memory search \"41 41 41 41\"\n   \
                     memory search \"41 ?? de ad\"\n   \
                     memory search \"deadbeef\" --string",
                ),
            )
            .child(
                Spec::leaf(
                    "write",
                    "Write raw bytes to a memory address. Use with caution!",
                    RemoteCommand::new(
                        "memory.write",
                        ArgSpec::new("memory write \"<address>\" \"<pattern>\" (optional: --string)")
                            .required("address")
                            .required("pattern")
                            .switch("--string"),
                    ),
                )
                .help(
                    "Command: memory write\n\
                     \n\
                     Usage: memory write \"<address>\" \"<pattern>\" (optional: --string)\n\
                     \n\
                     Write an arbitrary set of bytes to an address in memory. Using this command has a high\n\
                     chance of crashing the applications process if you attempt to write to addresses outside\n\
                     of the applications heap, or your bytes specified cause to go outside of some memory\n\
                     boundary.\n\
                     \n\
                     Examples:\n   \
                     memory write 0x117a2e347 \"ff 41 41 42\"",
                ),
            ),
    ]
}

fn dump() -> Spec {
    Spec::group("dump", "Commands to dump parts of the processes memory")
        .help("Contains subcommands to dump process memory")
        .child(
            Spec::leaf(
                "all",
                "Dump the entire memory of the current process",
                RemoteCommand::new(
                    "memory.dump_all",
                    ArgSpec::new("memory dump all <local destination>").required("destination"),
                ),
            )
            .help(
                "Command: memory dump all\n\
                 \n\
                 Usage: memory dump all <local destination>\n\
                 \n\
                 Dumps all of the current processes' memory that is marked as readable and\n\
                 writable (rw-) to a file specified by local destination.\n\
                 \n\
                 Examples:\n   \
                 memory dump all process_memory.dmp",
            ),
        )
        .child(
            Spec::leaf(
                "from_base",
                "Dump (x) bytes of memory from a base address to file",
                RemoteCommand::new(
                    "memory.dump_from_base",
                    ArgSpec::new(
                        "memory dump from_base <base address> <size to dump> <local destination>",
                    )
                    .required("base")
                    .required("size")
                    .required("destination"),
                ),
            )
            .help(
                "Command: memory dump from_base\n\
                 \n\
                 Usage: memory dump from_base <base address> <size to dump> <local destination>\n\
                 \n\
                 Dumps memory from within the current process from a base address, for a set number\n\
                 of bytes to a local file specified by local destination. For example addresses and\n\
                 sizes, the `memory list modules` command may be used.\n\
                 Specifying addresses or sizes that are outside of the current processes sandbox\n\
                 has a *high* chance of crashing the application. Use with caution.\n\
                 \n\
                 Examples:\n   \
                 memory dump from_base 0x10009c000 442368 main\n   \
                 memory dump from_base 0x10f88e000 548864 CoreAudio",
            ),
        )
}

fn list() -> Spec {
    Spec::group("list", "List memory related information about the current process")
        .help("Contains subcommands to list modules and module exports.")
        .child(
            Spec::leaf(
                "modules",
                "List loaded modules in the current process",
                RemoteCommand::new("memory.list_modules", ArgSpec::new("memory list modules")),
            )
            .help(
                "Command: memory list modules\n\
                 \n\
                 Usage: memory list modules\n\
                 \n\
                 List all of the modules loaded in the current process, detailing their base\n\
                 address, size and location on disk.\n\
                 \n\
                 Examples:\n   \
                 memory list modules",
            ),
        )
        .child(
            Spec::leaf(
                "exports",
                "List the exports of a module",
                RemoteCommand::new(
                    "memory.list_exports",
                    ArgSpec::new("memory list exports <module name>").required("module"),
                ),
            )
            .help(
                "Command: memory list exports\n\
                 \n\
                 Usage: memory list exports <module name>\n\
                 \n\
                 List exports in a specific loaded module. Exports found using this command\n\
                 can be hooked by name from an imported script.\n\
                 For a list of modules to list exports from the `memory list modules` command\n\
                 may be used.\n\
                 \n\
                 Examples:\n   \
                 memory list exports libsystem_configuration.dylib\n   \
                 memory list exports UserManagement",
            ),
        )
}
