//! Built-in commands carried out by the console host itself.

use super::Spec;

pub const SHELL: &str = "!";
pub const RECONNECT: &str = "reconnect";
pub const EXIT: &str = "exit";

pub fn shell() -> Spec {
    Spec::builtin(SHELL, "Execute an Operating System command").help(
        "Command: !\n\
         \n\
         Usage: !<shell command>\n\
         \n\
         Executes operating system commands using the local shell.\n\
         Output sent to stdout is printed as regular output; output sent to\n\
         stderr, or a command exiting with an error, is printed as error output.\n\
         \n\
         Examples:\n   \
         !ls\n   \
         !uname -a",
    )
}

pub fn reconnect() -> Spec {
    Spec::builtin(RECONNECT, "Reconnect to the current device").help(
        "Command: reconnect\n\
         \n\
         Usage: reconnect\n\
         \n\
         Attempts to reconnect to the runtime agent of the current target.\n\
         The connection mode (ie: usb / network) can not be changed unless the console\n\
         is restarted.\n\
         \n\
         Examples:\n   \
         reconnect",
    )
}

pub fn exit() -> Spec {
    Spec::builtin(EXIT, "Exit")
}
