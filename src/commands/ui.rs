//! Platform independent `ui` commands.

use super::args::ArgSpec;
use super::remote::RemoteCommand;
use super::Spec;

pub fn commands() -> Vec<Spec> {
    vec![
        Spec::group("ui", "Generic user interface commands")
            .help("Contains subcommands that interact with the applications user interface.")
            .child(
                Spec::leaf(
                    "alert",
                    "Show an alert message, optionally specifying the message to show",
                    RemoteCommand::new(
                        "ui.alert",
                        ArgSpec::new("ui alert (optional: \"<alert message>\")")
                            .optional_rest("message"),
                    ),
                )
                .help(
                    "Command: ui alert\n\
                     \n\
                     Usage: ui alert (optional: \"<alert message>\")\n\
                     \n\
                     Displays an alert popup on iOS devices, or a Toast message on Android devices.\n\
                     This is useful to demonstrate that the application was successfully hooked. Providing\n\
                     an alert message will display that message instead of the default.\n\
                     \n\
                     Examples:\n   \
                     ui alert\n   \
                     ui alert 'custom message!'",
                ),
            ),
    ]
}
