//! `ios` commands: keychain, plists, user defaults, cookies, UI, hooking,
//! pasteboard and SSL pinning.

use super::args::ArgSpec;
use super::completion::RemoteEntries;
use super::remote::RemoteCommand;
use super::Spec;

pub fn commands() -> Vec<Spec> {
    vec![
        Spec::group("ios", "Commands specific to iOS")
            .help(
                "Contains subcommands to work with iOS specific features. These include features\n\
                 such as keychain dumping, reading plists and bypassing SSL pinning.",
            )
            .children([
                keychain(),
                plist(),
                nsuserdefaults(),
                cookies(),
                ui(),
                hooking(),
                pasteboard(),
                sslpinning(),
            ]),
    ]
}

fn keychain() -> Spec {
    Spec::group("keychain", "Work with the iOS keychain")
        .help("Contains subcommands to work with the iOS keychain.")
        .child(
            Spec::leaf(
                "dump",
                "Dump the keychain for the current app",
                RemoteCommand::new(
                    "ios.keychain.dump",
                    ArgSpec::new("ios keychain dump (optional: --json <filename>)").option("--json"),
                ),
            )
            .help(
                "Command: ios keychain dump\n\
                 \n\
                 Usage: ios keychain dump (optional: --json <filename>)\n\
                 \n\
                 Extracts the keychain items for the current process. This is achieved by iterating\n\
                 over the keychain type classes available in iOS and populating a search dictionary\n\
                 with them. This dictionary is then used as a query to SecItemCopyMatching() and the\n\
                 results parsed.\n\
                 Providing a filename with the --json flag will dump all of the keychain attributes\n\
                 to the file specified for later inspection.\n\
                 \n\
                 Examples:\n   \
                 ios keychain dump\n   \
                 ios keychain dump --json keychain.json",
            ),
        )
}

fn plist() -> Spec {
    Spec::group("plist", "Work with iOS Plists")
        .help("Contains subcommands to work with iOS Plist entries.")
        .child(
            Spec::leaf(
                "cat",
                "Cat a plist",
                RemoteCommand::new(
                    "ios.plist.cat",
                    ArgSpec::new("ios plist cat <remote plist filename>").required("path"),
                )
                .remote_path("path"),
            )
            .help(
                "Command: ios plist cat\n\
                 \n\
                 Usage: ios plist cat <remote plist filename>\n\
                 \n\
                 Parses and echoes a plist file on the remote iOS device to screen. If this\n\
                 parsing is not sufficient, one can always `download` the plist file itself\n\
                 for parsing using other tools.\n\
                 \n\
                 Examples:\n   \
                 ios plist cat Info.plist",
            )
            .completer(RemoteEntries::files()),
        )
}

fn nsuserdefaults() -> Spec {
    Spec::group("nsuserdefaults", "Work with NSUserDefaults")
        .help("Contains subcommands to work with the iOS NSUserDefaults class.")
        .child(
            Spec::leaf(
                "get",
                "Get all of the entries",
                RemoteCommand::new("ios.nsuserdefaults.get", ArgSpec::new("ios nsuserdefaults get")),
            )
            .help(
                "Command: ios nsuserdefaults get\n\
                 \n\
                 Usage: ios nsuserdefaults get\n\
                 \n\
                 Queries the applications NSUserDefaults class for all of the entries in\n\
                 the current application bundle and echoes the entries to screen.\n\
                 \n\
                 Examples:\n   \
                 ios nsuserdefaults get",
            ),
        )
}

fn cookies() -> Spec {
    Spec::group("cookies", "Work with shared cookies")
        .help("Contains subcommands to work with iOS shared cookies.")
        .child(
            Spec::leaf(
                "get",
                "Get the current apps shared cookies",
                RemoteCommand::new("ios.cookies.get", ArgSpec::new("ios cookies get")),
            )
            .help(
                "Command: ios cookies get\n\
                 \n\
                 Usage: ios cookies get\n\
                 \n\
                 Queries iOS's NSHTTPCookieStorage class, extracting cookie values out of the\n\
                 sharedHTTPCookieStorage. Various URL fetching methods use the\n\
                 sharedHTTPCookieStorage to store cookie data. This information may be useful\n\
                 to get session cookies for web services to reuse in other tools/browsers.\n\
                 \n\
                 Examples:\n   \
                 ios cookies get",
            ),
        )
}

fn ui() -> Spec {
    Spec::group("ui", "iOS user interface commands")
        .help(
            "Contains subcommands to interact with the iOS user interface. This includes commands\n\
             to dump the current view hierarchy as well as bypassing screens that require TouchID\n\
             to proceed.",
        )
        .child(
            Spec::leaf(
                "alert",
                "Show an alert message, optionally specifying the message to show",
                RemoteCommand::new(
                    "ios.ui.alert",
                    ArgSpec::new("ios ui alert (optional: \"<alert message>\")")
                        .optional_rest("message"),
                ),
            )
            .help(
                "Command: ios ui alert\n\
                 \n\
                 Usage: ios ui alert (optional: \"<alert message>\")\n\
                 \n\
                 Displays an alert popup on an iOS device. A message to display may be specified\n\
                 optionally.\n\
                 \n\
                 Examples:\n   \
                 ios ui alert\n   \
                 ios ui alert 'my message'",
            ),
        )
        .child(
            Spec::leaf(
                "dump",
                "Dump the serialized UI",
                RemoteCommand::new("ios.ui.dump", ArgSpec::new("ios ui dump")),
            )
            .help(
                "Command: ios ui dump\n\
                 \n\
                 Usage: ios ui dump\n\
                 \n\
                 Dumps the current, serialized user interface. This is useful to see which values\n\
                 or classes may be attached to UI elements.\n\
                 \n\
                 Examples:\n   \
                 ios ui dump",
            ),
        )
        .child(
            Spec::leaf(
                "screenshot",
                "Screenshot the current UIView",
                RemoteCommand::new(
                    "ios.ui.screenshot",
                    ArgSpec::new("ios ui screenshot <local png destination>").required("destination"),
                ),
            )
            .help(
                "Command: ios ui screenshot\n\
                 \n\
                 Usage: ios ui screenshot <local png destination>\n\
                 \n\
                 Screenshots the current foregrounded UIView and saves it as a PNG locally.\n\
                 \n\
                 Examples:\n   \
                 ios ui screenshot screenshot.png",
            ),
        )
        .child(
            Spec::leaf(
                "touchid_bypass",
                "Hook the iOS TouchID class and respond with successful fingerprints",
                RemoteCommand::new("ios.ui.touchid_bypass", ArgSpec::new("ios ui touchid_bypass"))
                    .starts_job("ios ui touchid_bypass"),
            )
            .help(
                "Command: ios ui touchid_bypass\n\
                 \n\
                 Usage: ios ui touchid_bypass\n\
                 \n\
                 Hooks into the -[LAContext evaluatePolicy:localizedReason:reply:] selector and\n\
                 replies with a successful message from the operating system when a touchID prompt\n\
                 is dismissed. This is useful in cases where the application relies solely on the\n\
                 operating system to tell it if a fingerprint read was successful or not.\n\
                 Note: This does *not* bypass cases where TouchID is needed to decrypt a keychain\n\
                 entry, simply because the actual data itself is not stored in the keychain but\n\
                 instead lives in the Secure Enclave. The keychain simply contains a token to the\n\
                 data itself.\n\
                 \n\
                 Examples:\n   \
                 ios ui touchid_bypass",
            ),
        )
}

fn hooking() -> Spec {
    Spec::group("hooking", "Commands used for hooking methods in iOS")
        .help(
            "Contains subcommands helpful when developing custom hooks. This includes discovery\n\
             of Objective-C classes and methods in those classes, as well as dumping method\n\
             arguments as they are called in real time.",
        )
        .child(
            Spec::group("list", "Lists various bits of information")
                .help(
                    "Contains subcommands to list various bits of information, such as Objective-C\n\
                     classes and their methods.",
                )
                .child(
                    Spec::leaf(
                        "classes",
                        "List classes available in the current application",
                        RemoteCommand::new(
                            "ios.hooking.list_classes",
                            ArgSpec::new("ios hooking list classes (optional: --ignore-native)")
                                .switch("--ignore-native"),
                        ),
                    )
                    .help(
                        "Command: ios hooking list classes\n\
                         \n\
                         Usage: ios hooking list classes (optional: --ignore-native)\n\
                         \n\
                         Lists all of the classes in the current Objective-C runtime. Specifying\n\
                         the --ignore-native flag, filters out classes with common prefixes such as\n\
                         'NS' and 'CF'.\n\
                         \n\
                         Examples:\n   \
                         ios hooking list classes\n   \
                         ios hooking list classes --ignore-native",
                    ),
                )
                .child(Spec::leaf(
                    "class_methods",
                    "List the methods in a class",
                    RemoteCommand::new(
                        "ios.hooking.list_class_methods",
                        ArgSpec::new(
                            "ios hooking list class_methods <class name> (optional: --include-parents)",
                        )
                        .required("class")
                        .switch("--include-parents"),
                    ),
                )),
        )
        .child(
            Spec::group("dump", "Dumps various bits of information")
                .help(
                    "Contains subcommands to dump various bits of information, such as realtime\n\
                     method arguments used when a specific method was invoked.",
                )
                .child(
                    Spec::leaf(
                        "method_args",
                        "Attempt to dump arguments for a given method",
                        RemoteCommand::new(
                            "ios.hooking.dump_method_args",
                            ArgSpec::new(
                                "ios hooking dump method_args <+/-> <class_name> <method_name>",
                            )
                            .required("kind")
                            .required("class")
                            .required("method"),
                        )
                        .starts_job("ios hooking dump method_args"),
                    )
                    .help(
                        "Command: ios hooking dump method_args\n\
                         \n\
                         Usage: ios hooking dump method_args <+/-> <class_name> <method_name>\n\
                         \n\
                         Dumps method invocations in real time, including the arguments used at the\n\
                         time. This command tries its best to convert the arguments themselves into\n\
                         readable data, but sometimes the pointers used are to data structures not\n\
                         easily converted to readable formats.\n\
                         \n\
                         When issuing this command, a few bits of information is needed to build up\n\
                         the full class that should be hooked. The needed information includes:\n   \
                         - A '+' or '-' indicating a class or instance method\n   \
                         - The ClassName in question\n   \
                         - The method name *including* the argument separators (':')\n\
                         \n\
                         All of the information you need can be sourced with the `ios hooking list *`\n\
                         commands, or using the 'class-dump' tool.\n\
                         \n\
                         Examples:\n   \
                         ios hooking dump method_args + KeychainDataManager find:\n   \
                         ios hooking dump method_args - PinnedNSURLSessionStarwarsApi \
                         getJsonResponseFrom:onSuccess:onFailure:",
                    ),
                ),
        )
        .child(
            Spec::group("watch", "Watch invocations of classes and methods")
                .help("Contains subcommands to watch for method invocations on Objective-C classes.")
                .child(
                    Spec::leaf(
                        "class",
                        "Hook all methods in a class and report on invocations",
                        RemoteCommand::new(
                            "ios.hooking.watch_class",
                            ArgSpec::new(
                                "ios hooking watch class <class_name> (optional: --include-parents)",
                            )
                            .required("class")
                            .switch("--include-parents"),
                        )
                        .starts_job("ios hooking watch class"),
                    )
                    .help(
                        "Command: ios hooking watch class\n\
                         \n\
                         Usage: ios hooking watch class <class_name> (optional: --include-parents)\n\
                         \n\
                         Hooks into all of the methods available in the Objective-C class specified\n\
                         by class_name and reports on invocations of any methods contained within.\n\
                         If the --include-parents flag is specified, all methods inherited from a\n\
                         parent class will also be hooked and reported on.\n\
                         \n\
                         Examples:\n   \
                         ios hooking watch class KeychainDataManager\n   \
                         ios hooking watch class PinnedNSURLSessionStarwarsApi --include-parents",
                    ),
                )
                .child(
                    Spec::leaf(
                        "method",
                        "Hook a specific method and report on invocations",
                        RemoteCommand::new(
                            "ios.hooking.watch_method",
                            ArgSpec::new("ios hooking watch method \"<full class & selector>\"")
                                .required("selector"),
                        )
                        .starts_job("ios hooking watch method"),
                    )
                    .help(
                        "Command: ios hooking watch method\n\
                         \n\
                         Usage: ios hooking watch method \"<full class & selector>\"\n\
                         \n\
                         Hooks into a specified Objective-C method and reports on invocations.\n\
                         A full class and method is expected, including whether its an instance\n\
                         or class method.\n\
                         \n\
                         Examples:\n   \
                         ios hooking watch method \"+[KeychainDataManager update:forKey:]\"\n   \
                         ios hooking watch method \"-[PinnedNSURLSessionStarwarsApi \
                         getJsonResponseFrom:onSuccess:onFailure:]\"",
                    ),
                ),
        )
}

fn pasteboard() -> Spec {
    Spec::group("pasteboard", "Work with the iOS pasteboard")
        .help("Contains subcommands to work with the iOS pasteboard.")
        .child(
            Spec::leaf(
                "monitor",
                "Monitor the iOS pasteboard",
                RemoteCommand::new("ios.pasteboard.monitor", ArgSpec::new("ios pasteboard monitor"))
                    .starts_job("ios pasteboard monitor"),
            )
            .help(
                "Command: ios pasteboard monitor\n\
                 \n\
                 Usage: ios pasteboard monitor\n\
                 \n\
                 Hooks into the iOS UIPasteboard class and polls the generalPasteboard every\n\
                 5 seconds for data. If new data is found, different from the previous poll,\n\
                 that data will be dumped to screen.\n\
                 \n\
                 Examples:\n   \
                 ios pasteboard monitor",
            ),
        )
}

fn sslpinning() -> Spec {
    Spec::group("sslpinning", "Work with iOS SSL pinning")
        .help("Contains subcommands to work with iOS SSL pinning related calls.")
        .child(
            Spec::leaf(
                "disable",
                "Attempt to disable SSL pinning in various iOS libraries/classes",
                RemoteCommand::new("ios.sslpinning.disable", ArgSpec::new("ios sslpinning disable"))
                    .starts_job("ios sslpinning disable"),
            )
            .help(
                "Command: ios sslpinning disable\n\
                 \n\
                 Usage: ios sslpinning disable\n\
                 \n\
                 Attempts to disable SSL Pinning on iOS devices. This is achieved by hooking\n\
                 into methods commonly used by Frameworks and Libraries such as AFNetworking,\n\
                 NSURLSession and the now deprecated NSURLConnection.\n\
                 This command also implements the bypass techniques used in the well-known\n\
                 SSL-Killswitch2 app.\n\
                 \n\
                 If this method does not disable the applications SSL pinning implementation,\n\
                 then it may still be possible to bypass it via 'helper' methods commonly\n\
                 used by developers to help when testing in development / staging environments.\n\
                 Be on the lookout for classes / methods that relate to pinning that may simply\n\
                 return a BOOL value.\n\
                 \n\
                 Examples:\n   \
                 ios sslpinning disable",
            ),
        )
}
