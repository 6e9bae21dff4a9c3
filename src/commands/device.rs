//! Environment commands: `env` and `frida`.

use super::args::ArgSpec;
use super::remote::RemoteCommand;
use super::Spec;

pub fn commands() -> Vec<Spec> {
    vec![
        Spec::leaf(
            "env",
            "Print information about the environment",
            RemoteCommand::new("env.get", ArgSpec::new("env")),
        )
        .help(
            "Command: env\n\
             \n\
             Usage: env\n\
             \n\
             Display information about the current environment.\n\
             On iOS devices, this includes the location of the current applications bundle,\n\
             the Documents/ and Library/ directory.\n\
             \n\
             Examples:\n   \
             env",
        ),
        Spec::leaf(
            "frida",
            "Get information about the runtime agent",
            RemoteCommand::new("runtime.info", ArgSpec::new("frida")),
        )
        .help(
            "Command: frida\n\
             \n\
             Usage: frida\n\
             \n\
             Displays information about the runtime agent. This includes the agent version,\n\
             process architecture and platform.\n\
             \n\
             Examples:\n   \
             frida",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::testing::ScriptedAgent;
    use crate::session::Session;
    use hookshell_core::{Console, SessionContext, Stream, Tree};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn env_renders_the_agent_object() {
        let agent = Arc::new(ScriptedAgent::new());
        agent.respond("env.get", json!({"BundlePath": "/app"}));
        let session = Session::new(agent, Console::capturing(), Duration::from_secs(1));
        let tree = Tree::build(commands()).unwrap();

        let res = tree.resolve(&["env"]).unwrap();
        assert!(hookshell_core::dispatch(res, &session).await.is_completed());
        assert_eq!(
            session.console().captured_text(Stream::Out),
            "{\n  \"BundlePath\": \"/app\"\n}"
        );
    }

    #[tokio::test]
    async fn frida_takes_no_arguments() {
        let agent = Arc::new(ScriptedAgent::new());
        let session = Session::new(agent.clone(), Console::capturing(), Duration::from_secs(1));
        let tree = Tree::build(commands()).unwrap();

        let res = tree.resolve(&["frida", "extra"]).unwrap();
        assert!(hookshell_core::dispatch(res, &session).await.is_completed());
        assert!(agent.calls().is_empty());
        assert_eq!(session.console().captured_text(Stream::Out), "Usage: frida");
    }
}
