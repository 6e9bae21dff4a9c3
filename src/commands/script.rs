//! `import`: load a local script into the target as a job.

use super::args::ArgSpec;
use super::remote::{expand_home, report_usage, start_job};
use super::Spec;
use crate::session::Session;
use async_trait::async_trait;
use hookshell_core::{Handler, HandlerResult, SessionContext};
use serde_json::json;

/// Job name used when `import` is not given one.
pub const DEFAULT_JOB_NAME: &str = "user-script";

pub fn commands() -> Vec<Spec> {
    vec![
        Spec::leaf("import", "Import a hook script from a local path", ImportScript::new()).help(
            "Command: import\n\
             \n\
             Usage: import <path to local script> (optional: <job name>)\n\
             \n\
             Imports a script from a file on the local filesystem and executes it as a job.\n\
             To 'unload' the script, the job that was started should be killed.\n\
             You can list all of the current jobs using the `jobs list` command. If no name was\n\
             specified for your job, a generic name of 'user-script' will be used for the\n\
             job started as a result of the import.\n\
             \n\
             Examples:\n   \
             import ~/home/myscript.js\n   \
             import ~/home/hooks/custom.js custom-hook-name",
        ),
    ]
}

struct ImportScript {
    args: ArgSpec,
}

impl ImportScript {
    fn new() -> Self {
        Self {
            args: ArgSpec::new("import <path to local script> (optional: <job name>)")
                .required("path")
                .optional("name"),
        }
    }
}

#[async_trait]
impl Handler<Session> for ImportScript {
    async fn call(&self, args: &[String], session: &Session) -> HandlerResult {
        let params = match self.args.parse(args) {
            Ok(params) => params,
            Err(e) => {
                report_usage(session, self.args.usage(), &e);
                return Ok(());
            }
        };

        let path = expand_home(params["path"].as_str().unwrap_or_default());
        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_JOB_NAME)
            .to_string();

        let source = match tokio::fs::read_to_string(&path).await {
            Ok(source) => source,
            Err(e) => {
                session
                    .console()
                    .error(format!("Unable to read {}: {e}", path.display()));
                return Ok(());
            }
        };

        let result = session
            .call("script.load", json!({ "name": name, "source": source }))
            .await?;
        start_job(session, &name, &result)
    }
}
