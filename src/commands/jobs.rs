//! `jobs list` and `jobs kill`.

use super::args::ArgSpec;
use super::remote::report_usage;
use super::Spec;
use crate::session::Session;
use async_trait::async_trait;
use hookshell_core::{ActiveJobs, Handler, HandlerResult, SessionContext};
use serde_json::json;
use tracing::info;

pub fn commands() -> Vec<Spec> {
    vec![
        Spec::group("jobs", "Work with background jobs")
            .help(
                "Contains subcommands to work with background jobs. This includes listing and\n\
                 killing them.",
            )
            .child(
                Spec::leaf("list", "List all of the current jobs", ListJobs).help(
                    "Command: jobs list\n\
                     \n\
                     Usage: jobs list\n\
                     \n\
                     List the currently running jobs. Jobs are hooks or scripts that were\n\
                     submitted and have not yet been unloaded from the process. Examples of such\n\
                     jobs include the iOS method argument dumper and pasteboard monitor. To unload\n\
                     a job, the `jobs kill <job uuid>` command may be used.\n\
                     \n\
                     Examples:\n   \
                     jobs list",
                ),
            )
            .child(
                Spec::leaf("kill", "Kill a job. This unloads the script", KillJob::new())
                    .help(
                        "Command: jobs kill\n\
                         \n\
                         Usage: jobs kill <job uuid>\n\
                         \n\
                         Kills a running job identified by its UUID. When a job is killed, the agent\n\
                         unloads its hooks from the process' memory.\n\
                         \n\
                         Examples:\n   \
                         jobs kill 9415c4c7-2824-46a5-8539-d2d35ba2158c",
                    )
                    .completer(ActiveJobs),
            ),
    ]
}

struct ListJobs;

#[async_trait]
impl Handler<Session> for ListJobs {
    async fn call(&self, _args: &[String], session: &Session) -> HandlerResult {
        if session.jobs().is_empty() {
            session.console().print("No jobs are running");
            return Ok(());
        }
        let jobs = session.jobs().list();

        session
            .console()
            .print(format!("{:<36}  {:<19}  {}", "UUID", "Started", "Name"));
        for job in &jobs {
            session.console().print(format!(
                "{:<36}  {}  {}",
                job.id,
                job.started.format("%Y-%m-%d %H:%M:%S"),
                job.name
            ));
        }
        Ok(())
    }
}

struct KillJob {
    args: ArgSpec,
}

impl KillJob {
    fn new() -> Self {
        Self {
            args: ArgSpec::new("jobs kill <job uuid>").required("id"),
        }
    }
}

#[async_trait]
impl Handler<Session> for KillJob {
    async fn call(&self, args: &[String], session: &Session) -> HandlerResult {
        let params = match self.args.parse(args) {
            Ok(params) => params,
            Err(e) => {
                report_usage(session, self.args.usage(), &e);
                return Ok(());
            }
        };
        let id = params["id"].as_str().unwrap_or_default();

        let Some(job) = session.jobs().get(id) else {
            session.console().error(format!("No job matches '{id}'"));
            return Ok(());
        };

        session
            .call("jobs.unload", json!({ "handle": job.handle }))
            .await?;
        session.jobs().remove(&job.id);
        info!(
            job = %job.id,
            name = %job.name,
            remaining = session.jobs().len(),
            "Job killed"
        );
        session.console().print(format!("Job: {} - Stopped", job.id));
        Ok(())
    }
}
