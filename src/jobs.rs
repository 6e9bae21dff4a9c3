//! Registry of background jobs.
//!
//! A job is a hook or script the agent keeps running after the command
//! that started it returned (method watchers, pasteboard monitors, imported
//! scripts). The registry only tracks them; stopping one goes through the
//! agent using the handle it returned when the job was started.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// One running job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    /// What started it, e.g. `ios hooking watch class` or `user-script`.
    pub name: String,
    /// Opaque handle the agent uses to unload the job.
    pub handle: String,
    pub started: DateTime<Utc>,
}

/// Concurrent map of job id to job.
#[derive(Debug, Default)]
pub struct JobRegistry {
    jobs: DashMap<String, Job>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new job and return its id.
    pub fn register(&self, name: impl Into<String>, handle: impl Into<String>) -> String {
        let id = Uuid::new_v4().to_string();
        self.jobs.insert(
            id.clone(),
            Job {
                id: id.clone(),
                name: name.into(),
                handle: handle.into(),
                started: Utc::now(),
            },
        );
        id
    }

    pub fn get(&self, id: &str) -> Option<Job> {
        self.jobs.get(id).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, id: &str) -> Option<Job> {
        self.jobs.remove(id).map(|(_, job)| job)
    }

    /// Job ids in sorted order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.jobs.iter().map(|entry| entry.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Snapshot of every job, oldest first.
    pub fn list(&self) -> Vec<Job> {
        let mut jobs: Vec<Job> = self.jobs.iter().map(|entry| entry.value().clone()).collect();
        jobs.sort_by(|a, b| a.started.cmp(&b.started).then_with(|| a.id.cmp(&b.id)));
        jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
