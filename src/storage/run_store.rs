use chrono::Utc;
use tracing::debug;

use crate::{
    domain::{
        error::DomainError,
        models::{RunRecord, RunStatus},
    },
    storage::MemoryStore,
};

impl MemoryStore {
    #[must_use]
    pub fn list_runs(&self) -> &[RunRecord] {
        &self.runs
    }

    /// Runs belonging to the session, in original insertion order. Empty for
    /// a session without runs (or an unknown session id).
    #[must_use]
    pub fn runs_for_session(&self, session_id: &str) -> Vec<&RunRecord> {
        self.runs
            .iter()
            .filter(|run| run.session_id == session_id)
            .collect()
    }

    /// Records a new execution attempt for an existing session. `started` is
    /// the only state a run can begin in.
    pub fn start_run(&mut self, session_id: &str) -> Result<RunRecord, DomainError> {
        if !self
            .sessions
            .iter()
            .any(|session| session.id == session_id)
        {
            return Err(DomainError::NotFound(format!(
                "session not found: {session_id}"
            )));
        }

        let run = RunRecord {
            run_id: format!("run-{}", uuid::Uuid::new_v4()),
            session_id: session_id.to_owned(),
            status: RunStatus::Started,
            timestamp: Utc::now(),
        };

        debug!("started run id={} session={session_id}", run.run_id);
        self.runs.push(run.clone());
        Ok(run)
    }

    /// Moves a run into one of the terminal states. A run that already
    /// reached a terminal state stays there.
    pub fn finish_run(
        &mut self,
        run_id: &str,
        status: RunStatus,
    ) -> Result<RunRecord, DomainError> {
        if !status.is_terminal() {
            return Err(DomainError::InvalidRequest(format!(
                "run cannot finish as {}",
                status.as_str()
            )));
        }

        let Some(run) = self.runs.iter_mut().find(|run| run.run_id == run_id) else {
            return Err(DomainError::NotFound(format!("run not found: {run_id}")));
        };

        if run.status.is_terminal() {
            return Err(DomainError::InvalidRequest(format!(
                "run already finished: {run_id}"
            )));
        }

        run.status = status;
        run.timestamp = Utc::now();
        debug!("finished run id={run_id} status={}", status.as_str());
        Ok(run.clone())
    }

    /// Explicit orphan cleanup for callers deleting a session; returns how
    /// many records were dropped.
    pub fn remove_runs_for_session(&mut self, session_id: &str) -> usize {
        let before = self.runs.len();
        self.runs.retain(|run| run.session_id != session_id);

        let removed = before - self.runs.len();
        if removed > 0 {
            debug!("removed {removed} runs session={session_id}");
        }
        removed
    }
}
