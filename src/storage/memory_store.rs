use std::collections::BTreeMap;

use crate::domain::models::{AgentConfig, AgentSummary, DaemonStatus, RunRecord, Session, Skill};

/// In-memory backing store for the daemon control plane.
///
/// Every instance owns its collections outright, so two stores never share
/// state. Membership changes only through the access methods in the sibling
/// store modules; a fresh process starts from whatever the constructor
/// seeded. Lookups signal absence with `None`, deletions are idempotent.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    pub(super) status: DaemonStatus,
    pub(super) agent_summaries: Vec<AgentSummary>,
    pub(super) agent_configs: BTreeMap<String, AgentConfig>,
    pub(super) sessions: Vec<Session>,
    pub(super) skills: Vec<Skill>,
    pub(super) runs: Vec<RunRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(status: DaemonStatus) -> Self {
        Self {
            status,
            agent_summaries: Vec::new(),
            agent_configs: BTreeMap::new(),
            sessions: Vec::new(),
            skills: Vec::new(),
            runs: Vec::new(),
        }
    }

    #[must_use]
    pub fn status(&self) -> &DaemonStatus {
        &self.status
    }
}
