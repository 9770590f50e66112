use tracing::debug;

use crate::{
    domain::models::{AgentConfig, AgentSummary},
    storage::MemoryStore,
};

impl MemoryStore {
    #[must_use]
    pub fn list_agents(&self) -> &[AgentSummary] {
        &self.agent_summaries
    }

    #[must_use]
    pub fn agent_config(&self, name: &str) -> Option<&AgentConfig> {
        self.agent_configs.get(name)
    }

    /// Inserts or replaces an agent configuration and keeps the listing
    /// projection in sync with it.
    pub fn upsert_agent(&mut self, config: AgentConfig) {
        let summary = AgentSummary {
            name: config.name.clone(),
            display_name: config.display_name.clone(),
            has_prompt: !config.system_prompt.trim().is_empty(),
            has_config: true,
        };

        match self
            .agent_summaries
            .iter_mut()
            .find(|entry| entry.name == config.name)
        {
            Some(existing) => *existing = summary,
            None => self.agent_summaries.push(summary),
        }

        debug!("upserted agent name={}", config.name);
        self.agent_configs.insert(config.name.clone(), config);
    }

    /// Removes the agent's summary and configuration. Sessions owned by the
    /// agent are left in place.
    pub fn remove_agent(&mut self, name: &str) -> bool {
        let summaries_before = self.agent_summaries.len();
        self.agent_summaries.retain(|entry| entry.name != name);
        let removed_summary = self.agent_summaries.len() < summaries_before;
        let removed_config = self.agent_configs.remove(name).is_some();

        let removed = removed_summary || removed_config;
        if removed {
            debug!("removed agent name={name}");
        }
        removed
    }
}
