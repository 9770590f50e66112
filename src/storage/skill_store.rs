use tracing::debug;

use crate::{
    domain::{error::DomainError, models::Skill},
    storage::MemoryStore,
};

impl MemoryStore {
    #[must_use]
    pub fn list_skills(&self) -> &[Skill] {
        &self.skills
    }

    #[must_use]
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.name == name)
    }

    /// Skills eligible for automatic model-driven invocation.
    #[must_use]
    pub fn model_invocable_skills(&self) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|skill| !skill.disable_model_invocation)
            .collect()
    }

    pub fn insert_skill(&mut self, skill: Skill) -> Result<(), DomainError> {
        if self.skills.iter().any(|entry| entry.name == skill.name) {
            return Err(DomainError::Conflict(format!(
                "skill already exists: {}",
                skill.name
            )));
        }

        debug!("inserted skill name={}", skill.name);
        self.skills.push(skill);
        Ok(())
    }

    pub fn remove_skill(&mut self, name: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|skill| skill.name != name);

        let removed = self.skills.len() < before;
        if removed {
            debug!("removed skill name={name}");
        }
        removed
    }
}
