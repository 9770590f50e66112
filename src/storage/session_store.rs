use chrono::Utc;
use tracing::debug;

use crate::{
    domain::{
        error::DomainError,
        models::{Message, Session},
    },
    storage::MemoryStore,
};

impl MemoryStore {
    #[must_use]
    pub fn list_sessions(&self) -> &[Session] {
        &self.sessions
    }

    #[must_use]
    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == id)
    }

    /// Opens a new empty session for an existing agent.
    pub fn create_session(&mut self, agent_name: &str) -> Result<Session, DomainError> {
        if !self
            .agent_summaries
            .iter()
            .any(|agent| agent.name == agent_name)
        {
            return Err(DomainError::NotFound(format!(
                "agent not found: {agent_name}"
            )));
        }

        let now = Utc::now();
        let session = Session {
            id: format!("sess-{}", uuid::Uuid::new_v4()),
            agent_name: agent_name.to_owned(),
            created_at: now,
            last_active_at: now,
            messages: Vec::new(),
        };

        debug!("created session id={} agent={agent_name}", session.id);
        self.sessions.push(session.clone());
        Ok(session)
    }

    /// Appends one turn to a session, preserving conversation order and
    /// bumping `last_active_at`.
    ///
    /// A message carrying a tool result must reference a tool call issued in
    /// the same or an earlier message of the session.
    pub fn append_message(
        &mut self,
        session_id: &str,
        message: Message,
    ) -> Result<(), DomainError> {
        let Some(index) = self
            .sessions
            .iter()
            .position(|session| session.id == session_id)
        else {
            return Err(DomainError::NotFound(format!(
                "session not found: {session_id}"
            )));
        };

        if let Some(tool_result) = &message.tool_result {
            let session = &self.sessions[index];
            let correlated = session
                .messages
                .iter()
                .chain(std::iter::once(&message))
                .filter_map(|entry| entry.tool_calls.as_deref())
                .flatten()
                .any(|call| call.id == tool_result.tool_call_id);

            if !correlated {
                return Err(DomainError::InvalidRequest(format!(
                    "tool result references unknown tool call: {}",
                    tool_result.tool_call_id
                )));
            }
        }

        let session = &mut self.sessions[index];
        session.last_active_at = Utc::now();
        session.messages.push(message);
        Ok(())
    }

    /// Removes the session. Its run records are left in place; callers that
    /// want orphan cleanup pair this with `remove_runs_for_session`.
    pub fn remove_session(&mut self, id: &str) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|session| session.id != id);

        let removed = self.sessions.len() < before;
        if removed {
            debug!("removed session id={id}");
        }
        removed
    }
}
