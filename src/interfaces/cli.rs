//! Inspection commands over a seeded store, printing the wire-shape JSON a
//! client boundary would consume. Logs go to stderr so stdout stays valid
//! JSON.

use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde_json::{Value, json};

use crate::{
    application::config::RuntimeConfig, domain::error::DomainError, storage::MemoryStore,
};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Point-in-time daemon status snapshot
    Status,
    /// List agents, or show one agent's full configuration
    Agents {
        #[arg(long)]
        name: Option<String>,
    },
    /// List sessions, or show one session with its messages
    Sessions {
        #[arg(long)]
        id: Option<String>,
    },
    /// List skills, or show one skill
    Skills {
        #[arg(long)]
        name: Option<String>,
        /// Only skills eligible for model-driven invocation
        #[arg(long)]
        model_invocable: bool,
    },
    /// List run records, optionally filtered by session
    Runs {
        #[arg(long)]
        session: Option<String>,
    },
}

pub fn execute(
    command: &Command,
    config: &RuntimeConfig,
    started_at: DateTime<Utc>,
) -> Result<(), DomainError> {
    let store = MemoryStore::seeded_with(config.daemon_status(started_at));
    let payload = render(command, &store)?;
    print_payload(&payload)
}

fn render(command: &Command, store: &MemoryStore) -> Result<Value, DomainError> {
    match command {
        Command::Status => Ok(json!({
            "status": store.status(),
        })),
        Command::Agents { name: Some(name) } => {
            let Some(config) = store.agent_config(name) else {
                return Err(DomainError::NotFound(format!("agent not found: {name}")));
            };
            Ok(json!({ "agent": config }))
        }
        Command::Agents { name: None } => Ok(json!({
            "count": store.list_agents().len(),
            "agents": store.list_agents(),
        })),
        Command::Sessions { id: Some(id) } => {
            let Some(session) = store.session(id) else {
                return Err(DomainError::NotFound(format!("session not found: {id}")));
            };
            Ok(json!({ "session": session }))
        }
        Command::Sessions { id: None } => {
            let items = store
                .list_sessions()
                .iter()
                .map(|session| {
                    json!({
                        "id": session.id,
                        "agentName": session.agent_name,
                        "createdAt": session.created_at,
                        "lastActiveAt": session.last_active_at,
                        "messages": session.messages.len(),
                    })
                })
                .collect::<Vec<_>>();

            Ok(json!({
                "count": items.len(),
                "sessions": items,
            }))
        }
        Command::Skills {
            name: Some(name), ..
        } => {
            let Some(skill) = store.skill(name) else {
                return Err(DomainError::NotFound(format!("skill not found: {name}")));
            };
            Ok(json!({ "skill": skill }))
        }
        Command::Skills {
            name: None,
            model_invocable,
        } => {
            if *model_invocable {
                let skills = store.model_invocable_skills();
                Ok(json!({
                    "count": skills.len(),
                    "skills": skills,
                }))
            } else {
                Ok(json!({
                    "count": store.list_skills().len(),
                    "skills": store.list_skills(),
                }))
            }
        }
        Command::Runs {
            session: Some(session_id),
        } => {
            let runs = store.runs_for_session(session_id);
            Ok(json!({
                "sessionId": session_id,
                "count": runs.len(),
                "runs": runs,
            }))
        }
        Command::Runs { session: None } => Ok(json!({
            "count": store.list_runs().len(),
            "runs": store.list_runs(),
        })),
    }
}

fn print_payload(payload: &Value) -> Result<(), DomainError> {
    let rendered = serde_json::to_string_pretty(payload)
        .map_err(|error| DomainError::Unavailable(format!("failed to render payload: {error}")))?;
    println!("{rendered}");
    Ok(())
}
