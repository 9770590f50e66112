//! Built-in development dataset.
//!
//! A seeded store stands in for a live daemon during development and in
//! tests: three agents, their sessions, the run history, and the default
//! skill set. The data is fixed at seed time and lives for the store's
//! lifetime.

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    domain::models::{
        AgentConfig, AgentSummary, DaemonStatus, Message, Role, RunRecord, RunStatus,
        SamplingConfig, Session, Skill,
    },
    storage::MemoryStore,
};

impl MemoryStore {
    /// A store seeded with the built-in dataset and its canned status
    /// snapshot.
    #[must_use]
    pub fn seeded() -> Self {
        Self::seeded_with(DaemonStatus {
            bind: ":50051".to_owned(),
            endpoint: "http://127.0.0.1:8080".to_owned(),
            model_dir: "~/models".to_owned(),
            llama_server_healthy: true,
            llama_server_running: true,
            llama_server_pid: 12_345,
            uptime_seconds: 3_600,
            started_at: ts(2026, 2, 4, 10, 0, 0),
            data_dir: "~/.roost".to_owned(),
        })
    }

    /// A store seeded with the built-in dataset, reporting the given status
    /// snapshot instead of the canned one.
    #[must_use]
    pub fn seeded_with(status: DaemonStatus) -> Self {
        Self {
            status,
            agent_summaries: agent_summaries(),
            agent_configs: agent_configs().into_iter().collect(),
            sessions: sessions(),
            skills: skills(),
            runs: runs(),
        }
    }
}

fn agent_summaries() -> Vec<AgentSummary> {
    vec![
        AgentSummary {
            name: "default".to_owned(),
            display_name: "Default Agent".to_owned(),
            has_prompt: true,
            has_config: true,
        },
        AgentSummary {
            name: "coder".to_owned(),
            display_name: "Code Assistant".to_owned(),
            has_prompt: true,
            has_config: true,
        },
        AgentSummary {
            name: "researcher".to_owned(),
            display_name: "Research Agent".to_owned(),
            has_prompt: true,
            has_config: false,
        },
    ]
}

fn agent_configs() -> Vec<(String, AgentConfig)> {
    vec![
        (
            "default".to_owned(),
            AgentConfig {
                name: "default".to_owned(),
                display_name: "Default Agent".to_owned(),
                system_prompt: "You are a helpful AI assistant. Answer questions accurately and concisely."
                    .to_owned(),
                model: "gpt-oss-20b-Q4_K_M.gguf".to_owned(),
                sampling: Some(SamplingConfig {
                    temperature: Some(0.7),
                    top_p: Some(0.9),
                    top_k: Some(40),
                    repeat_penalty: Some(1.1),
                    max_tokens: Some(4_096),
                }),
                tool_role: true,
            },
        ),
        (
            "coder".to_owned(),
            AgentConfig {
                name: "coder".to_owned(),
                display_name: "Code Assistant".to_owned(),
                system_prompt: "You are an expert software engineer. Help with coding tasks, debugging, and code review."
                    .to_owned(),
                model: "codestral-22b-Q4_K_M.gguf".to_owned(),
                sampling: Some(SamplingConfig {
                    temperature: Some(0.3),
                    top_p: Some(0.95),
                    top_k: None,
                    repeat_penalty: None,
                    max_tokens: Some(8_192),
                }),
                tool_role: true,
            },
        ),
        (
            "researcher".to_owned(),
            AgentConfig {
                name: "researcher".to_owned(),
                display_name: "Research Agent".to_owned(),
                system_prompt: "You are a research assistant. Help gather, analyze, and synthesize information."
                    .to_owned(),
                model: "gpt-oss-20b-Q4_K_M.gguf".to_owned(),
                sampling: None,
                tool_role: false,
            },
        ),
    ]
}

fn sessions() -> Vec<Session> {
    vec![
        Session {
            id: "session-abc".to_owned(),
            agent_name: "default".to_owned(),
            created_at: ts(2026, 2, 4, 14, 0, 0),
            last_active_at: ts(2026, 2, 4, 14, 35, 0),
            messages: vec![
                message(
                    Role::System,
                    "You are a helpful AI assistant. Answer questions accurately and concisely.",
                    "default",
                    20,
                ),
                message(Role::User, "What is the capital of France?", "default", 8),
                message(
                    Role::Assistant,
                    "The capital of France is Paris. It is the largest city in France and serves as the country's political, economic, and cultural center.",
                    "default",
                    35,
                ),
            ],
        },
        Session {
            id: "session-def".to_owned(),
            agent_name: "coder".to_owned(),
            created_at: ts(2026, 2, 4, 15, 0, 0),
            last_active_at: ts(2026, 2, 4, 15, 0, 0),
            messages: vec![
                message(
                    Role::System,
                    "You are an expert software engineer. Help with coding tasks, debugging, and code review.",
                    "coder",
                    22,
                ),
                message(
                    Role::User,
                    "Help me write a function to reverse a string in Go.",
                    "coder",
                    12,
                ),
            ],
        },
        Session {
            id: "session-ghi".to_owned(),
            agent_name: "researcher".to_owned(),
            created_at: ts(2026, 2, 4, 12, 0, 0),
            last_active_at: ts(2026, 2, 4, 12, 5, 0),
            messages: vec![message(
                Role::System,
                "You are a research assistant. Help gather, analyze, and synthesize information.",
                "researcher",
                18,
            )],
        },
    ]
}

fn runs() -> Vec<RunRecord> {
    vec![
        run("run-001", "session-abc", RunStatus::Completed, ts(2026, 2, 4, 14, 30, 0)),
        run("run-002", "session-abc", RunStatus::Completed, ts(2026, 2, 4, 14, 35, 0)),
        run("run-003", "session-def", RunStatus::Started, ts(2026, 2, 4, 15, 0, 0)),
        run("run-004", "session-ghi", RunStatus::Failed, ts(2026, 2, 4, 12, 0, 0)),
        run("run-005", "session-ghi", RunStatus::Cancelled, ts(2026, 2, 4, 12, 5, 0)),
    ]
}

fn skills() -> Vec<Skill> {
    vec![
        skill(
            "commit",
            "Generate a git commit message based on staged changes",
            "Analyze the staged git changes and generate an appropriate commit message following conventional commit format.",
            false,
            true,
        ),
        skill(
            "review",
            "Review code changes and provide feedback",
            "Review the provided code changes for bugs, security issues, and best practices. Provide constructive feedback.",
            false,
            true,
        ),
        skill(
            "explain",
            "Explain code or concepts in detail",
            "Provide a detailed explanation of the given code or concept. Break down complex ideas into understandable parts.",
            false,
            true,
        ),
        skill(
            "summarize",
            "Summarize long text or documents",
            "Create a concise summary of the provided text or document.",
            true,
            false,
        ),
    ]
}

fn message(role: Role, content: &str, agent_name: &str, tokens: u32) -> Message {
    Message {
        role,
        content: content.to_owned(),
        tool_calls: None,
        tool_result: None,
        agent_name: agent_name.to_owned(),
        tokens,
    }
}

fn run(run_id: &str, session_id: &str, status: RunStatus, timestamp: DateTime<Utc>) -> RunRecord {
    RunRecord {
        run_id: run_id.to_owned(),
        session_id: session_id.to_owned(),
        status,
        timestamp,
    }
}

fn skill(
    name: &str,
    description: &str,
    content: &str,
    disable_model_invocation: bool,
    user_invocable: bool,
) -> Skill {
    Skill {
        name: name.to_owned(),
        description: description.to_owned(),
        content: content.to_owned(),
        path: format!("~/.roost/skills/{name}.md"),
        disable_model_invocation,
        user_invocable,
    }
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}
