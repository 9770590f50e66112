use roost_core::{
    domain::models::{Message, Role},
    storage::MemoryStore,
};

#[test]
fn session_lookup_returns_entity_for_existing_id() {
    let store = MemoryStore::seeded();

    let session = store.session("session-abc").expect("session should exist");
    assert_eq!(session.agent_name, "default");
    assert_eq!(session.messages.len(), 3);
}

#[test]
fn session_lookup_returns_none_for_unknown_id() {
    let store = MemoryStore::seeded();
    assert!(store.session("session-xyz").is_none());
}

#[test]
fn remove_session_is_isolated_and_idempotent() {
    let mut store = MemoryStore::seeded();

    assert!(store.remove_session("session-def"));
    assert!(store.session("session-def").is_none());
    assert!(
        store.session("session-abc").is_some(),
        "other sessions are unaffected"
    );

    assert!(!store.remove_session("session-def"));
    assert_eq!(store.list_sessions().len(), 2);
}

#[test]
fn create_session_requires_existing_agent() {
    let mut store = MemoryStore::seeded();

    let session = store
        .create_session("coder")
        .expect("session should open for a known agent");
    assert!(session.id.starts_with("sess-"));
    assert_eq!(session.agent_name, "coder");
    assert!(session.messages.is_empty());
    assert!(store.session(&session.id).is_some());

    assert!(store.create_session("ghost").is_err());
}

#[test]
fn messages_preserve_insertion_order() {
    let mut store = MemoryStore::seeded();

    let seeded_roles = store
        .session("session-abc")
        .expect("session should exist")
        .messages
        .iter()
        .map(|m| m.role)
        .collect::<Vec<_>>();
    assert_eq!(seeded_roles, vec![Role::System, Role::User, Role::Assistant]);

    store
        .append_message(
            "session-abc",
            Message {
                role: Role::User,
                content: "And the capital of Spain?".to_owned(),
                tool_calls: None,
                tool_result: None,
                agent_name: "default".to_owned(),
                tokens: 7,
            },
        )
        .expect("message should append");

    let session = store.session("session-abc").expect("session should exist");
    assert_eq!(session.messages.len(), 4);
    assert_eq!(
        session.messages.last().map(|m| m.content.as_str()),
        Some("And the capital of Spain?")
    );
}

#[test]
fn append_message_rejects_unknown_session() {
    let mut store = MemoryStore::seeded();

    let result = store.append_message(
        "session-xyz",
        Message {
            role: Role::User,
            content: "hello".to_owned(),
            tool_calls: None,
            tool_result: None,
            agent_name: "default".to_owned(),
            tokens: 1,
        },
    );
    assert!(result.is_err());
}
