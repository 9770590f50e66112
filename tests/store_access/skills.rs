use roost_core::{domain::models::Skill, storage::MemoryStore};

#[test]
fn skill_lookup_returns_entity_for_existing_name() {
    let store = MemoryStore::seeded();

    let skill = store.skill("commit").expect("commit skill should exist");
    assert!(skill.user_invocable);
    assert!(!skill.disable_model_invocation);
}

#[test]
fn skill_lookup_returns_none_for_unknown_name() {
    let store = MemoryStore::seeded();
    assert!(store.skill("translate").is_none());
}

#[test]
fn remove_skill_drops_it_from_listing() {
    let mut store = MemoryStore::seeded();

    assert!(store.remove_skill("summarize"));
    assert!(store.skill("summarize").is_none());
    assert!(
        store.list_skills().iter().all(|s| s.name != "summarize"),
        "listing should no longer include the removed skill"
    );
    assert_eq!(store.list_skills().len(), 3);

    assert!(!store.remove_skill("summarize"));
    assert_eq!(store.list_skills().len(), 3);
}

#[test]
fn model_invocable_skills_exclude_disabled_entries() {
    let store = MemoryStore::seeded();

    let skills = store.model_invocable_skills();
    assert_eq!(skills.len(), 3);
    assert!(skills.iter().all(|s| s.name != "summarize"));
}

#[test]
fn insert_skill_rejects_duplicate_name() {
    let mut store = MemoryStore::seeded();

    let duplicate = Skill {
        name: "review".to_owned(),
        description: "duplicate".to_owned(),
        content: "duplicate".to_owned(),
        path: "~/.roost/skills/review.md".to_owned(),
        disable_model_invocation: false,
        user_invocable: true,
    };
    assert!(store.insert_skill(duplicate).is_err());
    assert_eq!(store.list_skills().len(), 4);
}
