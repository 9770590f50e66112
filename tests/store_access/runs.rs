use roost_core::{domain::models::RunStatus, storage::MemoryStore};

#[test]
fn runs_for_session_come_back_in_insertion_order() {
    let store = MemoryStore::seeded();

    let runs = store.runs_for_session("session-ghi");
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].run_id, "run-004");
    assert_eq!(runs[0].status, RunStatus::Failed);
    assert_eq!(runs[1].run_id, "run-005");
    assert_eq!(runs[1].status, RunStatus::Cancelled);
}

#[test]
fn runs_for_unknown_session_are_empty() {
    let store = MemoryStore::seeded();
    assert!(store.runs_for_session("session-xyz").is_empty());
}

#[test]
fn deleting_a_session_leaves_runs_until_explicit_cleanup() {
    let mut store = MemoryStore::seeded();

    assert!(store.remove_session("session-ghi"));
    assert_eq!(
        store.runs_for_session("session-ghi").len(),
        2,
        "deletion does not cascade to run records"
    );

    assert_eq!(store.remove_runs_for_session("session-ghi"), 2);
    assert!(store.runs_for_session("session-ghi").is_empty());
    assert_eq!(store.list_runs().len(), 3);
}

#[test]
fn finished_runs_keep_their_terminal_status() {
    let mut store = MemoryStore::seeded();

    let run = store
        .start_run("session-abc")
        .expect("run should start for an existing session");
    let finished = store
        .finish_run(&run.run_id, RunStatus::Cancelled)
        .expect("started run should finish");
    assert_eq!(finished.status, RunStatus::Cancelled);

    assert!(store.finish_run(&run.run_id, RunStatus::Completed).is_err());
    assert!(store.finish_run("run-missing", RunStatus::Failed).is_err());
}
