use super::*;
use crate::state::session::Role;

fn snapshot() -> UserSnapshot {
    UserSnapshot {
        user_id: Some(7),
        username: "a@b.com".to_owned(),
        email: Some("a@b.com".to_owned()),
        roles: vec![Role::JobSeeker],
        job_seeker_id: None,
        employer_id: None,
    }
}

// =============================================================
// save / load round trip
// =============================================================

#[test]
fn save_then_load_round_trips() {
    let store = MemoryStore::new();
    let user = snapshot();

    save(&store, "tok123", &user);
    let session = load(&store).expect("session");

    assert_eq!(session.token, "tok123");
    assert_eq!(session.user, user);
}

#[test]
fn round_trip_preserves_optional_hints() {
    let store = MemoryStore::new();
    let user = UserSnapshot {
        job_seeker_id: Some(42),
        employer_id: None,
        ..snapshot()
    };

    save(&store, "t", &user);
    let session = load(&store).expect("session");

    assert_eq!(session.user.job_seeker_id, Some(42));
    assert_eq!(session.user.employer_id, None);
}

#[test]
fn load_on_empty_store_is_absent() {
    let store = MemoryStore::new();
    assert_eq!(load(&store), None);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_the_session() {
    let store = MemoryStore::new();
    save(&store, "t", &snapshot());

    clear(&store);

    assert_eq!(load(&store), None);
    assert_eq!(token(&store), None);
}

#[test]
fn clear_twice_matches_clear_once() {
    let store = MemoryStore::new();
    save(&store, "t", &snapshot());

    clear(&store);
    clear(&store);

    assert_eq!(load(&store), None);
}

// =============================================================
// corruption and partial state
// =============================================================

#[test]
fn corrupted_snapshot_loads_as_absent() {
    let store = MemoryStore::new();
    save(&store, "t", &snapshot());
    store.set("cc_user", "{not json");

    assert_eq!(load(&store), None);
}

#[test]
fn token_without_snapshot_loads_as_absent() {
    let store = MemoryStore::new();
    store.set("cc_token", "t");

    assert_eq!(load(&store), None);
}

#[test]
fn unreadable_hint_degrades_to_no_hint() {
    let store = MemoryStore::new();
    save(&store, "t", &snapshot());
    store.set("cc_jobSeekerId", "forty-two");

    let session = load(&store).expect("session");
    assert_eq!(session.user.job_seeker_id, None);
}

#[test]
fn hint_keys_override_the_snapshot() {
    let store = MemoryStore::new();
    save(&store, "t", &snapshot());
    store.set("cc_employerId", "9");

    let session = load(&store).expect("session");
    assert_eq!(session.user.employer_id, Some(9));
}

#[test]
fn token_reads_the_raw_key() {
    let store = MemoryStore::new();
    assert_eq!(token(&store), None);

    save(&store, "tok", &snapshot());
    assert_eq!(token(&store), Some("tok".to_owned()));
}
