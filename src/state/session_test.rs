use super::*;
use crate::state::credentials::{self, MemoryStore};

// =============================================================
// normalization
// =============================================================

#[test]
fn normalize_maps_id_and_email_fallbacks() {
    let payload = serde_json::json!({
        "id": 7,
        "email": "a@b.com",
        "roles": ["job_seeker"]
    });

    let user = normalize_user(&payload);

    assert_eq!(user.user_id, Some(7));
    assert_eq!(user.username, "a@b.com");
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
    assert_eq!(user.roles, vec![Role::JobSeeker]);
    assert_eq!(user.job_seeker_id, None);
    assert_eq!(user.employer_id, None);
}

#[test]
fn normalize_prefers_user_id_then_id() {
    let payload = serde_json::json!({ "userId": 3, "id": 9 });
    assert_eq!(normalize_user(&payload).user_id, Some(3));
}

#[test]
fn normalize_display_name_precedence() {
    let both = serde_json::json!({ "username": "u", "name": "n", "email": "e@x" });
    assert_eq!(normalize_user(&both).username, "u");

    let name_only = serde_json::json!({ "name": "n", "email": "e@x" });
    assert_eq!(normalize_user(&name_only).username, "n");

    let email_only = serde_json::json!({ "email": "e@x" });
    assert_eq!(normalize_user(&email_only).username, "e@x");
}

#[test]
fn normalize_is_total_over_garbage() {
    let user = normalize_user(&serde_json::json!("not an object"));
    assert_eq!(user, UserSnapshot::default());
}

#[test]
fn normalize_missing_roles_is_empty_set() {
    let user = normalize_user(&serde_json::json!({ "id": 1 }));
    assert!(user.roles.is_empty());
}

#[test]
fn normalize_drops_unknown_role_tags_keeps_order_and_duplicates() {
    let payload = serde_json::json!({
        "roles": ["admin", "employer", "job_seeker", "employer"]
    });

    let user = normalize_user(&payload);
    assert_eq!(
        user.roles,
        vec![Role::Employer, Role::JobSeeker, Role::Employer]
    );
}

// =============================================================
// role gate
// =============================================================

#[test]
fn empty_required_roles_pass_without_a_session() {
    let state = SessionState::default();
    assert!(state.has_role(&[]));
}

#[test]
fn empty_required_roles_pass_with_a_session() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.login(&store, "t", &serde_json::json!({ "id": 1 }));
    assert!(state.has_role(&[]));
}

#[test]
fn no_session_fails_every_non_empty_gate() {
    let state = SessionState::default();
    assert!(!state.has_role(&[Role::Employer]));
    assert!(!state.has_role(&[Role::JobSeeker, Role::Employer]));
}

#[test]
fn empty_role_set_fails_every_non_empty_gate() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.login(&store, "t", &serde_json::json!({ "id": 1 }));

    assert!(!state.has_role(&[Role::Employer]));
    assert!(!state.has_role(&[Role::JobSeeker]));
}

#[test]
fn has_role_is_an_or_over_required() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.login(
        &store,
        "t",
        &serde_json::json!({ "id": 1, "roles": ["job_seeker"] }),
    );

    assert!(state.has_role(&[Role::JobSeeker, Role::Employer]));
    assert!(!state.has_role(&[Role::Employer]));
}

#[test]
fn has_role_tolerates_duplicate_grants() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.login(
        &store,
        "t",
        &serde_json::json!({ "id": 1, "roles": ["employer", "employer"] }),
    );

    assert!(state.has_role(&[Role::Employer]));
}

// =============================================================
// login / logout lifecycle
// =============================================================

#[test]
fn login_persists_and_restores() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.login(
        &store,
        "tok123",
        &serde_json::json!({ "id": 7, "email": "a@b.com", "roles": ["job_seeker"] }),
    );

    let stored = credentials::load(&store).expect("stored session");
    assert_eq!(stored.token, "tok123");
    assert_eq!(stored.user.roles, vec![Role::JobSeeker]);

    let restored = SessionState::restore(&store);
    assert_eq!(restored, state);
}

#[test]
fn login_is_idempotent() {
    let store = MemoryStore::new();
    let payload = serde_json::json!({ "id": 7, "email": "a@b.com", "roles": ["employer"] });

    let mut first = SessionState::default();
    first.login(&store, "t", &payload);
    let after_first = credentials::load(&store);

    let mut second = first.clone();
    second.login(&store, "t", &payload);

    assert_eq!(first, second);
    assert_eq!(credentials::load(&store), after_first);
}

#[test]
fn logout_clears_store_and_state_idempotently() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.login(&store, "t", &serde_json::json!({ "id": 1 }));

    state.logout(&store);
    assert_eq!(state, SessionState::default());
    assert_eq!(credentials::load(&store), None);

    // Callable with no session; same observable result as once.
    state.logout(&store);
    assert_eq!(state, SessionState::default());
    assert_eq!(credentials::load(&store), None);
}

#[test]
fn restore_from_empty_store_is_signed_out() {
    let store = MemoryStore::new();
    let state = SessionState::restore(&store);
    assert!(!state.authenticated());
    assert!(state.user.is_none());
}

#[test]
fn concrete_login_scenario() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.login(
        &store,
        "tok123",
        &serde_json::json!({ "id": 7, "email": "a@b.com", "roles": ["job_seeker"] }),
    );

    assert_eq!(state.token.as_deref(), Some("tok123"));
    let user = state.user.as_ref().expect("user");
    assert_eq!(user.user_id, Some(7));
    assert_eq!(user.username, "a@b.com");
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
    assert_eq!(user.roles, vec![Role::JobSeeker]);
    assert_eq!(user.job_seeker_id, None);
    assert_eq!(user.employer_id, None);
}
