use super::*;
use crate::state::credentials::MemoryStore;

fn signed_in(roles: serde_json::Value) -> SessionState {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.login(&store, "t", &serde_json::json!({ "id": 1, "roles": roles }));
    state
}

#[test]
fn no_token_redirects_to_login_with_return_state() {
    let decision = decide(
        &SessionState::default(),
        &[Role::Employer],
        "/employer/dashboard",
    );

    assert_eq!(
        decision,
        RouteDecision::RedirectToLogin {
            return_to: "/employer/dashboard".to_owned()
        }
    );
}

#[test]
fn no_token_redirects_even_without_role_requirement() {
    let decision = decide(&SessionState::default(), &[], "/profile");
    assert_eq!(
        decision,
        RouteDecision::RedirectToLogin {
            return_to: "/profile".to_owned()
        }
    );
}

#[test]
fn wrong_role_redirects_home_without_return_state() {
    let session = signed_in(serde_json::json!(["job_seeker"]));
    let decision = decide(&session, &[Role::Employer], "/employer/dashboard");
    assert_eq!(decision, RouteDecision::RedirectHome);
}

#[test]
fn matching_role_renders() {
    let session = signed_in(serde_json::json!(["employer", "job_seeker"]));
    let decision = decide(&session, &[Role::Employer], "/employer/dashboard");
    assert_eq!(decision, RouteDecision::Render);
}

#[test]
fn empty_requirement_renders_for_any_signed_in_user() {
    let session = signed_in(serde_json::json!([]));
    assert_eq!(decide(&session, &[], "/profile"), RouteDecision::Render);
}

#[test]
fn empty_role_set_fails_any_required_role() {
    let session = signed_in(serde_json::json!([]));
    assert_eq!(
        decide(&session, &[Role::JobSeeker], "/resume"),
        RouteDecision::RedirectHome
    );
}

#[test]
fn decision_follows_the_live_session() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    session.login(&store, "t", &serde_json::json!({ "id": 1, "roles": ["employer"] }));
    assert_eq!(
        decide(&session, &[Role::Employer], "/employer/post-job"),
        RouteDecision::Render
    );

    session.logout(&store);
    assert_eq!(
        decide(&session, &[Role::Employer], "/employer/post-job"),
        RouteDecision::RedirectToLogin {
            return_to: "/employer/post-job".to_owned()
        }
    );
}
