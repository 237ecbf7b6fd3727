//! Per-navigation access decision.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{Role, SessionState};

/// Outcome of evaluating a navigation attempt against the live session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// The requester may reach the destination.
    Render,
    /// No token: send to the login page, remembering where the user was
    /// headed so a successful login can return there.
    RedirectToLogin { return_to: String },
    /// Signed in but no required role matches: send home. Nothing to
    /// resume, so no return state is kept.
    RedirectHome,
}

/// Decide, fresh on every navigation, whether `requested` is reachable
/// with the given role requirement. An empty `required` set gates on
/// sign-in alone. Any ambiguity (no token, no matching role) resolves to
/// the more restrictive outcome.
pub fn decide(session: &SessionState, required: &[Role], requested: &str) -> RouteDecision {
    if !session.authenticated() {
        return RouteDecision::RedirectToLogin {
            return_to: requested.to_owned(),
        };
    }
    if !required.is_empty() && !session.has_role(required) {
        return RouteDecision::RedirectHome;
    }
    RouteDecision::Render
}
