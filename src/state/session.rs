//! The live session: who is signed in, with which roles.
//!
//! `SessionState` is constructed once at startup from the credential store
//! and provided to the component tree as an `RwSignal`. Login and logout go
//! through it so the durable store and the reactive view never diverge
//! within a tab.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::credentials::{self, KeyValue};

/// Coarse authorization tags granted by the server. Unknown tags in a
/// login payload are dropped during normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    JobSeeker,
    Employer,
}

impl Role {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "job_seeker" => Some(Self::JobSeeker),
            "employer" => Some(Self::Employer),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::JobSeeker => "job_seeker",
            Self::Employer => "employer",
        }
    }
}

/// Canonical user snapshot held by the session and persisted across
/// reloads. `job_seeker_id` / `employer_id` are cached hints only; the API
/// remains the source of truth for profile existence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSnapshot {
    pub user_id: Option<i64>,
    pub username: String,
    pub email: Option<String>,
    pub roles: Vec<Role>,
    pub job_seeker_id: Option<i64>,
    pub employer_id: Option<i64>,
}

/// A persisted session: both halves or neither survive a reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserSnapshot,
}

/// Collapse a loosely-shaped login payload onto the canonical snapshot.
///
/// Servers have sent `id` or `userId` for the identifier and any of
/// `username` / `name` / `email` for the display name; the precedence is
/// fixed here and the function is total over arbitrary input. A missing
/// `roles` array yields an empty role set, which fails every role gate
/// until a later login supplies one.
pub fn normalize_user(payload: &Value) -> UserSnapshot {
    let user_id = payload
        .get("userId")
        .and_then(Value::as_i64)
        .or_else(|| payload.get("id").and_then(Value::as_i64));

    let email = payload
        .get("email")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned);

    let username = payload
        .get("username")
        .and_then(Value::as_str)
        .or_else(|| payload.get("name").and_then(Value::as_str))
        .map(ToOwned::to_owned)
        .or_else(|| email.clone())
        .unwrap_or_default();

    let roles = payload
        .get("roles")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .filter_map(Role::from_tag)
                .collect()
        })
        .unwrap_or_default();

    UserSnapshot {
        user_id,
        username,
        email,
        roles,
        job_seeker_id: payload.get("jobSeekerId").and_then(Value::as_i64),
        employer_id: payload.get("employerId").and_then(Value::as_i64),
    }
}

/// Live, render-reactive view of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserSnapshot>,
}

impl SessionState {
    /// Rebuild the in-memory view from whatever the credential store
    /// holds. A corrupted store reads as signed out.
    pub fn restore<S: KeyValue>(store: &S) -> Self {
        match credentials::load(store) {
            Some(session) => Self {
                token: Some(session.token),
                user: Some(session.user),
            },
            None => Self::default(),
        }
    }

    /// Establish a session from a login exchange: normalize the payload,
    /// persist token and snapshot as a unit, update live state. Calling
    /// this twice with the same input yields the same session.
    pub fn login<S: KeyValue>(&mut self, store: &S, token: &str, payload: &Value) {
        let user = normalize_user(payload);
        credentials::save(store, token, &user);
        self.token = Some(token.to_owned());
        self.user = Some(user);
    }

    /// Tear down the session and its durable copy. Safe to call with no
    /// session active.
    pub fn logout<S: KeyValue>(&mut self, store: &S) {
        credentials::clear(store);
        self.token = None;
        self.user = None;
    }

    /// Role gate: an empty `required` set means no restriction; otherwise
    /// true iff at least one required role is granted. With no session
    /// this is always false, never an error.
    pub fn has_role(&self, required: &[Role]) -> bool {
        if required.is_empty() {
            return true;
        }
        self.user
            .as_ref()
            .is_some_and(|user| required.iter().any(|role| user.roles.contains(role)))
    }

    pub fn authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Account identifier used to look up server-side profiles.
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().and_then(|user| user.user_id)
    }

    /// Cached job-seeker profile hint; absence proves nothing.
    pub fn job_seeker_id(&self) -> Option<i64> {
        self.user.as_ref().and_then(|user| user.job_seeker_id)
    }

    /// Cached employer profile hint; absence proves nothing.
    pub fn employer_id(&self) -> Option<i64> {
        self.user.as_ref().and_then(|user| user.employer_id)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.username.as_str())
    }
}
