//! Profile page dispatching on the session's roles.

use leptos::prelude::*;

use crate::pages::employer_profile::EmployerProfilePage;
use crate::pages::job_seeker_profile::JobSeekerProfilePage;
use crate::state::session::{Role, SessionState};

/// Shows the profile form matching the session's role. With both roles
/// granted the job-seeker form wins, matching the navigation split.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || {
        let state = session.get();
        if state.has_role(&[Role::JobSeeker]) {
            view! { <JobSeekerProfilePage/> }.into_any()
        } else if state.has_role(&[Role::Employer]) {
            view! { <EmployerProfilePage/> }.into_any()
        } else {
            view! { <p class="muted">"Please log in to access your profile."</p> }.into_any()
        }
    }
}
