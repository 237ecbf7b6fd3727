//! Top navigation bar with role-conditional links.

use leptos::prelude::*;

use crate::state::credentials;
use crate::state::session::{Role, SessionState};

/// Application navbar: brand link, the link set for the session's roles,
/// and either a greeting with logout or login/register links.
///
/// Logout only mutates the session; any gated page currently on screen is
/// vacated by the route gate reacting to the change.
#[component]
pub fn AppNavbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let signed_in = move || session.get().authenticated();
    let is_employer = move || session.get().has_role(&[Role::Employer]);
    let is_job_seeker = move || session.get().has_role(&[Role::JobSeeker]);
    let greeting = move || {
        session
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.update(|state| state.logout(&credentials::default_store()));
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "CareerCrafter"
            </a>

            <ul class="navbar__links">
                <li>
                    <a class="navbar__link" href="/jobs">
                        "Jobs"
                    </a>
                </li>

                <Show when=is_employer>
                    <li>
                        <a class="navbar__link" href="/employer/dashboard">
                            "Employer Dashboard"
                        </a>
                    </li>
                    <li>
                        <a class="navbar__link" href="/employer/profile">
                            "My Profile"
                        </a>
                    </li>
                </Show>

                <Show when=is_job_seeker>
                    <li>
                        <a class="navbar__link" href="/jobseeker/dashboard">
                            "JobSeeker Dashboard"
                        </a>
                    </li>
                    <li>
                        <a class="navbar__link" href="/profile">
                            "My Profile"
                        </a>
                    </li>
                    <li>
                        <a class="navbar__link" href="/jobseeker/applications">
                            "My Applications"
                        </a>
                    </li>
                </Show>
            </ul>

            <ul class="navbar__session">
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <li>
                                <a class="navbar__link" href="/login">
                                    "Login"
                                </a>
                            </li>
                            <li>
                                <a class="navbar__link" href="/register">
                                    "Register"
                                </a>
                            </li>
                        }
                    }
                >
                    <li class="navbar__greeting">{move || format!("Hi, {}", greeting())}</li>
                    <li>
                        <button class="btn btn--outline" on:click=on_logout>
                            "Logout"
                        </button>
                    </li>
                </Show>
            </ul>
        </nav>
    }
}
