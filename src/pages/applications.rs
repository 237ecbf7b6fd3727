//! The job seeker's own applications with status badges.

use leptos::prelude::*;

use crate::net::api;
use crate::state::session::SessionState;

fn status_badge_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "pending" => "badge badge--pending",
        "approved" => "badge badge--approved",
        _ => "badge badge--muted",
    }
}

/// Lists the signed-in seeker's applications.
#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let applications = LocalResource::new(move || {
        let user_id = session.get().user_id();
        async move {
            match user_id {
                Some(id) => api::applications_by_seeker(id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    view! {
        <div class="applications-page">
            <h3>"My Applications"</h3>

            <Suspense fallback=move || view! { <p>"Loading applications..."</p> }>
                {move || {
                    applications
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="muted">"No applications found."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="application-list">
                                        {list
                                            .into_iter()
                                            .map(|app| {
                                                view! {
                                                    <li class="application-list__item">
                                                        <div>
                                                            <strong>{app.job_title}</strong>
                                                            " – Applied on "
                                                            {app.application_date}
                                                        </div>
                                                        <span class=status_badge_class(
                                                            &app.status,
                                                        )>{app.status.clone()}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="form-error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
