//! Applications received by the employer: approve/reject plus resume view.

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::EmployerApplication;
use crate::state::session::SessionState;
use crate::util::files;

fn status_badge_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "pending" => "badge badge--pending",
        "approved" => "badge badge--approved",
        _ => "badge badge--rejected",
    }
}

/// Resolve the employer profile, then the applications it has received.
/// A missing profile simply has no applications yet.
async fn load_applications(user_id: i64) -> Result<Vec<EmployerApplication>, ApiError> {
    let employer = match api::employer_by_user(user_id).await {
        Ok(profile) => profile,
        Err(ApiError::NotFound) => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };
    match employer.profile_id() {
        Some(employer_id) => api::applications_by_employer(employer_id).await,
        None => Ok(Vec::new()),
    }
}

/// Received-applications page for employers.
#[component]
pub fn EmployerApplicationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let rows = RwSignal::new(Vec::<EmployerApplication>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(user_id) = session.get().user_id() else {
            loading.set(false);
            return;
        };
        leptos::task::spawn_local(async move {
            match load_applications(user_id).await {
                Ok(list) => rows.set(list),
                Err(err) => {
                    leptos::logging::warn!("failed to load applications: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    });

    // Optimistic local update: the server call succeeds, then only the
    // affected row's status flips in place.
    let set_status = move |application_id: i64, new_status: &'static str| {
        leptos::task::spawn_local(async move {
            match api::update_application_status(application_id, new_status).await {
                Ok(()) => {
                    rows.update(|list| {
                        if let Some(app) =
                            list.iter_mut().find(|app| app.application_id == application_id)
                        {
                            app.status = new_status.to_owned();
                        }
                    });
                }
                Err(_) => error.set(Some("Failed to update status".to_owned())),
            }
        });
    };

    // The resume endpoint is authenticated, so the bytes come through the
    // pipeline and open from an object URL.
    let view_resume = move |file_path: String| {
        leptos::task::spawn_local(async move {
            match api::download_resume(&file_path).await {
                Ok(bytes) => files::open_in_new_tab(&bytes),
                Err(err) => {
                    leptos::logging::warn!("resume fetch failed: {err}");
                    error.set(Some("Failed to load resume.".to_owned()));
                }
            }
        });
    };

    view! {
        <div class="employer-applications">
            <h2>"Job Applications"</h2>

            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            {move || {
                if loading.get() {
                    view! { <p>"Loading applications..."</p> }.into_any()
                } else if rows.get().is_empty() {
                    view! {
                        <div class="empty-state">
                            <h4>"No Applications Yet"</h4>
                            <p>"You haven't received any job applications."</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="employer-applications__list">
                            {rows
                                .get()
                                .into_iter()
                                .map(|app| {
                                    let id = app.application_id;
                                    let pending = app.status.eq_ignore_ascii_case("pending");
                                    let file_path = app.file_path.clone();
                                    view! {
                                        <div class="application-card">
                                            <div class="application-card__summary">
                                                <h5>{app.job_title.clone()}</h5>
                                                <p>
                                                    <strong>"Applicant: "</strong>
                                                    {app.applicant_name.clone()}
                                                    <br/>
                                                    <strong>"Applied on: "</strong>
                                                    {app.application_date.clone()}
                                                    <br/>
                                                    <strong>"Status: "</strong>
                                                    <span class=status_badge_class(
                                                        &app.status,
                                                    )>{app.status.clone()}</span>
                                                </p>
                                            </div>
                                            <div class="application-card__actions">
                                                <Show when=move || pending>
                                                    <button
                                                        class="btn btn--primary btn--sm"
                                                        on:click=move |_| set_status(id, "APPROVED")
                                                    >
                                                        "Approve"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger btn--sm"
                                                        on:click=move |_| set_status(id, "REJECTED")
                                                    >
                                                        "Reject"
                                                    </button>
                                                </Show>
                                                {file_path
                                                    .map(|path| {
                                                        view! {
                                                            <button
                                                                class="btn btn--outline btn--sm"
                                                                on:click=move |_| view_resume(path.clone())
                                                            >
                                                                "View Resume"
                                                            </button>
                                                        }
                                                    })}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
