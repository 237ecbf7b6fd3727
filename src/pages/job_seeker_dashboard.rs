//! Job-seeker dashboard: browse listings and apply with one click.

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::NewApplication;
use crate::state::session::SessionState;
use crate::util::time;

/// Resolve the seeker's profile id for the signed-in account. `NotFound`
/// means the profile has not been created yet, which renders as guidance
/// rather than an error.
async fn seeker_profile_id(user_id: Option<i64>) -> Result<Option<i64>, ApiError> {
    let Some(user_id) = user_id else {
        return Ok(None);
    };
    match api::job_seeker_by_user(user_id).await {
        Ok(profile) => Ok(profile.profile_id()),
        Err(ApiError::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Verify a resume exists, then submit the application carrying its
/// stored path.
async fn apply(seeker_id: i64, job_listing_id: i64) -> Result<&'static str, String> {
    let resume = match api::resume_by_seeker(seeker_id).await {
        Ok(resume) => resume,
        Err(ApiError::NotFound) => {
            return Err("Please upload your resume before applying.".to_owned());
        }
        Err(err) => return Err(err.to_string()),
    };
    let Some(file_path) = resume.file_path else {
        return Err("Please upload your resume before applying.".to_owned());
    };

    let application = NewApplication {
        job_seeker_id: seeker_id,
        job_listing_id,
        status: "pending".to_owned(),
        application_date: time::today_iso(),
        file_path,
    };
    api::submit_application(&application)
        .await
        .map(|()| "Application submitted successfully!")
        .map_err(|err| err.to_string())
}

/// Dashboard for signed-in job seekers.
#[component]
pub fn JobSeekerDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let profile = LocalResource::new(move || seeker_profile_id(session.get().user_id()));
    let jobs = LocalResource::new(|| api::fetch_jobs());
    let message = RwSignal::new(None::<String>);

    let on_apply = move |seeker_id: i64, job_id: i64| {
        leptos::task::spawn_local(async move {
            match apply(seeker_id, job_id).await {
                Ok(notice) => message.set(Some(notice.to_owned())),
                Err(err) => message.set(Some(err)),
            }
        });
    };

    view! {
        <div class="seeker-dashboard">
            <h3>"Job Seeker Dashboard"</h3>

            {move || message.get().map(|msg| view! { <p class="form-notice">{msg}</p> })}

            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    let jobs = jobs.clone();
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(Some(seeker_id)) => {
                                view! {
                                    {move || {
                                        jobs.get()
                                            .map(|jobs_result| match jobs_result {
                                                Ok(list) => {
                                                    view! {
                                                        <ul class="apply-list">
                                                            {list
                                                                .into_iter()
                                                                .map(|job| {
                                                                    let id = job.job_listing_id.unwrap_or_default();
                                                                    let title = job.title.unwrap_or_default();
                                                                    let location = job.location.unwrap_or_default();
                                                                    let salary = job
                                                                        .salary
                                                                        .map(|amount| format!("(${amount})"))
                                                                        .unwrap_or_default();
                                                                    view! {
                                                                        <li class="apply-list__item">
                                                                            <div>
                                                                                <strong>{title}</strong>
                                                                                " – "
                                                                                {location}
                                                                                " "
                                                                                {salary}
                                                                            </div>
                                                                            <button
                                                                                class="btn btn--primary btn--sm"
                                                                                on:click=move |_| on_apply(seeker_id, id)
                                                                            >
                                                                                "Apply"
                                                                            </button>
                                                                        </li>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </ul>
                                                    }
                                                        .into_any()
                                                }
                                                Err(err) => {
                                                    view! { <p class="form-error">{err.to_string()}</p> }
                                                        .into_any()
                                                }
                                            })
                                    }}
                                }
                                    .into_any()
                            }
                            Ok(None) => {
                                view! {
                                    <div class="seeker-dashboard__guidance">
                                        <p>"Your profile is not completed yet."</p>
                                        <a class="btn btn--primary" href="/profile">
                                            "Create Your Profile"
                                        </a>
                                    </div>
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
