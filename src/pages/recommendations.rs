//! Server-computed job recommendations for the signed-in seeker.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::JobListing;
use crate::state::session::SessionState;

fn detail(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <p>
            <strong>{label}</strong>
            {value.unwrap_or_else(|| "Not specified".to_owned())}
        </p>
    }
}

/// Recommendation list. The matching lives entirely server-side; this
/// page only needs the cached profile hint to address the endpoint, and
/// renders guidance when the hint is absent rather than guessing.
#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let jobs = LocalResource::new(move || {
        let seeker_id = session.get().job_seeker_id();
        async move {
            match seeker_id {
                Some(id) => api::recommendations(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <div class="recommendations-page">
            <h2>"Your Job Recommendations"</h2>

            <Suspense fallback=move || view! { <p>"Loading recommendations..."</p> }>
                {move || {
                    jobs.get()
                        .map(|result| match result {
                            Ok(Some(list)) if list.is_empty() => {
                                view! { <p class="muted">"No recommendations at this time."</p> }
                                    .into_any()
                            }
                            Ok(Some(list)) => {
                                view! {
                                    <div class="recommendations-page__list">
                                        {list
                                            .into_iter()
                                            .map(|job| view! { <RecommendationCard job=job/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(None) => {
                                view! {
                                    <p class="muted">
                                        "Complete your profile to receive recommendations."
                                    </p>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <p class="form-error">
                                        {format!("Failed to load recommendations: {err}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Full detail card for one recommended listing.
#[component]
fn RecommendationCard(job: JobListing) -> impl IntoView {
    let salary = job.salary.map(|amount| format!("${amount}"));

    view! {
        <div class="job-card job-card--detailed">
            <h5 class="job-card__title">
                {job.title.unwrap_or_else(|| "No title provided".to_owned())}
            </h5>
            {detail("Company: ", job.company_name)}
            {detail("Location: ", job.location)}
            {detail("Qualifications: ", job.qualifications)}
            {detail("Required Skills: ", job.required_skills)}
            {detail("Job Type: ", job.job_type)}
            {detail("Experience: ", job.experience)}
            {detail("Salary: ", salary)}
            {detail("Posted Date: ", job.posted_date)}
            <p>{job.description.unwrap_or_else(|| "No description provided.".to_owned())}</p>
        </div>
    }
}
