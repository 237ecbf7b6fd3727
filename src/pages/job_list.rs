//! Public job list with client-side search.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::JobListing;

/// Substring filter over title and location; an empty query matches all.
fn matches_query(job: &JobListing, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    };
    contains(&job.title) || contains(&job.location)
}

/// Browse page listing every published job.
#[component]
pub fn JobListPage() -> impl IntoView {
    let jobs = LocalResource::new(|| api::fetch_jobs());
    let query = RwSignal::new(String::new());

    view! {
        <div class="job-list-page">
            <div class="job-list-page__search">
                <input
                    class="form-input"
                    type="text"
                    placeholder="Search by title, location..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>

            <Suspense fallback=move || view! { <p>"Loading jobs..."</p> }>
                {move || {
                    jobs.get()
                        .map(|result| match result {
                            Ok(list) => {
                                let needle = query.get();
                                let filtered: Vec<_> = list
                                    .into_iter()
                                    .filter(|job| matches_query(job, &needle))
                                    .collect();
                                if filtered.is_empty() {
                                    view! { <p class="muted">"No jobs found."</p> }.into_any()
                                } else {
                                    view! {
                                        <div class="job-list-page__grid">
                                            {filtered
                                                .into_iter()
                                                .map(|job| view! { <JobCard job=job/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
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

/// Summary card linking to the job's detail page.
#[component]
fn JobCard(job: JobListing) -> impl IntoView {
    let href = format!("/jobs/{}", job.job_listing_id.unwrap_or_default());

    view! {
        <div class="job-card">
            <h5 class="job-card__title">{job.title.unwrap_or_default()}</h5>
            <p class="job-card__location">{job.location.unwrap_or_default()}</p>
            <p class="job-card__description">{job.description.unwrap_or_default()}</p>
            <a class="btn btn--primary btn--sm" href=href>
                "View"
            </a>
        </div>
    }
}
