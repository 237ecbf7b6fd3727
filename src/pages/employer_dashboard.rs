//! Employer dashboard: create a listing inline and review existing ones.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::NewJobListing;
use crate::state::session::SessionState;
use crate::util::time;

/// Dashboard for signed-in employers.
#[component]
pub fn EmployerDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let jobs = LocalResource::new(|| api::fetch_jobs());

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let qualifications = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let salary = RwSignal::new(String::new());
    // Prefilled from the cached hint when present; still editable because
    // the hint is not authoritative.
    let employer_id = RwSignal::new(
        session
            .get_untracked()
            .employer_id()
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );
    let message = RwSignal::new(None::<String>);

    let on_create = {
        let jobs = jobs.clone();
        move |_| {
            let job = NewJobListing {
                title: title.get_untracked(),
                description: description.get_untracked(),
                location: location.get_untracked(),
                salary: salary.get_untracked().trim().parse().ok(),
                qualifications: qualifications.get_untracked(),
                employer_id: employer_id.get_untracked().trim().parse().ok(),
                posted_date: time::today_iso(),
            };
            if job.title.trim().is_empty() {
                message.set(Some("Title is required".to_owned()));
                return;
            }

            let jobs = jobs.clone();
            leptos::task::spawn_local(async move {
                match api::create_job(&job).await {
                    Ok(()) => {
                        message.set(Some("Job created successfully".to_owned()));
                        title.set(String::new());
                        description.set(String::new());
                        qualifications.set(String::new());
                        location.set(String::new());
                        salary.set(String::new());
                        jobs.refetch();
                    }
                    Err(err) => message.set(Some(format!("Post failed: {err}"))),
                }
            });
        }
    };

    view! {
        <div class="employer-dashboard">
            <h3>"Employer Dashboard"</h3>

            <h5>"Create Job Listing"</h5>
            <div class="job-create-form">
                <input
                    class="form-input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="text"
                    placeholder="Qualifications"
                    prop:value=move || qualifications.get()
                    on:input=move |ev| qualifications.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="text"
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="number"
                    placeholder="Salary"
                    prop:value=move || salary.get()
                    on:input=move |ev| salary.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="number"
                    placeholder="Employer ID"
                    prop:value=move || employer_id.get()
                    on:input=move |ev| employer_id.set(event_target_value(&ev))
                />

                <button class="btn btn--primary" on:click=on_create>
                    "Post Job"
                </button>

                {move || message.get().map(|msg| view! { <p class="form-notice">{msg}</p> })}
            </div>

            <h5 class="employer-dashboard__listings-title">"My Job Listings"</h5>
            <Suspense fallback=move || view! { <p>"Loading listings..."</p> }>
                {move || {
                    jobs.get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="employer-dashboard__listings">
                                        {list
                                            .into_iter()
                                            .map(|job| {
                                                let salary = job
                                                    .salary
                                                    .map(|amount| format!("(${amount})"))
                                                    .unwrap_or_default();
                                                view! {
                                                    <div class="listing-row">
                                                        <b>{job.title.unwrap_or_default()}</b>
                                                        " – "
                                                        {job.location.unwrap_or_default()}
                                                        " "
                                                        {salary}
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
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
