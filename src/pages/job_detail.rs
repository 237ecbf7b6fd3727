//! Job detail page: public read, employer edit and delete.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api;
use crate::net::types::JobListing;
use crate::state::session::{Role, SessionState};

/// Detail view for one listing. Employers get an edit form and a delete
/// action; the API still decides whether either is allowed.
#[component]
pub fn JobDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let job_id = move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let job = LocalResource::new(move || {
        let id = job_id();
        async move {
            match id {
                Some(id) => api::fetch_job(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let edit_mode = RwSignal::new(false);
    let draft = RwSignal::new(JobListing::default());
    let message = RwSignal::new(None::<String>);

    let is_employer = move || session.get().has_role(&[Role::Employer]);

    let on_save = {
        let job = job.clone();
        move |_| {
            let updated = draft.get_untracked();
            let Some(id) = updated.job_listing_id else {
                return;
            };
            let job = job.clone();
            leptos::task::spawn_local(async move {
                match api::update_job(id, &updated).await {
                    Ok(()) => {
                        message.set(Some("Job updated successfully".to_owned()));
                        edit_mode.set(false);
                        job.refetch();
                    }
                    Err(err) => message.set(Some(err.to_string())),
                }
            });
        }
    };

    let on_delete = {
        let navigate = navigate.clone();
        move |_| {
            let Some(id) = params
                .get_untracked()
                .get("id")
                .and_then(|raw| raw.parse::<i64>().ok())
            else {
                return;
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::delete_job(id).await {
                    Ok(()) => navigate(
                        "/employer/dashboard",
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    ),
                    Err(err) => message.set(Some(err.to_string())),
                }
            });
        }
    };

    view! {
        <div class="job-detail-page">
            <h3>"Job Detail"</h3>

            {move || message.get().map(|msg| view! { <p class="form-notice">{msg}</p> })}

            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    let on_save = on_save.clone();
                    let on_delete = on_delete.clone();
                    job.get()
                        .map(move |result| match result {
                            Ok(Some(current)) => {
                                if edit_mode.get() {
                                    view! {
                                        <JobEditForm
                                            draft=draft
                                            on_save=on_save.clone()
                                            on_cancel=Callback::new(move |()| edit_mode.set(false))
                                        />
                                    }
                                        .into_any()
                                } else {
                                    let begin = {
                                        let current = current.clone();
                                        move |_| {
                                            draft.set(current.clone());
                                            edit_mode.set(true);
                                        }
                                    };
                                    view! {
                                        <JobSummary job=current.clone()/>
                                        <Show when=is_employer>
                                            <div class="job-detail-page__actions">
                                                <button class="btn" on:click=begin.clone()>
                                                    "Update"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=on_delete.clone()
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </Show>
                                    }
                                        .into_any()
                                }
                            }
                            Ok(None) => view! { <p class="muted">"Job not found."</p> }.into_any(),
                            Err(err) => {
                                view! { <p class="form-error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Read-only listing fields.
#[component]
fn JobSummary(job: JobListing) -> impl IntoView {
    let salary = job
        .salary
        .map(|amount| format!("${amount}"))
        .unwrap_or_else(|| "N/A".to_owned());

    view! {
        <div class="job-detail">
            <h4>{job.title.unwrap_or_default()}</h4>
            <p>
                <b>"Location: "</b>
                {job.location.unwrap_or_default()}
            </p>
            <p>
                <b>"Salary: "</b>
                {salary}
            </p>
            <p>
                <b>"Description: "</b>
                {job.description.unwrap_or_default()}
            </p>
            <p>
                <b>"Company: "</b>
                {job.company_name.unwrap_or_else(|| "N/A".to_owned())}
            </p>
            <p>
                <b>"Job Type: "</b>
                {job.job_type.unwrap_or_else(|| "N/A".to_owned())}
            </p>
        </div>
    }
}

/// Inline edit form over the draft listing.
#[component]
fn JobEditForm(
    draft: RwSignal<JobListing>,
    on_save: impl Fn(leptos::ev::MouseEvent) + Clone + 'static,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="job-edit-form">
            <input
                class="form-input"
                type="text"
                placeholder="Title"
                prop:value=move || draft.get().title.unwrap_or_default()
                on:input=move |ev| {
                    draft.update(|job| job.title = Some(event_target_value(&ev)));
                }
            />
            <input
                class="form-input"
                type="text"
                placeholder="Location"
                prop:value=move || draft.get().location.unwrap_or_default()
                on:input=move |ev| {
                    draft.update(|job| job.location = Some(event_target_value(&ev)));
                }
            />
            <input
                class="form-input"
                type="number"
                placeholder="Salary"
                prop:value=move || {
                    draft.get().salary.map(|s| s.to_string()).unwrap_or_default()
                }
                on:input=move |ev| {
                    draft.update(|job| job.salary = event_target_value(&ev).parse().ok());
                }
            />
            <textarea
                class="form-input"
                placeholder="Description"
                prop:value=move || draft.get().description.unwrap_or_default()
                on:input=move |ev| {
                    draft.update(|job| job.description = Some(event_target_value(&ev)));
                }
            ></textarea>
            <input
                class="form-input"
                type="text"
                placeholder="Company Name"
                prop:value=move || draft.get().company_name.unwrap_or_default()
                on:input=move |ev| {
                    draft.update(|job| job.company_name = Some(event_target_value(&ev)));
                }
            />
            <select
                class="form-input"
                prop:value=move || draft.get().job_type.unwrap_or_default()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    draft
                        .update(|job| {
                            job.job_type = if value.is_empty() { None } else { Some(value) };
                        });
                }
            >
                <option value="">"Select Job Type"</option>
                <option value="Full-Time">"Full-Time"</option>
                <option value="Intern">"Intern"</option>
            </select>

            <div class="job-edit-form__actions">
                <button class="btn btn--primary" on:click=on_save>
                    "Save"
                </button>
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
