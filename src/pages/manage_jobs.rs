//! Listing management with per-listing delete.

use leptos::prelude::*;

use crate::net::api;

/// Enumerates listings and deletes on request, refetching afterwards.
#[component]
pub fn ManageJobsPage() -> impl IntoView {
    let jobs = LocalResource::new(|| api::fetch_jobs());
    let message = RwSignal::new(None::<String>);

    let on_delete = {
        let jobs = jobs.clone();
        move |id: i64| {
            let jobs = jobs.clone();
            leptos::task::spawn_local(async move {
                match api::delete_job(id).await {
                    Ok(()) => jobs.refetch(),
                    Err(err) => message.set(Some(format!("Error deleting job: {err}"))),
                }
            });
        }
    };

    view! {
        <div class="manage-jobs-page">
            <h2>"Manage My Jobs"</h2>

            {move || message.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <Suspense fallback=move || view! { <p>"Loading listings..."</p> }>
                {move || {
                    jobs.get()
                        .map(|result| match result {
                            Ok(list) => {
                                let on_delete = on_delete.clone();
                                view! {
                                    <div class="manage-jobs-page__list">
                                        {list
                                            .into_iter()
                                            .map(|job| {
                                                let id = job.job_listing_id.unwrap_or_default();
                                                let on_delete = on_delete.clone();
                                                view! {
                                                    <div class="listing-row listing-row--managed">
                                                        <h5>{job.title.unwrap_or_default()}</h5>
                                                        <button
                                                            class="btn btn--danger btn--sm"
                                                            on:click=move |_| on_delete(id)
                                                        >
                                                            "Delete"
                                                        </button>
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
