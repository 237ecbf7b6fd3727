//! Minimal standalone job-posting form.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::NewJobListing;
use crate::util::time;

/// Quick post form: title, location, description.
#[component]
pub fn PostJobPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let job = NewJobListing {
            title: title.get_untracked(),
            description: description.get_untracked(),
            location: location.get_untracked(),
            posted_date: time::today_iso(),
            ..NewJobListing::default()
        };

        leptos::task::spawn_local(async move {
            match api::create_job(&job).await {
                Ok(()) => {
                    message.set(Some("Job posted successfully!".to_owned()));
                    title.set(String::new());
                    location.set(String::new());
                    description.set(String::new());
                }
                Err(err) => message.set(Some(format!("Error posting job: {err}"))),
            }
        });
    };

    view! {
        <div class="post-job-page">
            <h2>"Post a Job"</h2>
            <form class="job-create-form" on:submit=on_submit>
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
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <textarea
                    class="form-input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">
                    "Submit"
                </button>
            </form>

            {move || message.get().map(|msg| view! { <p class="form-notice">{msg}</p> })}
        </div>
    }
}
