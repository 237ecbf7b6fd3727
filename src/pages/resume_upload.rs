//! Resume management: upload/replace, download, delete.
//!
//! The file bytes move through the authenticated pipeline in both
//! directions; the browser only sees object URLs. Transfer is a
//! pass-through and nothing here inspects the document format.

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Resume, file_name};
use crate::state::session::SessionState;
use crate::util::files;

/// Resume page for job seekers.
#[component]
pub fn ResumeUploadPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let seeker_id = RwSignal::new(None::<i64>);
    let resume = RwSignal::new(None::<Resume>);
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        let Some(user_id) = session.get().user_id() else {
            loading.set(false);
            return;
        };
        leptos::task::spawn_local(async move {
            match api::job_seeker_by_user(user_id).await {
                Ok(profile) => {
                    let id = profile.profile_id();
                    seeker_id.set(id);
                    if let Some(id) = id {
                        match api::resume_by_seeker(id).await {
                            Ok(current) => resume.set(Some(current)),
                            Err(ApiError::NotFound) => resume.set(None),
                            Err(err) => message.set(Some(err.to_string())),
                        }
                    }
                }
                // Without a seeker profile there is nothing to attach a
                // resume to; the guidance below covers it.
                Err(ApiError::NotFound) => {}
                Err(err) => message.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = seeker_id.get_untracked() else {
                message.set(Some("Complete your profile before uploading a resume.".to_owned()));
                return;
            };
            let Some(input) = input_ref.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                message.set(Some("Select a file first".to_owned()));
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_blob("file", &file);
            let _ = form.append_with_str("jobSeekerId", &id.to_string());

            leptos::task::spawn_local(async move {
                match api::upload_resume(&form).await {
                    Ok(uploaded) => {
                        resume.set(Some(uploaded));
                        message.set(Some("Resume uploaded successfully".to_owned()));
                        selected.set(false);
                        if let Some(input) = input_ref.get_untracked() {
                            input.set_value("");
                        }
                    }
                    Err(err) => message.set(Some(err.to_string())),
                }
            });
        }
    };

    let on_download = move |_| {
        let Some(path) = resume.get_untracked().and_then(|r| r.file_path) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::download_resume(&path).await {
                Ok(bytes) => files::save_as(&bytes, file_name(&path)),
                Err(err) => {
                    leptos::logging::warn!("resume download failed: {err}");
                    message.set(Some("Failed to download resume.".to_owned()));
                }
            }
        });
    };

    let on_delete = move |_| {
        let Some(id) = resume.get_untracked().and_then(|r| r.resume_id) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_resume(id).await {
                Ok(()) => {
                    resume.set(None);
                    message.set(Some("Resume deleted successfully".to_owned()));
                }
                Err(_) => message.set(Some("Failed to delete resume.".to_owned())),
            }
        });
    };

    view! {
        <div class="resume-page">
            <h2>"My Resume"</h2>

            {move || message.get().map(|msg| view! { <p class="form-notice">{msg}</p> })}

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                {move || match resume.get() {
                    Some(current) => {
                        view! {
                            <div class="resume-card">
                                <p>
                                    <strong>"Uploaded On: "</strong>
                                    {current.upload_date.clone().unwrap_or_default()}
                                </p>
                                <button class="btn btn--outline" on:click=on_download>
                                    "Download"
                                </button>
                                <button class="btn btn--danger" on:click=on_delete>
                                    "Delete"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! { <div class="empty-state">"No resume uploaded yet"</div> }
                            .into_any()
                    }
                }}

                <form class="resume-upload-form" on:submit=on_upload>
                    <label class="form-field">
                        "Upload New Resume"
                        <input
                            class="form-input"
                            type="file"
                            accept=".pdf,.doc,.docx"
                            node_ref=input_ref
                            on:change=move |ev| {
                                selected.set(!event_target_value(&ev).is_empty());
                            }
                        />
                    </label>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || !selected.get()
                    >
                        {move || {
                            if resume.get().is_some() { "Replace Resume" } else { "Upload Resume" }
                        }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
