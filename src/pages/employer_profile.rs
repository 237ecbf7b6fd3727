//! Employer profile form with create-or-update semantics.

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::EmployerProfile;
use crate::state::session::SessionState;

fn validate(profile: &EmployerProfile) -> Vec<(&'static str, &'static str)> {
    let mut errors = Vec::new();
    let name_len = profile.company_name.trim().len();
    if name_len < 2 || name_len > 100 {
        errors.push(("companyName", "Company name must be 2 to 100 characters"));
    }
    if profile.company_description.trim().is_empty() {
        errors.push(("companyDescription", "Company description is required"));
    }
    if profile.position.trim().is_empty() {
        errors.push(("position", "Position is required"));
    }
    errors
}

fn error_for(
    errors: &[(&'static str, &'static str)],
    field: &str,
) -> Option<&'static str> {
    errors
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, msg)| *msg)
}

/// Profile form for employers.
#[component]
pub fn EmployerProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let draft = RwSignal::new(EmployerProfile::default());
    let profile_id = RwSignal::new(None::<i64>);
    let loading = RwSignal::new(true);
    let errors = RwSignal::new(Vec::<(&'static str, &'static str)>::new());
    let message = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(user_id) = session.get().user_id() else {
            loading.set(false);
            return;
        };
        leptos::task::spawn_local(async move {
            match api::employer_by_user(user_id).await {
                Ok(profile) => {
                    profile_id.set(profile.profile_id());
                    draft.set(profile);
                }
                // No profile yet: leave the blank form up for creation.
                Err(ApiError::NotFound) => {}
                Err(err) => message.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut profile = draft.get_untracked();
        let checked = validate(&profile);
        errors.set(checked.clone());
        if !checked.is_empty() {
            return;
        }
        profile.user_id = session.get_untracked().user_id();

        leptos::task::spawn_local(async move {
            match profile_id.get_untracked() {
                Some(id) => match api::update_employer(id, &profile).await {
                    Ok(()) => {
                        message.set(Some("Employer profile updated successfully.".to_owned()));
                    }
                    Err(err) => message.set(Some(err.to_string())),
                },
                None => match api::create_employer(&profile).await {
                    Ok(created) => {
                        profile_id.set(created.profile_id());
                        message.set(Some("Employer profile created successfully.".to_owned()));
                    }
                    Err(err) => message.set(Some(err.to_string())),
                },
            }
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            error_for(&errors.get(), field)
                .map(|msg| view! { <span class="form-field__error">{msg}</span> })
        }
    };

    view! {
        <div class="profile-page">
            <h2>"My Employer Profile"</h2>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading your profile..."</p> }>
                <form class="profile-form" on:submit=on_submit>
                    <label class="form-field">
                        "Company Name"
                        <input
                            class="form-input"
                            type="text"
                            prop:value=move || draft.get().company_name
                            on:input=move |ev| {
                                draft.update(|p| p.company_name = event_target_value(&ev));
                            }
                        />
                        {field_error("companyName")}
                    </label>

                    <label class="form-field">
                        "Company Description"
                        <textarea
                            class="form-input"
                            prop:value=move || draft.get().company_description
                            on:input=move |ev| {
                                draft.update(|p| p.company_description = event_target_value(&ev));
                            }
                        ></textarea>
                        {field_error("companyDescription")}
                    </label>

                    <label class="form-field">
                        "Position"
                        <input
                            class="form-input"
                            type="text"
                            prop:value=move || draft.get().position
                            on:input=move |ev| {
                                draft.update(|p| p.position = event_target_value(&ev));
                            }
                        />
                        {field_error("position")}
                    </label>

                    {move || message.get().map(|msg| view! { <p class="form-notice">{msg}</p> })}

                    <button class="btn btn--primary" type="submit">
                        {move || {
                            if profile_id.get().is_some() {
                                "Update Profile"
                            } else {
                                "Create Profile"
                            }
                        }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
