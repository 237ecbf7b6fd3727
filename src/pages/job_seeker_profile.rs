//! Job-seeker profile form with create-or-update semantics.

#[cfg(test)]
#[path = "job_seeker_profile_test.rs"]
mod job_seeker_profile_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{JobSeekerProfile, date_only};
use crate::state::session::SessionState;
use crate::util::time;

fn valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Field-keyed validation. An empty `today` (no clock available) skips
/// the future-date check.
fn validate(profile: &JobSeekerProfile, today: &str) -> Vec<(&'static str, &'static str)> {
    let mut errors = Vec::new();
    if profile.full_name.trim().len() < 2 {
        errors.push(("fullName", "Full Name is required"));
    }
    if profile.gender.is_empty() {
        errors.push(("gender", "Gender is required"));
    }
    if profile.date_of_birth.is_empty() {
        errors.push(("dateOfBirth", "Date of Birth is required"));
    } else if !today.is_empty() && profile.date_of_birth.as_str() > today {
        errors.push(("dateOfBirth", "Date of Birth cannot be in the future"));
    }
    if profile.email.trim().is_empty() || !profile.email.contains('@') {
        errors.push(("email", "A valid email is required"));
    }
    if !valid_phone(&profile.phone) {
        errors.push(("phone", "Invalid phone number"));
    }
    if profile.address.trim().is_empty() {
        errors.push(("address", "Address is required"));
    }
    if profile.education.trim().is_empty() {
        errors.push(("education", "Education is required"));
    }
    if profile.experience.trim().is_empty() {
        errors.push(("experience", "Experience is required"));
    }
    if profile.skills.trim().is_empty() {
        errors.push(("skills", "Skills are required"));
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

/// Profile form for job seekers. Creates the profile on first save and
/// updates it afterwards, keyed on whether a server-side row exists.
#[component]
pub fn JobSeekerProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let draft = RwSignal::new(JobSeekerProfile::default());
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
            match api::job_seeker_by_user(user_id).await {
                Ok(mut profile) => {
                    profile_id.set(profile.profile_id());
                    profile.date_of_birth = date_only(&profile.date_of_birth).to_owned();
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
        let checked = validate(&profile, &time::today_iso());
        errors.set(checked.clone());
        if !checked.is_empty() {
            return;
        }
        profile.user_id = session.get_untracked().user_id();

        leptos::task::spawn_local(async move {
            match profile_id.get_untracked() {
                Some(id) => match api::update_job_seeker(id, &profile).await {
                    Ok(()) => {
                        message.set(Some("JobSeeker profile updated successfully.".to_owned()));
                    }
                    Err(err) => message.set(Some(err.to_string())),
                },
                None => match api::create_job_seeker(&profile).await {
                    Ok(created) => {
                        profile_id.set(created.profile_id());
                        message.set(Some("JobSeeker profile created successfully.".to_owned()));
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
            <h2>"My JobSeeker Profile"</h2>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading your profile..."</p> }>
                <form class="profile-form" on:submit=on_submit>
                    <label class="form-field">
                        "Full Name"
                        <input
                            class="form-input"
                            type="text"
                            prop:value=move || draft.get().full_name
                            on:input=move |ev| {
                                draft.update(|p| p.full_name = event_target_value(&ev));
                            }
                        />
                        {field_error("fullName")}
                    </label>

                    <label class="form-field">
                        "Gender"
                        <select
                            class="form-input"
                            prop:value=move || draft.get().gender
                            on:change=move |ev| {
                                draft.update(|p| p.gender = event_target_value(&ev));
                            }
                        >
                            <option value="">"Select Gender"</option>
                            <option value="Male">"Male"</option>
                            <option value="Female">"Female"</option>
                            <option value="Other">"Other"</option>
                        </select>
                        {field_error("gender")}
                    </label>

                    <label class="form-field">
                        "Date of Birth"
                        <input
                            class="form-input"
                            type="date"
                            prop:value=move || draft.get().date_of_birth
                            on:input=move |ev| {
                                draft.update(|p| p.date_of_birth = event_target_value(&ev));
                            }
                        />
                        {field_error("dateOfBirth")}
                    </label>

                    <label class="form-field">
                        "Email"
                        <input
                            class="form-input"
                            type="email"
                            prop:value=move || draft.get().email
                            on:input=move |ev| {
                                draft.update(|p| p.email = event_target_value(&ev));
                            }
                        />
                        {field_error("email")}
                    </label>

                    <label class="form-field">
                        "Phone Number"
                        <input
                            class="form-input"
                            type="tel"
                            prop:value=move || draft.get().phone
                            on:input=move |ev| {
                                draft.update(|p| p.phone = event_target_value(&ev));
                            }
                        />
                        {field_error("phone")}
                    </label>

                    <label class="form-field">
                        "Address"
                        <textarea
                            class="form-input"
                            prop:value=move || draft.get().address
                            on:input=move |ev| {
                                draft.update(|p| p.address = event_target_value(&ev));
                            }
                        ></textarea>
                        {field_error("address")}
                    </label>

                    <label class="form-field">
                        "Education"
                        <input
                            class="form-input"
                            type="text"
                            prop:value=move || draft.get().education
                            on:input=move |ev| {
                                draft.update(|p| p.education = event_target_value(&ev));
                            }
                        />
                        {field_error("education")}
                    </label>

                    <label class="form-field">
                        "Experience"
                        <input
                            class="form-input"
                            type="text"
                            prop:value=move || draft.get().experience
                            on:input=move |ev| {
                                draft.update(|p| p.experience = event_target_value(&ev));
                            }
                        />
                        {field_error("experience")}
                    </label>

                    <label class="form-field">
                        "Skills"
                        <input
                            class="form-input"
                            type="text"
                            prop:value=move || draft.get().skills
                            on:input=move |ev| {
                                draft.update(|p| p.skills = event_target_value(&ev));
                            }
                        />
                        {field_error("skills")}
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
