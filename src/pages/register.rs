//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::RegisterRequest;

/// Per-field validation results for the signup form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct FormErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    role: Option<&'static str>,
    password: Option<&'static str>,
    confirm: Option<&'static str>,
}

impl FormErrors {
    fn ok(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.password.is_none()
            && self.confirm.is_none()
    }
}

fn validate(name: &str, email: &str, role: &str, password: &str, confirm: &str) -> FormErrors {
    FormErrors {
        name: if name.trim().len() < 2 {
            Some("Full name must be at least 2 characters")
        } else {
            None
        },
        email: if email.trim().is_empty() {
            Some("Email is required")
        } else if !email.contains('@') {
            Some("Enter a valid email address")
        } else {
            None
        },
        role: if role == "job_seeker" || role == "employer" {
            None
        } else {
            Some("Select a role")
        },
        password: if password.len() < 8 {
            Some("Password must be at least 8 characters")
        } else {
            None
        },
        confirm: if confirm == password {
            None
        } else {
            Some("Passwords must match")
        },
    }
}

/// Coarse password strength hint shown while typing.
fn strength_label(password: &str) -> &'static str {
    if password.is_empty() {
        return "—";
    }
    let mut score = 0;
    if password.len() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    ["Weak", "Weak", "Fair", "OK", "Good", "Strong"][score]
}

fn input_class(error: Option<&'static str>) -> &'static str {
    if error.is_some() {
        "form-input form-input--invalid"
    } else {
        "form-input"
    }
}

/// Signup form; a successful registration lands on the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let strength = move || strength_label(&password.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let checked = validate(
            &name.get_untracked(),
            &email.get_untracked(),
            &role.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );
        errors.set(checked);
        if !checked.ok() {
            return;
        }

        let request = RegisterRequest {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        let navigate = navigate.clone();
        submitting.set(true);
        form_error.set(None);

        leptos::task::spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => navigate(
                    "/login",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                ),
                Err(err) => form_error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h3>"Create your account"</h3>
            <form class="auth-form" on:submit=on_submit>
                <label class="form-field">
                    "Full Name"
                    <input
                        type="text"
                        class=move || input_class(errors.get().name)
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    {move || {
                        errors
                            .get()
                            .name
                            .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                    }}
                </label>

                <label class="form-field">
                    "Email"
                    <input
                        type="email"
                        class=move || input_class(errors.get().email)
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {move || {
                        errors
                            .get()
                            .email
                            .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                    }}
                </label>

                <label class="form-field">
                    "I am a"
                    <select
                        class=move || input_class(errors.get().role)
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="">"Select"</option>
                        <option value="job_seeker">"Job Seeker"</option>
                        <option value="employer">"Employer"</option>
                    </select>
                    {move || {
                        errors
                            .get()
                            .role
                            .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                    }}
                </label>

                <label class="form-field">
                    "Password"
                    <input
                        type="password"
                        class=move || input_class(errors.get().password)
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="form-field__hint">{move || format!("Strength: {}", strength())}</span>
                    {move || {
                        errors
                            .get()
                            .password
                            .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                    }}
                </label>

                <label class="form-field">
                    "Confirm Password"
                    <input
                        type="password"
                        class=move || input_class(errors.get().confirm)
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    {move || {
                        errors
                            .get()
                            .confirm
                            .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                    }}
                </label>

                {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button class="btn btn--primary" disabled=move || submitting.get()>
                    "Register"
                </button>
            </form>
        </div>
    }
}
