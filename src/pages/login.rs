//! Login page.
//!
//! A successful login establishes the session and navigates to the `from`
//! query parameter left by the route gate, falling back to home.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::state::credentials;
use crate::state::session::SessionState;

fn field_errors(email: &str, password: &str) -> (Option<&'static str>, Option<&'static str>) {
    let email_error = if email.trim().is_empty() {
        Some("Email is required")
    } else if !email.contains('@') {
        Some("Enter a valid email address")
    } else {
        None
    };

    let password_error = if password.is_empty() {
        Some("Password is required")
    } else if password.len() < 6 {
        Some("Password must be at least 6 characters")
    } else {
        None
    };

    (email_error, password_error)
}

fn input_class(error: Option<&'static str>) -> &'static str {
    if error.is_some() {
        "form-input form-input--invalid"
    } else {
        "form-input"
    }
}

/// Email and password form posting to the login endpoint.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let (email_err, password_err) = field_errors(&email.get_untracked(), &password.get_untracked());
        email_error.set(email_err);
        password_error.set(password_err);
        if email_err.is_some() || password_err.is_some() {
            return;
        }

        let destination = query
            .get_untracked()
            .get("from")
            .unwrap_or_else(|| "/".to_owned());
        let navigate = navigate.clone();
        submitting.set(true);
        form_error.set(None);

        leptos::task::spawn_local(async move {
            match api::login(&email.get_untracked(), &password.get_untracked()).await {
                Ok(resp) => {
                    session.update(|state| {
                        state.login(&credentials::default_store(), &resp.token, &resp.user);
                    });
                    navigate(
                        &destination,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h3>"Login"</h3>
            <form class="auth-form" on:submit=on_submit>
                <label class="form-field">
                    "Email"
                    <input
                        type="email"
                        class=move || input_class(email_error.get())
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {move || {
                        email_error
                            .get()
                            .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                    }}
                </label>

                <label class="form-field">
                    "Password"
                    <input
                        type="password"
                        class=move || input_class(password_error.get())
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || {
                        password_error
                            .get()
                            .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                    }}
                </label>

                {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button class="btn btn--primary" disabled=move || submitting.get()>
                    "Login"
                </button>
            </form>
        </div>
    }
}
