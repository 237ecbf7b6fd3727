//! Landing page.

use leptos::prelude::*;

/// Home page with the two calls to action.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">
                "Welcome to " <span class="home-page__brand">"CareerCrafter"</span>
            </h1>
            <p class="home-page__lead">
                "Your platform to explore jobs, manage resumes, and grow your career."
            </p>
            <div class="home-page__actions">
                <a class="btn btn--primary" href="/jobs">
                    "Explore jobs"
                </a>
                <a class="btn btn--outline" href="/register">
                    "Join Now"
                </a>
            </div>
        </div>
    }
}
