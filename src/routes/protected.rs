//! Route gate component.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::guard::{self, RouteDecision};
use crate::state::session::{Role, SessionState};
use crate::util::uri;

/// Renders its children only when the current session passes the declared
/// role requirement, redirecting otherwise. The decision is re-evaluated
/// whenever the session or the location changes, so a logout anywhere in
/// the tree immediately vacates gated content.
#[component]
pub fn Protected(
    /// Roles allowed through; empty means any signed-in user.
    #[prop(optional)]
    roles: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision =
        Memo::new(move |_| guard::decide(&session.get(), roles, &location.pathname.get()));

    Effect::new(move || match decision.get() {
        RouteDecision::RedirectToLogin { return_to } => {
            navigate(
                &login_path(&return_to),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
        RouteDecision::RedirectHome => {
            navigate(
                "/",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
        RouteDecision::Render => {}
    });

    view! {
        <Show when=move || decision.get() == RouteDecision::Render>
            {children()}
        </Show>
    }
}

/// Login destination carrying the originally requested path as a `from`
/// query parameter, so the login page can navigate back after success.
fn login_path(return_to: &str) -> String {
    if return_to.is_empty() || return_to == "/" {
        return "/login".to_owned();
    }
    format!("/login?from={}", uri::encode_component(return_to))
}
