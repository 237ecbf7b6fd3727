//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_navbar::AppNavbar;
use crate::pages::applications::ApplicationsPage;
use crate::pages::employer_applications::EmployerApplicationsPage;
use crate::pages::employer_dashboard::EmployerDashboardPage;
use crate::pages::home::HomePage;
use crate::pages::job_detail::JobDetailPage;
use crate::pages::job_list::JobListPage;
use crate::pages::job_seeker_dashboard::JobSeekerDashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::manage_jobs::ManageJobsPage;
use crate::pages::post_job::PostJobPage;
use crate::pages::profile::ProfilePage;
use crate::pages::recommendations::RecommendationsPage;
use crate::pages::register::RegisterPage;
use crate::pages::resume_upload::ResumeUploadPage;
use crate::routes::protected::Protected;
use crate::state::credentials;
use crate::state::session::{Role, SessionState};

const EMPLOYER_ONLY: &[Role] = &[Role::Employer];
const JOB_SEEKER_ONLY: &[Role] = &[Role::JobSeeker];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the session service once from the credential store, provides
/// it to the whole tree, and declares the route table: public pages plus
/// the employer and job-seeker areas behind their role gates.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore(&credentials::default_store()));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/careercrafter.css"/>
        <Title text="CareerCrafter"/>

        <Router>
            <AppNavbar/>
            <main class="page-container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("jobs") view=JobListPage/>
                    <Route path=(StaticSegment("jobs"), ParamSegment("id")) view=JobDetailPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>

                    <Route
                        path=(StaticSegment("employer"), StaticSegment("dashboard"))
                        view=|| {
                            view! {
                                <Protected roles=EMPLOYER_ONLY>
                                    <EmployerDashboardPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("employer"), StaticSegment("post-job"))
                        view=|| {
                            view! {
                                <Protected roles=EMPLOYER_ONLY>
                                    <PostJobPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("employer"), StaticSegment("manage-jobs"))
                        view=|| {
                            view! {
                                <Protected roles=EMPLOYER_ONLY>
                                    <ManageJobsPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("employer"), StaticSegment("applications"))
                        view=|| {
                            view! {
                                <Protected roles=EMPLOYER_ONLY>
                                    <EmployerApplicationsPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("employer"), StaticSegment("profile"))
                        view=|| {
                            view! {
                                <Protected roles=EMPLOYER_ONLY>
                                    <ProfilePage/>
                                </Protected>
                            }
                        }
                    />

                    <Route
                        path=(StaticSegment("jobseeker"), StaticSegment("dashboard"))
                        view=|| {
                            view! {
                                <Protected roles=JOB_SEEKER_ONLY>
                                    <JobSeekerDashboardPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("jobseeker"), StaticSegment("applications"))
                        view=|| {
                            view! {
                                <Protected roles=JOB_SEEKER_ONLY>
                                    <ApplicationsPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("recommendations")
                        view=|| {
                            view! {
                                <Protected roles=JOB_SEEKER_ONLY>
                                    <RecommendationsPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <Protected roles=JOB_SEEKER_ONLY>
                                    <ProfilePage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("resume")
                        view=|| {
                            view! {
                                <Protected roles=JOB_SEEKER_ONLY>
                                    <ResumeUploadPage/>
                                </Protected>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
