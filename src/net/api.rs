//! REST endpoint wrappers for the CareerCrafter API.
//!
//! Thin functions over the authenticated pipeline in [`crate::net::http`]:
//! one per endpoint, typed in and out, errors passed through unmodified
//! for the calling page to pattern-match.

use serde_json::Value;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{
    EmployerApplication, EmployerProfile, JobListing, JobSeekerProfile, LoginResponse,
    NewApplication, NewJobListing, RegisterRequest, Resume, SeekerApplication,
    parse_employer_application, parse_seeker_application,
};
use crate::util::uri;

// ---- auth ----

/// Exchange credentials for a token and a loosely-shaped user payload.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    http::post_json(
        "/auth/login",
        &serde_json::json!({ "email": email, "password": password }),
    )
    .await
}

/// Create an account. The response body is opaque; only success matters.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    http::post_unit("/auth/register", request).await
}

// ---- job listings ----

pub async fn fetch_jobs() -> Result<Vec<JobListing>, ApiError> {
    http::get_json("/job-listings/getall").await
}

pub async fn fetch_job(id: i64) -> Result<JobListing, ApiError> {
    http::get_json(&format!("/job-listings/getbyid/{id}")).await
}

pub async fn create_job(job: &NewJobListing) -> Result<(), ApiError> {
    http::post_unit("/job-listings/create", job).await
}

pub async fn update_job(id: i64, job: &JobListing) -> Result<(), ApiError> {
    http::put_unit(&format!("/job-listings/update/{id}"), job).await
}

pub async fn delete_job(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/job-listings/delete/{id}")).await
}

// ---- profiles ----

/// Job-seeker profile owned by a user account. `NotFound` means the
/// profile has not been created yet.
pub async fn job_seeker_by_user(user_id: i64) -> Result<JobSeekerProfile, ApiError> {
    http::get_json(&format!("/job-seekers/by-user/{user_id}")).await
}

pub async fn create_job_seeker(profile: &JobSeekerProfile) -> Result<JobSeekerProfile, ApiError> {
    http::post_json("/job-seekers/create", profile).await
}

pub async fn update_job_seeker(id: i64, profile: &JobSeekerProfile) -> Result<(), ApiError> {
    http::put_unit(&format!("/job-seekers/update/{id}"), profile).await
}

/// Employer profile owned by a user account. `NotFound` means the profile
/// has not been created yet.
pub async fn employer_by_user(user_id: i64) -> Result<EmployerProfile, ApiError> {
    http::get_json(&format!("/employers/by-user/{user_id}")).await
}

pub async fn create_employer(profile: &EmployerProfile) -> Result<EmployerProfile, ApiError> {
    http::post_json("/employers/create", profile).await
}

pub async fn update_employer(id: i64, profile: &EmployerProfile) -> Result<(), ApiError> {
    http::put_unit(&format!("/employers/update/{id}"), profile).await
}

// ---- applications ----

pub async fn applications_by_seeker(seeker_id: i64) -> Result<Vec<SeekerApplication>, ApiError> {
    let rows: Vec<Value> =
        http::get_json(&format!("/applications/by-job-seeker/{seeker_id}")).await?;
    Ok(rows.iter().filter_map(parse_seeker_application).collect())
}

pub async fn applications_by_employer(
    employer_id: i64,
) -> Result<Vec<EmployerApplication>, ApiError> {
    let rows: Vec<Value> =
        http::get_json(&format!("/applications/employer/{employer_id}")).await?;
    Ok(rows.iter().filter_map(parse_employer_application).collect())
}

pub async fn submit_application(application: &NewApplication) -> Result<(), ApiError> {
    http::post_unit("/applications/apply", application).await
}

pub async fn update_application_status(id: i64, status: &str) -> Result<(), ApiError> {
    http::put_unit(
        &format!("/applications/update/{id}"),
        &serde_json::json!({ "status": status }),
    )
    .await
}

// ---- resumes ----

/// Current resume for a job-seeker profile. `NotFound` means none has
/// been uploaded yet.
pub async fn resume_by_seeker(seeker_id: i64) -> Result<Resume, ApiError> {
    http::get_json(&format!("/resumes/by-user/{seeker_id}")).await
}

/// Upload or replace a resume as multipart form data.
#[cfg(feature = "hydrate")]
pub async fn upload_resume(form: &web_sys::FormData) -> Result<Resume, ApiError> {
    http::post_form("/resumes/upload", form).await
}

/// Fetch resume bytes through the authenticated pipeline; the caller
/// decides whether to open or save them.
pub async fn download_resume(file_path: &str) -> Result<Vec<u8>, ApiError> {
    http::get_binary(&format!(
        "/resumes/download?path={}",
        uri::encode_component(file_path)
    ))
    .await
}

pub async fn delete_resume(resume_id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/resumes/delete/{resume_id}")).await
}

// ---- recommendations ----

/// Listings recommended for a job-seeker profile; matching itself lives
/// entirely server-side.
pub async fn recommendations(seeker_id: i64) -> Result<Vec<JobListing>, ApiError> {
    http::get_json(&format!("/jobsearches/recommend/user/{seeker_id}")).await
}
