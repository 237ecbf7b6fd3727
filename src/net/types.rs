//! Wire types for the CareerCrafter API, plus the helpers that absorb
//! their looser variants (ids arriving as `xId` or plain `id`, listing
//! titles nested or flat).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A job listing as the API serves it. Most fields are optional because
/// older listings predate several columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobListing {
    pub job_listing_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary: Option<f64>,
    pub qualifications: Option<String>,
    pub required_skills: Option<String>,
    pub experience: Option<String>,
    pub company_name: Option<String>,
    pub job_type: Option<String>,
    pub employer_id: Option<i64>,
    pub posted_date: Option<String>,
}

/// Payload for creating a listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobListing {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<f64>,
    pub qualifications: String,
    pub employer_id: Option<i64>,
    pub posted_date: String,
}

/// `POST /auth/login` response. The `user` half stays loose; session
/// normalization owns collapsing it.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Value,
}

/// `POST /auth/register` request.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Job-seeker profile, both as fetched and as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSeekerProfile {
    pub job_seeker_id: Option<i64>,
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub full_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
}

impl JobSeekerProfile {
    /// Server rows carry the id as either `jobSeekerId` or `id`.
    pub fn profile_id(&self) -> Option<i64> {
        self.job_seeker_id.or(self.id)
    }
}

/// Employer profile, both as fetched and as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployerProfile {
    pub employer_id: Option<i64>,
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub company_name: String,
    pub company_description: String,
    pub position: String,
}

impl EmployerProfile {
    /// Server rows carry the id as either `employerId` or `id`.
    pub fn profile_id(&self) -> Option<i64> {
        self.employer_id.or(self.id)
    }
}

/// Stored resume metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub resume_id: Option<i64>,
    pub job_seeker_id: Option<i64>,
    pub file_path: Option<String>,
    pub upload_date: Option<String>,
}

/// Application submission payload.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub job_seeker_id: i64,
    pub job_listing_id: i64,
    pub status: String,
    pub application_date: String,
    pub file_path: String,
}

/// A row in the job seeker's application list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeekerApplication {
    pub application_id: i64,
    pub job_title: String,
    pub application_date: String,
    pub status: String,
}

/// A row in the employer's received-applications list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployerApplication {
    pub application_id: i64,
    pub job_title: String,
    pub applicant_name: String,
    pub application_date: String,
    pub status: String,
    pub file_path: Option<String>,
}

/// Application rows arrive with the listing either nested under
/// `jobListing` or flattened to `jobTitle`; a missing status displays as
/// "Applied". Rows without an id are dropped.
pub fn parse_seeker_application(row: &Value) -> Option<SeekerApplication> {
    let application_id = row
        .get("applicationId")
        .and_then(Value::as_i64)
        .or_else(|| row.get("id").and_then(Value::as_i64))?;

    let job_title = row
        .get("jobListing")
        .and_then(|listing| listing.get("title"))
        .and_then(Value::as_str)
        .or_else(|| row.get("jobTitle").and_then(Value::as_str))
        .unwrap_or("N/A")
        .to_owned();

    let application_date = row
        .get("applicationDate")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    let status = row
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("Applied")
        .to_owned();

    Some(SeekerApplication {
        application_id,
        job_title,
        application_date,
        status,
    })
}

/// Employer-side rows use the flattened shape first and fall back to the
/// nested one.
pub fn parse_employer_application(row: &Value) -> Option<EmployerApplication> {
    let application_id = row
        .get("applicationId")
        .and_then(Value::as_i64)
        .or_else(|| row.get("id").and_then(Value::as_i64))?;

    let job_title = row
        .get("jobTitle")
        .and_then(Value::as_str)
        .or_else(|| {
            row.get("jobListing")
                .and_then(|listing| listing.get("title"))
                .and_then(Value::as_str)
        })
        .unwrap_or("N/A")
        .to_owned();

    let applicant_name = row
        .get("applicantName")
        .and_then(Value::as_str)
        .or_else(|| {
            row.get("jobSeeker")
                .and_then(|seeker| seeker.get("fullName"))
                .and_then(Value::as_str)
        })
        .unwrap_or("Unknown applicant")
        .to_owned();

    let application_date = row
        .get("applicationDate")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    let status = row
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("pending")
        .to_owned();

    let file_path = row
        .get("filePath")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned);

    Some(EmployerApplication {
        application_id,
        job_title,
        applicant_name,
        application_date,
        status,
        file_path,
    })
}

/// Calendar date portion of a server timestamp, for date inputs.
pub fn date_only(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

/// Last path segment of a stored resume path, for download file names.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
