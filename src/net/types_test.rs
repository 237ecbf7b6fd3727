use super::*;

// =============================================================
// application-row normalization
// =============================================================

#[test]
fn seeker_application_reads_nested_listing_title() {
    let row = serde_json::json!({
        "applicationId": 5,
        "jobListing": { "title": "Backend Engineer" },
        "applicationDate": "2026-07-01",
        "status": "pending"
    });

    let app = parse_seeker_application(&row).expect("row");
    assert_eq!(app.application_id, 5);
    assert_eq!(app.job_title, "Backend Engineer");
    assert_eq!(app.application_date, "2026-07-01");
    assert_eq!(app.status, "pending");
}

#[test]
fn seeker_application_falls_back_to_flat_title_and_default_status() {
    let row = serde_json::json!({ "id": 9, "jobTitle": "QA" });

    let app = parse_seeker_application(&row).expect("row");
    assert_eq!(app.application_id, 9);
    assert_eq!(app.job_title, "QA");
    assert_eq!(app.status, "Applied");
    assert_eq!(app.application_date, "");
}

#[test]
fn seeker_application_without_title_displays_placeholder() {
    let row = serde_json::json!({ "applicationId": 1 });
    let app = parse_seeker_application(&row).expect("row");
    assert_eq!(app.job_title, "N/A");
}

#[test]
fn seeker_application_without_id_is_dropped() {
    let row = serde_json::json!({ "jobTitle": "QA" });
    assert!(parse_seeker_application(&row).is_none());
}

#[test]
fn employer_application_prefers_flat_fields() {
    let row = serde_json::json!({
        "applicationId": 3,
        "jobTitle": "Designer",
        "applicantName": "Sam Doe",
        "applicationDate": "2026-06-12",
        "status": "APPROVED",
        "filePath": "uploads/7/cv.pdf"
    });

    let app = parse_employer_application(&row).expect("row");
    assert_eq!(app.job_title, "Designer");
    assert_eq!(app.applicant_name, "Sam Doe");
    assert_eq!(app.status, "APPROVED");
    assert_eq!(app.file_path.as_deref(), Some("uploads/7/cv.pdf"));
}

#[test]
fn employer_application_reads_nested_fallbacks() {
    let row = serde_json::json!({
        "id": 4,
        "jobListing": { "title": "Designer" },
        "jobSeeker": { "fullName": "Sam Doe" }
    });

    let app = parse_employer_application(&row).expect("row");
    assert_eq!(app.job_title, "Designer");
    assert_eq!(app.applicant_name, "Sam Doe");
    assert_eq!(app.status, "pending");
    assert_eq!(app.file_path, None);
}

// =============================================================
// profile ids
// =============================================================

#[test]
fn profile_id_prefers_the_typed_key() {
    let profile = JobSeekerProfile {
        job_seeker_id: Some(11),
        id: Some(99),
        ..JobSeekerProfile::default()
    };
    assert_eq!(profile.profile_id(), Some(11));

    let fallback = JobSeekerProfile {
        id: Some(99),
        ..JobSeekerProfile::default()
    };
    assert_eq!(fallback.profile_id(), Some(99));
}

#[test]
fn employer_profile_id_falls_back_to_id() {
    let profile = EmployerProfile {
        id: Some(2),
        ..EmployerProfile::default()
    };
    assert_eq!(profile.profile_id(), Some(2));
    assert_eq!(EmployerProfile::default().profile_id(), None);
}

// =============================================================
// small formatting helpers
// =============================================================

#[test]
fn date_only_strips_the_time_component() {
    assert_eq!(date_only("1999-04-01T00:00:00Z"), "1999-04-01");
    assert_eq!(date_only("1999-04-01"), "1999-04-01");
}

#[test]
fn file_name_takes_the_last_segment_of_either_separator() {
    assert_eq!(file_name("uploads/7/cv.pdf"), "cv.pdf");
    assert_eq!(file_name("uploads\\7\\cv.pdf"), "cv.pdf");
    assert_eq!(file_name("cv.pdf"), "cv.pdf");
}

#[test]
fn job_listing_tolerates_sparse_rows() {
    let listing: JobListing =
        serde_json::from_value(serde_json::json!({ "jobListingId": 1, "title": "Dev" }))
            .expect("deserialize");
    assert_eq!(listing.job_listing_id, Some(1));
    assert_eq!(listing.title.as_deref(), Some("Dev"));
    assert_eq!(listing.salary, None);
    assert_eq!(listing.company_name, None);
}
