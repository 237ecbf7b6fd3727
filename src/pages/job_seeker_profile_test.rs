use super::*;

fn complete_profile() -> JobSeekerProfile {
    JobSeekerProfile {
        full_name: "Sam Doe".to_owned(),
        gender: "Other".to_owned(),
        date_of_birth: "1999-04-01".to_owned(),
        email: "sam@x.dev".to_owned(),
        phone: "+4915112345678".to_owned(),
        address: "1 Main St".to_owned(),
        education: "BSc".to_owned(),
        experience: "3 years".to_owned(),
        skills: "rust, sql".to_owned(),
        ..JobSeekerProfile::default()
    }
}

#[test]
fn complete_profile_validates_clean() {
    assert!(validate(&complete_profile(), "2026-08-06").is_empty());
}

#[test]
fn missing_fields_are_each_reported() {
    let errors = validate(&JobSeekerProfile::default(), "2026-08-06");
    for field in [
        "fullName",
        "gender",
        "dateOfBirth",
        "email",
        "phone",
        "address",
        "education",
        "experience",
        "skills",
    ] {
        assert!(error_for(&errors, field).is_some(), "missing error for {field}");
    }
}

#[test]
fn birth_date_may_not_be_in_the_future() {
    let profile = JobSeekerProfile {
        date_of_birth: "2030-01-01".to_owned(),
        ..complete_profile()
    };
    let errors = validate(&profile, "2026-08-06");
    assert_eq!(
        error_for(&errors, "dateOfBirth"),
        Some("Date of Birth cannot be in the future")
    );
}

#[test]
fn future_check_is_skipped_without_a_clock() {
    let profile = JobSeekerProfile {
        date_of_birth: "2030-01-01".to_owned(),
        ..complete_profile()
    };
    assert!(validate(&profile, "").is_empty());
}

#[test]
fn phone_numbers_accept_an_optional_plus_prefix() {
    assert!(valid_phone("4915112345678"));
    assert!(valid_phone("+4915112345678"));
    assert!(!valid_phone("+49 151 1234"));
    assert!(!valid_phone("12345"));
    assert!(!valid_phone("not-a-number"));
}
