use super::*;

#[test]
fn valid_form_passes() {
    let errors = validate("Sam Doe", "sam@x.dev", "job_seeker", "hunter2abc", "hunter2abc");
    assert!(errors.ok());
}

#[test]
fn short_name_and_password_are_rejected() {
    let errors = validate("S", "sam@x.dev", "employer", "short", "short");
    assert!(errors.name.is_some());
    assert!(errors.password.is_some());
    assert!(!errors.ok());
}

#[test]
fn role_must_be_one_of_the_two_tags() {
    assert!(validate("Sam", "s@x", "admin", "password1", "password1").role.is_some());
    assert!(validate("Sam", "s@x", "", "password1", "password1").role.is_some());
    assert!(validate("Sam", "s@x", "employer", "password1", "password1").role.is_none());
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let errors = validate("Sam", "s@x", "employer", "password1", "password2");
    assert_eq!(errors.confirm, Some("Passwords must match"));
}

#[test]
fn strength_label_scales_with_variety() {
    assert_eq!(strength_label(""), "—");
    assert_eq!(strength_label("aaaa"), "Weak");
    assert_eq!(strength_label("aaaaaaaa"), "Fair");
    assert_eq!(strength_label("aaaaaaA8"), "Good");
    assert_eq!(strength_label("aaaaaaA8!"), "Strong");
}
