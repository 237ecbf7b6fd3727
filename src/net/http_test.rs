use super::*;

#[test]
fn api_url_joins_onto_the_default_base() {
    assert_eq!(api_url("/auth/login"), "/api/auth/login");
    assert_eq!(api_url("/job-listings/getall"), "/api/job-listings/getall");
}

#[test]
fn api_url_keeps_query_strings_intact() {
    assert_eq!(
        api_url("/resumes/download?path=cv.pdf"),
        "/api/resumes/download?path=cv.pdf"
    );
}
