use super::*;

#[test]
fn classifies_auth_and_missing() {
    assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(404, "{\"message\":\"x\"}"), ApiError::NotFound);
}

#[test]
fn error_message_prefers_json_message_field() {
    let err = ApiError::from_status(422, "{\"message\":\"title is required\"}");
    assert_eq!(
        err,
        ApiError::Api {
            status: 422,
            message: "title is required".to_owned()
        }
    );
}

#[test]
fn error_message_falls_back_to_body_text() {
    let err = ApiError::from_status(500, "boom");
    assert_eq!(
        err,
        ApiError::Api {
            status: 500,
            message: "boom".to_owned()
        }
    );
}

#[test]
fn error_message_falls_back_to_status_line() {
    let err = ApiError::from_status(502, "  ");
    assert_eq!(
        err,
        ApiError::Api {
            status: 502,
            message: "request failed with status 502".to_owned()
        }
    );
}

#[test]
fn json_body_without_message_uses_body_text() {
    let err = ApiError::from_status(400, "{\"error\":\"nope\"}");
    assert_eq!(
        err,
        ApiError::Api {
            status: 400,
            message: "{\"error\":\"nope\"}".to_owned()
        }
    );
}

#[test]
fn display_is_the_extracted_message() {
    let err = ApiError::from_status(503, "{\"message\":\"down\"}");
    assert_eq!(err.to_string(), "down");
    assert_eq!(ApiError::NotFound.to_string(), "not found");
}
