use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_targets_login_endpoint() {
    let req = AuthRequest::Login(LoginRequest {
        email: "a@b.com".to_owned(),
        password: "hunter2".to_owned(),
    });
    assert_eq!(req.path(), "/api/auth/login");
    assert_eq!(req.email(), "a@b.com");
    assert_eq!(req.body(), serde_json::json!({ "email": "a@b.com", "password": "hunter2" }));
}

#[test]
fn register_request_omits_blank_optional_fields() {
    let req = AuthRequest::Register(RegisterRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        organization: "Analytical".to_owned(),
        role: "Instructor".to_owned(),
        phone_number: None,
        use_case: Some("Coursework".to_owned()),
        organization_size: None,
    });
    assert_eq!(req.path(), "/api/auth/register");
    assert_eq!(
        req.body(),
        serde_json::json!({
            "email": "a@b.com",
            "password": "pw",
            "full_name": "Ada Lovelace",
            "organization": "Analytical",
            "role": "Instructor",
            "use_case": "Coursework",
        })
    );
}

// =============================================================
// Failure classification
// =============================================================

#[test]
fn status_429_is_rate_limited_regardless_of_body() {
    for body in ["", "not json", r#"{"detail":"Slow down buddy"}"#, r#"{"detail":[{"msg":"x"}]}"#] {
        let err = classify_failure(429, body);
        assert_eq!(err, AuthError::RateLimited);
        assert_eq!(err.to_string(), "Too many attempts. Please wait a minute and try again.");
    }
}

#[test]
fn string_detail_is_shown_verbatim() {
    assert_eq!(
        classify_failure(400, r#"{"detail":"Email already registered"}"#),
        AuthError::Detail("Email already registered".to_owned())
    );
}

#[test]
fn list_detail_concatenates_msg_and_message_fields() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"invalid email"},{"message":"password too short"}]}"#;
    assert_eq!(
        classify_failure(422, body),
        AuthError::Detail("invalid email, password too short".to_owned())
    );
}

#[test]
fn empty_detail_list_falls_back_to_generic() {
    assert_eq!(classify_failure(422, r#"{"detail":[]}"#), AuthError::Failed);
}

#[test]
fn unparseable_body_falls_back_to_generic() {
    assert_eq!(classify_failure(500, "<html>oops</html>"), AuthError::Failed);
    assert_eq!(classify_failure(401, r#"{"error":"nope"}"#), AuthError::Failed);
}

// =============================================================
// Success interpretation
// =============================================================

#[test]
fn success_with_token_yields_token() {
    assert_eq!(
        interpret_response(200, r#"{"access_token":"tok-1","token_type":"bearer"}"#),
        Ok("tok-1".to_owned())
    );
}

#[test]
fn success_without_token_is_rejected() {
    let err = interpret_response(200, r#"{"token_type":"bearer"}"#).unwrap_err();
    assert_eq!(err, AuthError::MissingToken);
    assert_eq!(err.to_string(), "Authentication succeeded but no token received");
}

#[test]
fn success_with_blank_or_malformed_body_is_rejected() {
    assert_eq!(interpret_response(201, r#"{"access_token":"  "}"#), Err(AuthError::MissingToken));
    assert_eq!(interpret_response(200, "garbage"), Err(AuthError::MissingToken));
}

#[test]
fn non_success_status_is_classified() {
    assert_eq!(interpret_response(429, r#"{"access_token":"tok"}"#), Err(AuthError::RateLimited));
}
