use super::*;

// =============================================================
// Rendering
// =============================================================

#[test]
fn field_issue_joins_loc_with_dots() {
    let detail = ErrorDetail::Fields(vec![FieldIssue {
        loc: vec![LocSegment::Name("body".into()), LocSegment::Name("pitch_deck".into())],
        msg: "field required".into(),
    }]);
    assert_eq!(detail.to_string(), "body.pitch_deck: field required");
}

#[test]
fn multiple_issues_join_with_comma_space() {
    let body = r#"{"detail":[
        {"loc":["body","company_name"],"msg":"field required"},
        {"loc":["body","transcript"],"msg":"ensure this value has at least 10 characters"}
    ]}"#;
    let err = classify_rejection(422, body);
    let ApiError::Validation { detail, .. } = err else {
        panic!("expected validation error");
    };
    assert_eq!(
        detail.to_string(),
        "body.company_name: field required, body.transcript: ensure this value has at least 10 characters"
    );
}

#[test]
fn integer_loc_segments_render_as_numbers() {
    let body = r#"{"detail":[{"loc":["body","items",2,"name"],"msg":"bad"}]}"#;
    let ApiError::Validation { detail, .. } = classify_rejection(422, body) else {
        panic!("expected validation error");
    };
    assert_eq!(detail.to_string(), "body.items.2.name: bad");
}

#[test]
fn missing_loc_renders_empty_path() {
    let body = r#"{"detail":[{"msg":"something off"}]}"#;
    let ApiError::Validation { detail, .. } = classify_rejection(400, body) else {
        panic!("expected validation error");
    };
    assert_eq!(detail.to_string(), ": something off");
}

// =============================================================
// Classification
// =============================================================

#[test]
fn string_detail_is_validation_message() {
    let err = classify_rejection(500, r#"{"detail":"Failed to create transcript"}"#);
    assert_eq!(
        err,
        ApiError::Validation { status: 500, detail: ErrorDetail::Message("Failed to create transcript".into()) }
    );
    assert_eq!(err.status(), Some(500));
}

#[test]
fn json_without_detail_is_status_error() {
    let err = classify_rejection(502, r#"{"error":"bad gateway"}"#);
    assert!(matches!(err, ApiError::Network(NetworkError::Status { status: 502, .. })));
    assert_eq!(err.status(), Some(502));
}

#[test]
fn empty_string_detail_is_status_error() {
    let err = classify_rejection(400, r#"{"detail":""}"#);
    assert!(matches!(err, ApiError::Network(NetworkError::Status { .. })));
}

#[test]
fn empty_detail_list_is_status_error() {
    let err = classify_rejection(422, r#"{"detail":[]}"#);
    assert!(matches!(err, ApiError::Network(NetworkError::Status { .. })));
}

#[test]
fn malformed_detail_list_is_status_error() {
    let err = classify_rejection(422, r#"{"detail":[{"unexpected":true}]}"#);
    assert!(matches!(err, ApiError::Network(NetworkError::Status { .. })));
}

#[test]
fn non_json_body_is_decode_error() {
    let err = classify_rejection(503, "<html>Service Unavailable</html>");
    assert!(matches!(err, ApiError::Network(NetworkError::Decode(_))));
    assert_eq!(err.status(), None);
}

#[test]
fn transport_error_has_no_status() {
    let err: ApiError = NetworkError::Transport("connection refused".into()).into();
    assert_eq!(err.status(), None);
    assert_eq!(err.to_string(), "request failed: connection refused");
}
