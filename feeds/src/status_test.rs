use super::*;

#[test]
fn default_is_none() {
    assert_eq!(StatusMessage::default(), StatusMessage::None);
    assert!(StatusMessage::default().text().is_none());
}

#[test]
fn error_and_success_carry_text() {
    let err = StatusMessage::error("Failed to delete transcript");
    assert!(err.is_error());
    assert!(!err.is_success());
    assert_eq!(err.text(), Some("Failed to delete transcript"));

    let ok = StatusMessage::success("Transcript deleted successfully");
    assert!(ok.is_success());
    assert_eq!(ok.text(), Some("Transcript deleted successfully"));
}

#[test]
fn variants_are_distinct_for_same_text() {
    assert_ne!(StatusMessage::error("x"), StatusMessage::success("x"));
}
