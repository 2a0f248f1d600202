use super::*;
use time::macros::{date, datetime};

#[test]
fn transcript_record_deserializes_service_body() {
    let json = serde_json::json!({
        "id": 1,
        "company_name": "Acme",
        "attendees": "Jo, Al",
        "date": "2024-01-05",
        "transcript": "hello there",
        "insight": "**What I Did Well:** ...",
        "created_at": "2024-01-05T10:00:00.123456+00:00",
        "content_type": "transcript"
    });
    let record: TranscriptRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.id(), 1);
    assert_eq!(record.date, date!(2024 - 01 - 05));
    assert_eq!(record.created_at.date(), date!(2024 - 01 - 05));
    assert_eq!(record.content_type, "transcript");
}

#[test]
fn transcript_record_defaults_missing_content_type() {
    let json = serde_json::json!({
        "id": 7,
        "company_name": "Acme",
        "attendees": "Jo",
        "date": "2024-02-01",
        "transcript": "t",
        "insight": "i",
        "created_at": "2024-02-01T00:00:00Z"
    });
    let record: TranscriptRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.content_type, "transcript");
}

#[test]
fn icebreaker_record_deserializes_service_body() {
    let json = serde_json::json!({
        "id": 3,
        "prospect_name": "Dana",
        "company_name": "Globex",
        "linkedin_bio": "VP Sales at Globex",
        "pitch_deck": "Our deck",
        "role_level": "VP",
        "icebreaker_analysis": "report",
        "created_at": "2024-03-01T09:30:00Z"
    });
    let record: IcebreakerRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.id(), 3);
    assert_eq!(record.role_level, "VP");
    assert_eq!(record.content_type, "linkedin_icebreaker");
    assert_eq!(record.created_at(), datetime!(2024-03-01 09:30:00 UTC));
}

#[test]
fn timestamp_without_offset_is_read_as_utc() {
    let parsed = timestamp::parse("2024-03-01T09:30:00.5").unwrap();
    assert_eq!(parsed, datetime!(2024-03-01 09:30:00.5 UTC));
}

#[test]
fn timestamp_rejects_garbage() {
    assert!(timestamp::parse("yesterday").is_none());
}

#[test]
fn record_with_bad_date_fails_to_decode() {
    let json = serde_json::json!({
        "id": 1,
        "company_name": "Acme",
        "attendees": "Jo",
        "date": "05/01/2024",
        "transcript": "t",
        "insight": "i",
        "created_at": "2024-02-01T00:00:00Z"
    });
    assert!(serde_json::from_value::<TranscriptRecord>(json).is_err());
}
