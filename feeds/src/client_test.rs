use super::*;
use crate::records::{IcebreakerRecord, TranscriptRecord};

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(201));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(301));
    assert!(!is_success(404));
    assert!(!is_success(500));
}

#[test]
fn decode_parses_transcript_list() {
    let body = r#"[{
        "id": 2, "company_name": "Acme", "attendees": "Jo", "date": "2024-01-06",
        "transcript": "t", "insight": "i", "created_at": "2024-01-06T00:00:00Z"
    }]"#;
    let records: Vec<TranscriptRecord> = decode(body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 2);
}

#[test]
fn decode_empty_list() {
    let records: Vec<IcebreakerRecord> = decode("[]").unwrap();
    assert!(records.is_empty());
}

#[test]
fn decode_failure_is_network_decode_error() {
    let err = decode::<Vec<TranscriptRecord>>("not json").unwrap_err();
    assert!(matches!(err, ApiError::Network(NetworkError::Decode(_))));
}

#[test]
fn decode_wrong_shape_is_decode_error() {
    let err = decode::<TranscriptRecord>(r#"{"message":"ok"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Network(NetworkError::Decode(_))));
}

#[test]
fn client_keeps_normalized_base_url() {
    let config = SyncConfig::new("http://127.0.0.1:8000/").unwrap();
    let client = HttpResourceClient::new(&config).unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    assert_eq!(client.url("/transcripts"), "http://127.0.0.1:8000/transcripts");
}
