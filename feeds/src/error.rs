//! Error taxonomy for calls against the service.
//!
//! DESIGN
//! ======
//! Two families, matching what the user can do about them:
//! - `Validation`: the service rejected the input with a readable `detail`.
//!   User-correctable; the draft is kept so it can be fixed and resubmitted.
//! - `Network`: the service was unreachable, answered with something that
//!   is not the expected JSON, or rejected without a readable `detail`.
//!
//! Rejection bodies follow the service's shape:
//! `{"detail": "text"}` or `{"detail": [{"loc": [...], "msg": "..."}]}`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use serde::Deserialize;

/// Errors produced by `ResourceApi` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The service rejected the request with a readable `detail`.
    #[error("rejected with status {status}: {detail}")]
    Validation { status: u16, detail: ErrorDetail },

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl ApiError {
    /// HTTP status of the response, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { status, .. } | Self::Network(NetworkError::Status { status, .. }) => {
                Some(*status)
            }
            Self::Network(_) => None,
        }
    }
}

/// Failures that are not user-correctable beyond retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The request never produced a response (unreachable, timeout, broken body).
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-success status without a recognizable `detail`.
    #[error("unexpected status {status}")]
    Status { status: u16, body: String },

    /// The body was not the JSON this call expects.
    #[error("response decode failed: {0}")]
    Decode(String),
}

// =============================================================================
// DETAIL
// =============================================================================

/// The `detail` of a rejection body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldIssue>),
}

/// One field-level complaint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldIssue {
    #[serde(default)]
    pub loc: Vec<LocSegment>,
    pub msg: String,
}

/// One step of a field path: a key or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    Index(i64),
    Name(String),
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{path}: {}", self.msg)
    }
}

impl fmt::Display for ErrorDetail {
    /// `"a.b: msg, c: msg"` for field lists; the text itself otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(text) => f.write_str(text),
            Self::Fields(issues) => {
                for (index, issue) in issues.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{issue}")?;
                }
                Ok(())
            }
        }
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classify a non-success response by its status and raw body.
#[must_use]
pub fn classify_rejection(status: u16, body: &str) -> ApiError {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return NetworkError::Decode(format!("status {status} with non-JSON body")).into();
    };

    match parse_detail(value.get("detail")) {
        Some(detail) => ApiError::Validation { status, detail },
        None => NetworkError::Status { status, body: body.to_owned() }.into(),
    }
}

fn parse_detail(raw: Option<&serde_json::Value>) -> Option<ErrorDetail> {
    match raw? {
        serde_json::Value::String(text) if !text.is_empty() => Some(ErrorDetail::Message(text.clone())),
        serde_json::Value::Array(items) if !items.is_empty() => {
            let issues = items
                .iter()
                .map(|item| serde_json::from_value::<FieldIssue>(item.clone()))
                .collect::<Result<Vec<_>, _>>()
                .ok()?;
            Some(ErrorDetail::Fields(issues))
        }
        _ => None,
    }
}
