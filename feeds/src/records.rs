//! Server-confirmed record types for both resource kinds.
//!
//! DESIGN
//! ======
//! These mirror the service's response bodies. Records only ever enter the
//! client through a successful `list` or `create` response, so every field
//! here is server-owned and immutable once received. The generated text
//! fields (`insight`, `icebreaker_analysis`) are opaque strings.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// Server-assigned record identifier.
pub type RecordId = i64;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Behavior shared by records held in a collection store.
pub trait Record: Clone + std::fmt::Debug + PartialEq + Send + Sync + 'static {
    fn id(&self) -> RecordId;
    fn created_at(&self) -> OffsetDateTime;
}

/// An analyzed sales-call transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub id: RecordId,
    pub company_name: String,
    pub attendees: String,
    /// Calendar date of the call.
    #[serde(with = "iso_date")]
    pub date: Date,
    pub transcript: String,
    /// Generated feedback on the call.
    #[serde(default)]
    pub insight: String,
    #[serde(with = "timestamp")]
    pub created_at: OffsetDateTime,
    #[serde(default = "transcript_content_type")]
    pub content_type: String,
}

/// A generated LinkedIn icebreaker for one prospect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcebreakerRecord {
    pub id: RecordId,
    pub prospect_name: String,
    pub company_name: String,
    pub linkedin_bio: String,
    pub pitch_deck: String,
    pub role_level: String,
    /// Generated sales-intelligence report.
    #[serde(default)]
    pub icebreaker_analysis: String,
    #[serde(with = "timestamp")]
    pub created_at: OffsetDateTime,
    #[serde(default = "icebreaker_content_type")]
    pub content_type: String,
}

impl Record for TranscriptRecord {
    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}

impl Record for IcebreakerRecord {
    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}

fn transcript_content_type() -> String {
    "transcript".to_owned()
}

fn icebreaker_content_type() -> String {
    "linkedin_icebreaker".to_owned()
}

/// RFC 3339 timestamps, tolerating offset-less values (read as UTC).
mod timestamp {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::format_description::well_known::{Iso8601, Rfc3339};
    use time::{OffsetDateTime, PrimitiveDateTime};

    pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rendered = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&rendered)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub(super) fn parse(raw: &str) -> Option<OffsetDateTime> {
        if let Ok(value) = OffsetDateTime::parse(raw, &Rfc3339) {
            return Some(value);
        }
        PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT)
            .ok()
            .map(PrimitiveDateTime::assume_utc)
    }
}
