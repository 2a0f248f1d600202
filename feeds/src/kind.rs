//! Resource kinds and their fixed per-kind wording.
//!
//! DESIGN
//! ======
//! The two kinds are structurally parallel, so the controller is written once
//! against the `Resource` trait and each kind supplies its record type, its
//! draft type, and a `ResourceKind` tag carrying endpoints and messages.

#[cfg(test)]
#[path = "kind_test.rs"]
mod kind_test;

use serde::de::DeserializeOwned;

use crate::form::{Draft, IcebreakerDraft, TranscriptDraft};
use crate::records::{IcebreakerRecord, Record, TranscriptRecord};

/// One of the two independently synchronized collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Transcript,
    Icebreaker,
}

impl ResourceKind {
    /// Collection path on the service, relative to the base URL.
    #[must_use]
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Transcript => "/transcripts",
            Self::Icebreaker => "/linkedin-icebreakers",
        }
    }

    #[must_use]
    pub fn item_path(self, id: crate::records::RecordId) -> String {
        format!("{}/{id}", self.collection_path())
    }

    /// Lowercase plural used in log fields.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Transcript => "transcripts",
            Self::Icebreaker => "icebreakers",
        }
    }

    #[must_use]
    pub fn create_success_message(self) -> &'static str {
        match self {
            Self::Transcript => "Transcript analyzed successfully!",
            Self::Icebreaker => "LinkedIn icebreaker generated successfully!",
        }
    }

    /// Shown when a create is rejected without a readable `detail`.
    #[must_use]
    pub fn create_fallback_message(self) -> &'static str {
        match self {
            Self::Transcript => "Failed to analyze transcript",
            Self::Icebreaker => "Failed to generate icebreaker",
        }
    }

    #[must_use]
    pub fn delete_success_message(self) -> &'static str {
        match self {
            Self::Transcript => "Transcript deleted successfully",
            Self::Icebreaker => "Icebreaker deleted successfully",
        }
    }

    #[must_use]
    pub fn delete_failure_message(self) -> &'static str {
        match self {
            Self::Transcript => "Failed to delete transcript",
            Self::Icebreaker => "Failed to delete icebreaker",
        }
    }

    #[must_use]
    pub fn load_failure_message(self) -> &'static str {
        match self {
            Self::Transcript => "Failed to fetch transcripts",
            Self::Icebreaker => "Failed to fetch icebreakers",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transcript => f.write_str("transcript"),
            Self::Icebreaker => f.write_str("icebreaker"),
        }
    }
}

/// Static description of one resource kind.
pub trait Resource: Send + Sync + 'static {
    const KIND: ResourceKind;
    type Record: Record + DeserializeOwned;
    type Draft: Draft;
}

/// Marker for the transcript collection.
#[derive(Clone, Copy, Debug)]
pub struct Transcripts;

/// Marker for the LinkedIn icebreaker collection.
#[derive(Clone, Copy, Debug)]
pub struct Icebreakers;

impl Resource for Transcripts {
    const KIND: ResourceKind = ResourceKind::Transcript;
    type Record = TranscriptRecord;
    type Draft = TranscriptDraft;
}

impl Resource for Icebreakers {
    const KIND: ResourceKind = ResourceKind::Icebreaker;
    type Record = IcebreakerRecord;
    type Draft = IcebreakerDraft;
}
