//! Read-side helpers for rendering the mirrored collections.
//!
//! Nothing here mutates state: these functions take what the controller
//! currently holds and shape it for display.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use time::Date;
use time::macros::format_description;

use crate::controller::SyncController;
use crate::kind::{Icebreakers, Transcripts};
use crate::records::{IcebreakerRecord, Record, TranscriptRecord};
use crate::status::StatusMessage;

/// One entry of the merged feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedEntry {
    Transcript(TranscriptRecord),
    Icebreaker(IcebreakerRecord),
}

impl FeedEntry {
    #[must_use]
    pub fn created_at(&self) -> time::OffsetDateTime {
        match self {
            Self::Transcript(record) => record.created_at(),
            Self::Icebreaker(record) => record.created_at(),
        }
    }
}

/// Point-in-time copy of everything a view renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub transcripts: Vec<TranscriptRecord>,
    pub icebreakers: Vec<IcebreakerRecord>,
    pub transcript_load_error: Option<String>,
    pub icebreaker_load_error: Option<String>,
    pub status: StatusMessage,
}

impl FeedSnapshot {
    #[must_use]
    pub fn capture<A>(controller: &SyncController<A>) -> Self {
        Self {
            transcripts: controller.records::<Transcripts>(),
            icebreakers: controller.records::<Icebreakers>(),
            transcript_load_error: controller.load_error::<Transcripts>(),
            icebreaker_load_error: controller.load_error::<Icebreakers>(),
            status: controller.status(),
        }
    }

    /// Both kinds merged newest-first.
    #[must_use]
    pub fn combined(&self) -> Vec<FeedEntry> {
        combined_feed(&self.transcripts, &self.icebreakers)
    }
}

/// Merge both collections newest-first by `created_at`.
///
/// Entries with equal timestamps keep transcripts ahead of icebreakers and
/// otherwise preserve each collection's own order.
#[must_use]
pub fn combined_feed(transcripts: &[TranscriptRecord], icebreakers: &[IcebreakerRecord]) -> Vec<FeedEntry> {
    let mut entries = transcripts
        .iter()
        .cloned()
        .map(FeedEntry::Transcript)
        .chain(icebreakers.iter().cloned().map(FeedEntry::Icebreaker))
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    entries
}

/// `Jan 5, 2024`.
#[must_use]
pub fn format_display_date(date: Date) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    date.format(format).unwrap_or_else(|_| date.to_string())
}
