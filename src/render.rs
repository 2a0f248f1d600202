//! Plain-text rendering of feeds and the status slot.
//!
//! Pure functions over a `FeedSnapshot`; nothing here talks to the service.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write;

use feeds::StatusMessage;
use feeds::feed::{FeedEntry, FeedSnapshot, format_display_date};
use feeds::{IcebreakerRecord, TranscriptRecord};

const TRANSCRIPT_PREVIEW_CHARS: usize = 500;
const PROFILE_PREVIEW_CHARS: usize = 200;

const NO_TRANSCRIPTS: &str = "No transcripts analyzed yet. Upload your first transcript to get started!";
const NO_ICEBREAKERS: &str =
    "No icebreakers generated yet. Create your first LinkedIn icebreaker to get started!";

/// Which feed(s) to print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    /// Transcripts, then icebreakers.
    #[default]
    All,
    Transcripts,
    Icebreakers,
    /// Both kinds interleaved newest-first.
    Combined,
}

/// One status line, or `None` when the slot is empty.
pub fn status_line(status: &StatusMessage) -> Option<String> {
    match status {
        StatusMessage::None => None,
        StatusMessage::Error(text) => Some(format!("error: {text}")),
        StatusMessage::Success(text) => Some(format!("success: {text}")),
    }
}

pub fn render_view(snapshot: &FeedSnapshot, view: View) -> String {
    match view {
        View::All => {
            let mut out = transcript_feed(&snapshot.transcripts, snapshot.transcript_load_error.as_deref());
            out.push('\n');
            out.push_str(&icebreaker_feed(&snapshot.icebreakers, snapshot.icebreaker_load_error.as_deref()));
            out
        }
        View::Transcripts => transcript_feed(&snapshot.transcripts, snapshot.transcript_load_error.as_deref()),
        View::Icebreakers => icebreaker_feed(&snapshot.icebreakers, snapshot.icebreaker_load_error.as_deref()),
        View::Combined => combined_feed(&snapshot.combined()),
    }
}

fn transcript_feed(records: &[TranscriptRecord], load_error: Option<&str>) -> String {
    let mut out = heading("Insights Feed", records.len(), load_error);
    if records.is_empty() {
        let _ = writeln!(out, "{NO_TRANSCRIPTS}");
    }
    for record in records {
        out.push_str(&transcript_card(record));
    }
    out
}

fn icebreaker_feed(records: &[IcebreakerRecord], load_error: Option<&str>) -> String {
    let mut out = heading("Icebreaker Feed", records.len(), load_error);
    if records.is_empty() {
        let _ = writeln!(out, "{NO_ICEBREAKERS}");
    }
    for record in records {
        out.push_str(&icebreaker_card(record));
    }
    out
}

fn combined_feed(entries: &[FeedEntry]) -> String {
    let mut out = heading("Combined Feed", entries.len(), None);
    for entry in entries {
        match entry {
            FeedEntry::Transcript(record) => out.push_str(&transcript_card(record)),
            FeedEntry::Icebreaker(record) => out.push_str(&icebreaker_card(record)),
        }
    }
    out
}

fn heading(title: &str, count: usize, load_error: Option<&str>) -> String {
    let mut out = format!("== {title} ({count}) ==\n");
    if let Some(message) = load_error {
        let _ = writeln!(out, "({message})");
    }
    out
}

pub fn transcript_card(record: &TranscriptRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n[transcript #{}] {}", record.id, record.company_name);
    let _ = writeln!(out, "  Date: {}  Attendees: {}", format_display_date(record.date), record.attendees);
    let _ = writeln!(out, "  AI Insight:\n{}", indent(&record.insight));
    let _ = writeln!(out, "  Transcript:\n{}", indent(&preview(&record.transcript, TRANSCRIPT_PREVIEW_CHARS)));
    let _ = writeln!(out, "  Created: {}", format_display_date(record.created_at.date()));
    out
}

pub fn icebreaker_card(record: &IcebreakerRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n[icebreaker #{}] {} - {}", record.id, record.prospect_name, record.company_name);
    let _ = writeln!(out, "  Role: {} | LinkedIn Icebreaker Analysis", record.role_level);
    let _ = writeln!(out, "  Analysis:\n{}", indent(&record.icebreaker_analysis));
    let _ = writeln!(out, "  LinkedIn Bio:\n{}", indent(&preview(&record.linkedin_bio, PROFILE_PREVIEW_CHARS)));
    let _ = writeln!(out, "  Pitch Deck:\n{}", indent(&preview(&record.pitch_deck, PROFILE_PREVIEW_CHARS)));
    let _ = writeln!(out, "  Created: {}", format_display_date(record.created_at.date()));
    out
}

/// First `max_chars` characters, with `...` appended when cut.
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
