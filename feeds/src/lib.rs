//! Client-side synchronization core for the Insight Hub service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The remote service owns two collections: call transcripts and LinkedIn
//! icebreakers. This crate mirrors both, dispatches create/delete intents,
//! and folds every outcome into collection state plus one shared status slot.
//!
//! LAYOUT
//! ======
//! - `client`: HTTP wrapper per resource kind behind the `ResourceApi` seam.
//! - `form` / `store` / `status`: the plain state holders.
//! - `controller`: the operation state machine tying them together.
//! - `feed`: read-side helpers for rendering the mirrored collections.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod feed;
pub mod form;
pub mod kind;
pub mod records;
pub mod status;
pub mod store;

pub use client::{HttpResourceClient, ResourceApi};
pub use config::SyncConfig;
pub use controller::{ActionKey, Dispatch, OpState, SyncController};
pub use error::{ApiError, ErrorDetail, NetworkError};
pub use kind::{Icebreakers, Resource, ResourceKind, Transcripts};
pub use records::{IcebreakerRecord, RecordId, TranscriptRecord};
pub use status::StatusMessage;
