//! Sync controller: the operation state machine.
//!
//! DESIGN
//! ======
//! The controller owns both collection stores, both drafts, the shared
//! status slot, and the set of in-flight actions. Every mutation happens in a
//! short critical section that never spans an `.await`, so while several
//! network calls may be outstanding at once, exactly one completion writes
//! state at any instant.
//!
//! Each logical action (create per kind, delete per kind and id) moves
//! `Idle → Submitting → {Applied, Failed}`. A dispatch for an action that is
//! already `Submitting` is refused before any network call; terminal states
//! can be re-dispatched immediately. Dropping a submit future mid-request
//! returns its key to `Idle`.
//!
//! No failure escapes: every outcome lands as a status message, and the
//! stores only change on acknowledged success.
//!
//! A list response can land after a create or delete that was acknowledged
//! while the list was in flight. Each lane journals acknowledged mutations
//! while any load is outstanding, and a landing list replays the entries
//! recorded since it was sent, so the store never loses an acknowledged
//! outcome to an older snapshot.
//!
//! TRADE-OFFS
//! ==========
//! The status slot is last-write-wins. Two operations finishing out of
//! submission order can leave the message of the earlier-submitted one.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::client::ResourceApi;
use crate::error::{ApiError, NetworkError};
use crate::form::{Draft, FormState};
use crate::kind::{Icebreakers, Resource, ResourceKind, Transcripts};
use crate::records::{Record, RecordId};
use crate::status::StatusMessage;
use crate::store::CollectionStore;

/// Status text for failures that never got a usable answer from the service.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check if the backend is running.";

/// HTTP status treated as "already deleted" on delete.
const NOT_FOUND: u16 = 404;

// =============================================================================
// ACTIONS
// =============================================================================

/// Identity of one logical action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKey {
    Create(ResourceKind),
    Delete(ResourceKind, RecordId),
}

/// Lifecycle of one action key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpState {
    #[default]
    Idle,
    Submitting,
    Applied,
    Failed,
}

/// Result of asking the controller to run an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Applied,
    Failed,
    /// The same action was already submitting; nothing was sent.
    AlreadyInFlight,
}

// =============================================================================
// LANES
// =============================================================================

/// An acknowledged store change, kept for replay over a late list.
#[derive(Debug)]
enum Acked<T> {
    Created(T),
    Deleted(RecordId),
}

/// Store plus draft for one resource kind.
#[derive(Debug)]
pub struct Lane<R: Resource> {
    store: CollectionStore<R::Record>,
    form: FormState<R::Draft>,
    loads_in_flight: usize,
    journal: Vec<Acked<R::Record>>,
}

impl<R: Resource> Default for Lane<R> {
    fn default() -> Self {
        Self {
            store: CollectionStore::default(),
            form: FormState::default(),
            loads_in_flight: 0,
            journal: Vec::new(),
        }
    }
}

impl<R: Resource> Lane<R> {
    /// Returns the journal position the new load replays from.
    fn begin_load(&mut self) -> usize {
        self.loads_in_flight += 1;
        self.journal.len()
    }

    fn end_load(&mut self) {
        self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
        if self.loads_in_flight == 0 {
            self.journal.clear();
        }
    }

    /// Replace the store with a listed snapshot, then reapply what was
    /// acknowledged after the snapshot was requested.
    fn apply_listed(&mut self, records: Vec<R::Record>, since: usize) {
        self.store.replace_all(records);
        for acked in self.journal.get(since..).unwrap_or_default() {
            match acked {
                Acked::Created(record) => {
                    self.store.apply_created(record.clone());
                }
                Acked::Deleted(id) => {
                    self.store.apply_deleted(*id);
                }
            }
        }
    }

    fn apply_created(&mut self, record: R::Record) -> bool {
        if self.loads_in_flight > 0 {
            self.journal.push(Acked::Created(record.clone()));
        }
        self.store.apply_created(record)
    }

    fn apply_deleted(&mut self, id: RecordId) {
        if self.loads_in_flight > 0 {
            self.journal.push(Acked::Deleted(id));
        }
        self.store.apply_deleted(id);
    }
}

/// Both lanes, addressed by kind through [`Mirrored`].
#[derive(Debug, Default)]
pub struct Lanes {
    transcripts: Lane<Transcripts>,
    icebreakers: Lane<Icebreakers>,
}

/// A resource kind the controller keeps a lane for.
pub trait Mirrored: Resource + Sized {
    fn lane(lanes: &Lanes) -> &Lane<Self>;
    fn lane_mut(lanes: &mut Lanes) -> &mut Lane<Self>;
}

impl Mirrored for Transcripts {
    fn lane(lanes: &Lanes) -> &Lane<Self> {
        &lanes.transcripts
    }

    fn lane_mut(lanes: &mut Lanes) -> &mut Lane<Self> {
        &mut lanes.transcripts
    }
}

impl Mirrored for Icebreakers {
    fn lane(lanes: &Lanes) -> &Lane<Self> {
        &lanes.icebreakers
    }

    fn lane_mut(lanes: &mut Lanes) -> &mut Lane<Self> {
        &mut lanes.icebreakers
    }
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Default)]
struct SyncState {
    lanes: Lanes,
    status: StatusMessage,
    actions: HashMap<ActionKey, OpState>,
}

impl SyncState {
    /// Mark `key` as submitting. Returns `false` if it already was.
    fn begin(&mut self, key: ActionKey) -> bool {
        if self.actions.get(&key) == Some(&OpState::Submitting) {
            return false;
        }
        self.actions.insert(key, OpState::Submitting);
        true
    }

    fn finish(&mut self, key: ActionKey, state: OpState) -> Dispatch {
        self.actions.insert(key, state);
        if state == OpState::Applied {
            Dispatch::Applied
        } else {
            Dispatch::Failed
        }
    }
}

/// Runs `undo` against the state unless disarmed, so a future dropped
/// mid-request does not leave its bookkeeping behind.
struct Rollback<'a, F: FnOnce(&mut SyncState)> {
    state: &'a Mutex<SyncState>,
    undo: Option<F>,
}

impl<'a, F: FnOnce(&mut SyncState)> Rollback<'a, F> {
    fn new(state: &'a Mutex<SyncState>, undo: F) -> Self {
        Self { state, undo: Some(undo) }
    }

    fn disarm(mut self) {
        self.undo = None;
    }
}

impl<F: FnOnce(&mut SyncState)> Drop for Rollback<'_, F> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            undo(&mut state);
        }
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Orchestrates loads, creates, and deletes for both resource kinds.
///
/// Cheap to clone; clones share the same state and API client.
pub struct SyncController<A> {
    api: Arc<A>,
    state: Arc<Mutex<SyncState>>,
}

impl<A> Clone for SyncController<A> {
    fn clone(&self) -> Self {
        Self { api: Arc::clone(&self.api), state: Arc::clone(&self.state) }
    }
}

impl<A> SyncController<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self { api: Arc::new(api), state: Arc::new(Mutex::new(SyncState::default())) }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut SyncState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Merge one value into the kind's draft.
    pub fn set_field<R: Mirrored>(&self, field: <R::Draft as Draft>::Field, value: impl Into<String>) {
        let value = value.into();
        self.with_state(|s| R::lane_mut(&mut s.lanes).form.set_field(field, value));
    }

    #[must_use]
    pub fn draft<R: Mirrored>(&self) -> R::Draft {
        self.with_state(|s| R::lane(&s.lanes).form.draft().clone())
    }

    /// Confirmed records for the kind, newest creates first.
    #[must_use]
    pub fn records<R: Mirrored>(&self) -> Vec<R::Record> {
        self.with_state(|s| R::lane(&s.lanes).store.items().to_vec())
    }

    /// Why the kind's initial load failed, if it did.
    #[must_use]
    pub fn load_error<R: Mirrored>(&self) -> Option<String> {
        self.with_state(|s| R::lane(&s.lanes).store.load_error().map(ToOwned::to_owned))
    }

    #[must_use]
    pub fn status(&self) -> StatusMessage {
        self.with_state(|s| s.status.clone())
    }

    #[must_use]
    pub fn action_state(&self, key: ActionKey) -> OpState {
        self.with_state(|s| s.actions.get(&key).copied().unwrap_or_default())
    }

    #[must_use]
    pub fn is_in_flight(&self, key: ActionKey) -> bool {
        self.action_state(key) == OpState::Submitting
    }
}

impl<A> SyncController<A>
where
    A: ResourceApi<Transcripts> + ResourceApi<Icebreakers> + 'static,
{
    /// Load both collections concurrently. A failure on one kind is recorded
    /// for that kind only and never blocks the other.
    pub async fn bootstrap(&self) {
        futures::join!(self.load::<Transcripts>(), self.load::<Icebreakers>());
    }

    async fn load<R: Mirrored>(&self)
    where
        A: ResourceApi<R>,
    {
        let since = self.with_state(|s| R::lane_mut(&mut s.lanes).begin_load());
        let rollback = Rollback::new(&self.state, |s: &mut SyncState| R::lane_mut(&mut s.lanes).end_load());

        let result = <A as ResourceApi<R>>::list(&*self.api).await;

        rollback.disarm();
        self.with_state(|s| {
            match result {
                Ok(records) => {
                    info!(collection = R::KIND.plural(), count = records.len(), "collection loaded");
                    R::lane_mut(&mut s.lanes).apply_listed(records, since);
                }
                Err(e) => {
                    warn!(collection = R::KIND.plural(), error = %e, "collection load failed");
                    let message = R::KIND.load_failure_message();
                    R::lane_mut(&mut s.lanes).store.mark_load_failed(message);
                    s.status = StatusMessage::error(message);
                }
            }
            R::lane_mut(&mut s.lanes).end_load();
        });
    }

    /// Submit the kind's current draft.
    ///
    /// On success the record is prepended and the draft reset; on failure the
    /// draft is left untouched so it can be corrected.
    pub async fn submit_create<R: Mirrored>(&self) -> Dispatch
    where
        A: ResourceApi<R>,
    {
        let key = ActionKey::Create(R::KIND);
        let draft = self.with_state(|s| {
            if !s.begin(key) {
                return None;
            }
            s.status = StatusMessage::None;
            Some(R::lane(&s.lanes).form.draft().clone())
        });
        let Some(draft) = draft else {
            debug!(kind = %R::KIND, "create already in flight");
            return Dispatch::AlreadyInFlight;
        };

        let rollback = Rollback::new(&self.state, move |s: &mut SyncState| {
            s.actions.remove(&key);
        });
        let result = <A as ResourceApi<R>>::create(&*self.api, &draft).await;
        rollback.disarm();

        self.with_state(|s| match result {
            Ok(record) => {
                info!(kind = %R::KIND, id = record.id(), "record created");
                let lane = R::lane_mut(&mut s.lanes);
                if !lane.apply_created(record) {
                    debug!(kind = %R::KIND, "duplicate create ignored");
                }
                lane.form.reset();
                s.status = StatusMessage::success(R::KIND.create_success_message());
                s.finish(key, OpState::Applied)
            }
            Err(e) => {
                warn!(kind = %R::KIND, error = %e, "create failed");
                s.status = StatusMessage::error(create_failure_text(R::KIND, &e));
                s.finish(key, OpState::Failed)
            }
        })
    }

    /// Delete one record. The store only changes once the service confirms.
    pub async fn submit_delete<R: Mirrored>(&self, id: RecordId) -> Dispatch
    where
        A: ResourceApi<R>,
    {
        let key = ActionKey::Delete(R::KIND, id);
        if !self.with_state(|s| s.begin(key)) {
            debug!(kind = %R::KIND, id, "delete already in flight");
            return Dispatch::AlreadyInFlight;
        }

        let rollback = Rollback::new(&self.state, move |s: &mut SyncState| {
            s.actions.remove(&key);
        });
        let result = match <A as ResourceApi<R>>::delete(&*self.api, id).await {
            Err(e) if e.status() == Some(NOT_FOUND) => {
                info!(kind = %R::KIND, id, "record already gone on server");
                Ok(())
            }
            other => other,
        };
        rollback.disarm();

        self.with_state(|s| match result {
            Ok(()) => {
                info!(kind = %R::KIND, id, "record deleted");
                R::lane_mut(&mut s.lanes).apply_deleted(id);
                s.status = StatusMessage::success(R::KIND.delete_success_message());
                s.finish(key, OpState::Applied)
            }
            Err(e) => {
                warn!(kind = %R::KIND, id, error = %e, "delete failed");
                s.status = StatusMessage::error(R::KIND.delete_failure_message());
                s.finish(key, OpState::Failed)
            }
        })
    }
}

/// Status text for a failed create.
fn create_failure_text(kind: ResourceKind, err: &ApiError) -> String {
    match err {
        ApiError::Validation { detail, .. } => detail.to_string(),
        ApiError::Network(NetworkError::Status { .. }) => kind.create_fallback_message().to_owned(),
        ApiError::Network(NetworkError::Transport(_) | NetworkError::Decode(_)) => {
            NETWORK_ERROR_MESSAGE.to_owned()
        }
    }
}
