//! Observable state slot driving the popular shows feed.
//!
//! The viewmodel owns a single "current state" slot plus a broadcaster.
//! `fetch` is fire-and-forget: a spawned task drives the use-case stream and
//! republishes each emission as a fresh [`FeedViewState`] to every attached
//! observer, in publication order. Lifecycle binding is an external concern;
//! observers are plain broadcast receivers with explicit attach (subscribe)
//! and detach (drop).

use std::sync::{Arc, Mutex};

use futures_util::StreamExt;
use tokio::sync::broadcast;

use crate::domain::FetchPopularShowsUseCase;
use crate::view_state::FeedViewState;

/// Buffered states per observer before a slow observer starts lagging.
const STATE_CHANNEL_CAPACITY: usize = 32;

/// Shared publish slot: latest state plus fan-out to observers.
///
/// Publication is atomic per state (slot update under the lock, then a
/// broadcast send), so concurrent fetches interleave at whole-state
/// granularity and the most recently published state wins.
#[derive(Clone)]
struct StateSlot {
    current: Arc<Mutex<Option<FeedViewState>>>,
    sender: broadcast::Sender<FeedViewState>,
}

impl StateSlot {
    fn new() -> Self {
        let (sender, _) = broadcast::channel(STATE_CHANNEL_CAPACITY);
        Self {
            current: Arc::new(Mutex::new(None)),
            sender,
        }
    }

    fn publish(&self, state: FeedViewState) {
        *self.current.lock().unwrap() = Some(state.clone());
        // Send only fails when no observer is attached; the slot still holds
        // the state for late subscribers querying current_state.
        let _ = self.sender.send(state);
    }
}

/// Viewmodel for the popular TV shows feed.
///
/// State machine per fetch: idle -> LOADING -> (SUCCESS | ERROR) -> idle,
/// ready for the next call. A `fetch` issued while a previous one is still in
/// flight does not cancel it; both streams publish and the last write wins at
/// the slot. Dropping a receiver detaches that observer only - it never
/// cancels an in-flight fetch.
pub struct PopularShowsViewModel {
    use_case: Arc<FetchPopularShowsUseCase>,
    slot: StateSlot,
}

impl PopularShowsViewModel {
    pub fn new(use_case: FetchPopularShowsUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
            slot: StateSlot::new(),
        }
    }

    /// Attach an observer. It receives every state published after this
    /// call, in publication order; earlier states are not replayed.
    pub fn observe_state(&self) -> broadcast::Receiver<FeedViewState> {
        self.slot.sender.subscribe()
    }

    /// The most recently published state, or `None` before the first fetch.
    pub fn current_state(&self) -> Option<FeedViewState> {
        self.slot.current.lock().unwrap().clone()
    }

    /// Start a fetch for `page` (1-based). Fire-and-forget; the outcome is
    /// delivered through the state stream.
    pub fn fetch(&self, page: u32) {
        tracing::debug!(page, "popular shows fetch requested");
        let use_case = Arc::clone(&self.use_case);
        let slot = self.slot.clone();
        tokio::spawn(async move {
            let mut states = use_case.fetch(page);
            while let Some(resource) = states.next().await {
                slot.publish(FeedViewState::new(resource));
            }
            tracing::debug!(page, "popular shows fetch stream completed");
        });
    }
}
