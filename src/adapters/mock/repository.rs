//! Mock [`ShowsRepository`] emitting scripted resource sequences.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures_util::stream::{self, StreamExt};

use crate::models::PopularShowsResponse;
use crate::resource::{Resource, ResourceStream};
use crate::traits::ShowsRepository;

/// Scripted [`ShowsRepository`] test double.
///
/// Each `fetch_popular` call pops one script and replays it verbatim as the
/// stream, so tests can exercise the downstream layers with any emission
/// sequence, including ones that deliberately break the repository contract.
#[derive(Debug, Clone, Default)]
pub struct MockShowsRepository {
    scripts: Arc<Mutex<VecDeque<Vec<Resource<PopularShowsResponse>>>>>,
    recorded_pages: Arc<Mutex<Vec<u32>>>,
}

impl MockShowsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the emission sequence for the next `fetch_popular` call.
    pub fn enqueue_script(&self, script: Vec<Resource<PopularShowsResponse>>) {
        self.scripts.lock().unwrap().push_back(script);
    }

    /// Pages requested so far, in call order.
    pub fn recorded_pages(&self) -> Vec<u32> {
        self.recorded_pages.lock().unwrap().clone()
    }
}

impl ShowsRepository for MockShowsRepository {
    fn fetch_popular(&self, page: u32) -> ResourceStream<PopularShowsResponse> {
        self.recorded_pages.lock().unwrap().push(page);
        let script = self.scripts.lock().unwrap().pop_front().unwrap_or_default();
        stream::iter(script).boxed()
    }
}
