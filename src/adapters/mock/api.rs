//! Mock [`ShowsApi`] with queued canned outcomes.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::PopularShowsResponse;
use crate::traits::ShowsApi;

/// Configurable [`ShowsApi`] test double.
///
/// Outcomes are consumed in FIFO order, one per call; requested pages are
/// recorded for verification. A call with no outcome configured fails with a
/// descriptive error rather than panicking inside the pipeline.
#[derive(Debug, Clone, Default)]
pub struct MockShowsApi {
    outcomes: Arc<Mutex<VecDeque<Result<PopularShowsResponse, FetchError>>>>,
    recorded_pages: Arc<Mutex<Vec<u32>>>,
}

impl MockShowsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response for the next call.
    pub fn enqueue_ok(&self, response: PopularShowsResponse) {
        self.outcomes.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a failure for the next call.
    pub fn enqueue_err(&self, error: FetchError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Pages requested so far, in call order.
    pub fn recorded_pages(&self) -> Vec<u32> {
        self.recorded_pages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShowsApi for MockShowsApi {
    async fn popular_shows(&self, page: u32) -> Result<PopularShowsResponse, FetchError> {
        self.recorded_pages.lock().unwrap().push(page);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::new("no mock outcome configured")))
    }
}
