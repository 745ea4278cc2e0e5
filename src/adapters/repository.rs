//! Repository adapter over a [`ShowsApi`] port.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};

use crate::models::PopularShowsResponse;
use crate::resource::{with_loading, Resource, ResourceStream};
use crate::traits::{ShowsApi, ShowsRepository};

/// [`ShowsRepository`] implementation that wraps one API call per fetch.
///
/// The single async call is lifted into a one-shot stream, failures are
/// captured into ERROR resources at this boundary, and [`with_loading`]
/// prepends the eager LOADING item. This is where the repository contract
/// (loading first, exactly one terminal item, no raw errors) is discharged.
pub struct ApiShowsRepository {
    api: Arc<dyn ShowsApi>,
}

impl ApiShowsRepository {
    pub fn new(api: Arc<dyn ShowsApi>) -> Self {
        Self { api }
    }
}

impl ShowsRepository for ApiShowsRepository {
    fn fetch_popular(&self, page: u32) -> ResourceStream<PopularShowsResponse> {
        let api = Arc::clone(&self.api);
        let terminal = stream::once(async move {
            match api.popular_shows(page).await {
                Ok(response) => Resource::Success(response),
                Err(err) => {
                    tracing::warn!(page, error = %err, "popular shows fetch failed");
                    Resource::Error(err)
                }
            }
        });
        with_loading(terminal).boxed()
    }
}
