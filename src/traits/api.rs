//! Raw API boundary trait.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::PopularShowsResponse;

/// The remote popular-shows endpoint, one request per call.
///
/// Implementations own transport and decoding; any failure surfaces as a
/// [`FetchError`]. Timeouts are the transport's concern, not modelled here.
#[async_trait]
pub trait ShowsApi: Send + Sync {
    /// Fetch one page (1-based) of popular TV shows.
    ///
    /// Pages below 1 are rejected by the server and surface as a
    /// [`FetchError`] like any other request failure.
    async fn popular_shows(&self, page: u32) -> Result<PopularShowsResponse, FetchError>;
}
