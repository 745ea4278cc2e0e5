//! Repository port: the resource-stream boundary.

use crate::models::PopularShowsResponse;
use crate::resource::ResourceStream;

/// Boundary abstraction over the remote data source.
///
/// # Contract
///
/// The returned stream, once polled:
/// - yields a LOADING resource first, eagerly, before any I/O completes;
/// - then yields exactly one terminal resource - SUCCESS with the decoded
///   page, or ERROR with the captured failure - and completes;
/// - never yields after the terminal item;
/// - never propagates a raw transport error; failures become ERROR items.
pub trait ShowsRepository: Send + Sync {
    /// Start a fetch for one page (1-based) of popular TV shows.
    fn fetch_popular(&self, page: u32) -> ResourceStream<PopularShowsResponse>;
}
