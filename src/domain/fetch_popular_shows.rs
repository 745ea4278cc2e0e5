//! Use case: fetch one page of popular shows as view-ready resources.

use std::sync::Arc;

use futures_util::StreamExt;

use crate::mapper::ShowMapper;
use crate::models::ShowItem;
use crate::resource::ResourceStream;
use crate::traits::ShowsRepository;

/// Composes the repository port with the mapper.
///
/// Every resource from the repository is re-emitted with the same status and
/// error; only the SUCCESS payload changes type, via [`ShowMapper`]. The
/// mapper never runs for LOADING or ERROR emissions.
pub struct FetchPopularShowsUseCase {
    repository: Arc<dyn ShowsRepository>,
    mapper: ShowMapper,
}

impl FetchPopularShowsUseCase {
    pub fn new(repository: Arc<dyn ShowsRepository>, mapper: ShowMapper) -> Self {
        Self { repository, mapper }
    }

    /// Fetch one page (1-based); emissions follow the repository contract
    /// with the payload mapped to view items.
    pub fn fetch(&self, page: u32) -> ResourceStream<Vec<ShowItem>> {
        let mapper = self.mapper;
        self.repository
            .fetch_popular(page)
            .map(move |resource| resource.map(|response| mapper.map_response(&response)))
            .boxed()
    }
}
