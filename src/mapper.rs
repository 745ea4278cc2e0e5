//! Pure raw-to-view transform.

use crate::models::{PopularShowsResponse, ShowItem, ShowResponseItem};

/// Maps raw response items into view-ready [`ShowItem`]s.
///
/// Total and side-effect free: invalid or missing fields were already
/// defaulted at decode time, so there is no failure mode here. Mapping is
/// element-wise, order-preserving and length-preserving.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowMapper;

impl ShowMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map one raw item to its view projection.
    pub fn map_item(&self, raw: &ShowResponseItem) -> ShowItem {
        ShowItem {
            name: raw.name.clone(),
            image_url: raw.image_url.clone(),
            rating: raw.rating.clone(),
        }
    }

    /// Map a whole response page, element-wise.
    pub fn map_response(&self, response: &PopularShowsResponse) -> Vec<ShowItem> {
        response.results.iter().map(|raw| self.map_item(raw)).collect()
    }
}
