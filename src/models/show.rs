use serde::Deserialize;

use super::{deserialize_nullable_string, deserialize_rating};

/// One raw item from the popular TV shows endpoint (consumed, not owned).
///
/// Wire aliases follow the TMDB field names: `poster_path` for the image
/// path, `vote_average` for the rating. Missing or null fields decode to
/// empty strings so partial data never breaks the stream.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct ShowResponseItem {
    #[serde(default)]
    pub name: String,
    #[serde(
        default,
        alias = "poster_path",
        deserialize_with = "deserialize_nullable_string"
    )]
    pub image_url: String,
    #[serde(
        default,
        alias = "vote_average",
        deserialize_with = "deserialize_rating"
    )]
    pub rating: String,
}

/// One page of the popular TV shows response.
///
/// Only `results` is consumed downstream; the paging metadata is part of the
/// wire contract and kept for callers that page manually.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct PopularShowsResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub results: Vec<ShowResponseItem>,
}

impl PopularShowsResponse {
    /// Build a single-page response from raw items. Test and fixture helper.
    pub fn with_results(results: Vec<ShowResponseItem>) -> Self {
        Self {
            page: 1,
            total_pages: 1,
            total_results: results.len() as u32,
            results,
        }
    }
}

/// View-ready projection of one show. Created only by the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowItem {
    pub name: String,
    pub image_url: String,
    pub rating: String,
}
