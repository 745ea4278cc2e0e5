//! Reqwest-backed client for the TMDB v3 API.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::FetchError;
use crate::models::PopularShowsResponse;
use crate::traits::ShowsApi;

/// Default base URL for the TMDB v3 API.
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Production [`ShowsApi`] implementation over `GET /tv/popular`.
pub struct TmdbClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl TmdbClient {
    /// Create a client against the default TMDB base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(TMDB_BASE_URL, api_key)
    }

    /// Create a client against a custom base URL (used by tests to point at
    /// a local mock server).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ShowsApi for TmdbClient {
    async fn popular_shows(&self, page: u32) -> Result<PopularShowsResponse, FetchError> {
        let url = format!("{}/tv/popular", self.base_url);
        let page_param = page.to_string();
        tracing::debug!(page, "requesting popular shows");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("page", page_param.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::new(format!(
                "server error ({}): {}",
                status, message
            )));
        }

        let decoded = response.json::<PopularShowsResponse>().await?;
        tracing::debug!(page, results = decoded.results.len(), "popular shows decoded");
        Ok(decoded)
    }
}
