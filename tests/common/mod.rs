//! Common test utilities for integration tests.
//!
//! Provides the canonical fixtures (the "Chernobyl" page used across the
//! suites) and wiring helpers that assemble the full pipeline over mocks.

use std::sync::Arc;

use showfeed::adapters::mock::MockShowsApi;
use showfeed::adapters::ApiShowsRepository;
use showfeed::domain::FetchPopularShowsUseCase;
use showfeed::mapper::ShowMapper;
use showfeed::models::{PopularShowsResponse, ShowResponseItem};
use showfeed::viewmodel::PopularShowsViewModel;

/// Initialize tracing output for a test run. Safe to call repeatedly.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The canonical raw show fixture.
#[allow(dead_code)]
pub fn chernobyl_raw() -> ShowResponseItem {
    ShowResponseItem {
        name: "Chernobyl".to_string(),
        image_url: "/hlLXt2tOPT6RRnjiUmoxyG1LTFi.jpg".to_string(),
        rating: "8.3".to_string(),
    }
}

/// One response page holding `count` copies of the canonical show.
#[allow(dead_code)]
pub fn chernobyl_page(count: usize) -> PopularShowsResponse {
    PopularShowsResponse::with_results(vec![chernobyl_raw(); count])
}

/// The canonical page as TMDB wire JSON, for mock HTTP servers.
#[allow(dead_code)]
pub fn chernobyl_wire_json(count: usize) -> serde_json::Value {
    let item = serde_json::json!({
        "name": "Chernobyl",
        "poster_path": "/hlLXt2tOPT6RRnjiUmoxyG1LTFi.jpg",
        "vote_average": 8.3
    });
    serde_json::json!({
        "page": 1,
        "total_pages": 1,
        "total_results": count,
        "results": vec![item; count]
    })
}

/// Assemble the use case over a mock API (full repository in between).
#[allow(dead_code)]
pub fn use_case_over(api: MockShowsApi) -> FetchPopularShowsUseCase {
    let repository = ApiShowsRepository::new(Arc::new(api));
    FetchPopularShowsUseCase::new(Arc::new(repository), ShowMapper::new())
}

/// Assemble a viewmodel over a mock API.
#[allow(dead_code)]
pub fn view_model_over(api: MockShowsApi) -> PopularShowsViewModel {
    PopularShowsViewModel::new(use_case_over(api))
}
