//! Concrete implementations of the port traits.
//!
//! # Adapters
//!
//! - [`TmdbClient`] - reqwest-backed [`crate::traits::ShowsApi`] against the
//!   TMDB v3 API
//! - [`ApiShowsRepository`] - [`crate::traits::ShowsRepository`] over any
//!   `ShowsApi`, discharging the loading-first / single-terminal contract
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockShowsApi`] - queued canned outcomes, recorded pages
//! - [`mock::MockShowsRepository`] - scripted resource sequences

pub mod mock;
pub mod repository;
pub mod tmdb;

pub use repository::ApiShowsRepository;
pub use tmdb::TmdbClient;
