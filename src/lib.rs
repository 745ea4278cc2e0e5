//! Showfeed - popular TV shows feed pipeline.
//!
//! A small presentation-layer core: fetch one page of popular TV shows from a
//! TMDB-shaped API, map raw response items into view-ready items, and expose a
//! three-state (loading/success/error) view state to observers.
//!
//! The pipeline is a single-producer stream per fetch: a LOADING resource is
//! emitted eagerly, then exactly one terminal SUCCESS or ERROR, then the
//! stream completes. See [`resource::Resource`] for the envelope and
//! [`viewmodel::PopularShowsViewModel`] for the observable state slot.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod mapper;
pub mod models;
pub mod resource;
pub mod traits;
pub mod view_state;
pub mod viewmodel;
