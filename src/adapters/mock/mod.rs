//! Test doubles for the port traits.
//!
//! These mirror the production adapters closely enough that the domain and
//! viewmodel layers cannot tell them apart: same traits, same contracts,
//! state behind `Arc<Mutex<..>>` so a clone handed to the code under test can
//! still be inspected afterwards.

pub mod api;
pub mod repository;

pub use api::MockShowsApi;
pub use repository::MockShowsRepository;
