//! Port abstractions for dependency injection and testability.
//!
//! The object graph is small and static, so wiring is plain constructor
//! injection over `Arc<dyn Trait>` handles. Production implementations live
//! in `crate::adapters`, test doubles in `crate::adapters::mock`.
//!
//! # Ports
//!
//! - [`ShowsApi`] - raw request/response boundary (one page in, one decoded
//!   response or error out)
//! - [`ShowsRepository`] - resource-stream boundary consumed by the use case

pub mod api;
pub mod repository;

pub use api::ShowsApi;
pub use repository::ShowsRepository;
