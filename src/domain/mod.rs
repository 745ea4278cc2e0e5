//! Domain layer: use cases composing the ports.

mod fetch_popular_shows;

pub use fetch_popular_shows::FetchPopularShowsUseCase;
