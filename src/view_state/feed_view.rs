//! Snapshot of the popular shows feed for UI rendering.

use crate::error::FetchError;
use crate::models::ShowItem;
use crate::resource::{Resource, Status};

/// Immutable snapshot wrapping exactly one resource.
///
/// Created fresh for every emission, never mutated, discarded when the next
/// state supersedes it. All accessors are derived and side-effect free.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedViewState {
    resource: Resource<Vec<ShowItem>>,
}

impl FeedViewState {
    pub fn new(resource: Resource<Vec<ShowItem>>) -> Self {
        Self { resource }
    }

    /// Status of the wrapped resource.
    pub fn status(&self) -> Status {
        self.resource.status()
    }

    /// The shows to render; empty when no data is present.
    pub fn shows(&self) -> &[ShowItem] {
        self.resource.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// True while the fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.resource.status() == Status::Loading
    }

    /// The failure message to render, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.resource.error().map(FetchError::message)
    }

    /// True when an error message should be shown to the user.
    pub fn should_show_error(&self) -> bool {
        self.resource.error().is_some()
    }
}
