//! Tri-state resource envelope and the loading-injection stream operator.
//!
//! A [`Resource`] is the unit of emission for every fetch: LOADING first, then
//! exactly one terminal SUCCESS or ERROR. It is modelled as a sum type so the
//! "data only on SUCCESS, error only on ERROR" invariant holds by
//! construction; an empty result is `Success` of an empty collection.

use std::future;
use std::pin::Pin;

use futures::Stream;
use futures_util::stream::{self, StreamExt};

use crate::error::FetchError;

/// Status of a [`Resource`]. Exactly one holds per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Success,
    Error,
}

/// Immutable tri-state envelope flowing through the fetch pipeline.
///
/// Produced by the repository layer, consumed read-only downstream. Each new
/// state is a new instance; no component mutates an existing resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    /// The fetch is in flight.
    Loading,
    /// The fetch completed with a payload.
    Success(T),
    /// The fetch failed with a captured error.
    Error(FetchError),
}

impl<T> Resource<T> {
    /// The status of this resource.
    pub fn status(&self) -> Status {
        match self {
            Resource::Loading => Status::Loading,
            Resource::Success(_) => Status::Success,
            Resource::Error(_) => Status::Error,
        }
    }

    /// The payload, present only on SUCCESS.
    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The captured failure, present only on ERROR.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Resource::Error(err) => Some(err),
            _ => None,
        }
    }

    /// True for the terminal states (SUCCESS or ERROR).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Resource::Loading)
    }

    /// Structure-preserving map over the SUCCESS payload.
    ///
    /// Status and error pass through untouched; `f` never runs for LOADING or
    /// ERROR resources. This is the only transformation the use-case layer
    /// applies.
    pub fn map<U, F>(self, f: F) -> Resource<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Error(err) => Resource::Error(err),
        }
    }
}

/// Boxed stream of resources, the async-sequence primitive at every port
/// boundary.
pub type ResourceStream<T> = Pin<Box<dyn Stream<Item = Resource<T>> + Send>>;

/// Prepend a single LOADING resource ahead of whatever `source` produces.
///
/// This is the mechanism by which "loading first" is guaranteed independent
/// of repository implementation details: the LOADING item is emitted eagerly,
/// before the source is polled, so it is always observed ahead of the
/// terminal state.
pub fn with_loading<T, S>(source: S) -> impl Stream<Item = Resource<T>>
where
    S: Stream<Item = Resource<T>>,
{
    stream::once(future::ready(Resource::Loading)).chain(source)
}
