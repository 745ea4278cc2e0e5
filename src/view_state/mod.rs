//! View state module: immutable UI-facing snapshots.
//!
//! UI rendering is a pure function of the latest snapshot; components consume
//! [`FeedViewState`] without knowing about repositories or streams.

mod feed_view;

pub use feed_view::FeedViewState;
