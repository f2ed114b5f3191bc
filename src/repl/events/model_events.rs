//! # Model Events
//!
//! Events emitted when the view state changes.
//! The controller uses them to decide when to redraw; subscribers on the
//! event bus can observe them too.

use crate::repl::errors::ValidationError;
use crate::repl::services::{FetchKind, RequestId};

/// Events emitted when the ViewModel changes state
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// Search input was rejected before any request
    SearchRejected {
        input: String,
        reason: ValidationError,
    },

    /// A fetch request was issued
    FetchStarted { request: RequestId, kind: FetchKind },

    /// A post was found and joined with its author
    PostLoaded { post_id: u64 },

    /// A post lookup failed
    PostLoadFailed { post_id: u64, message: String },

    /// The recent posts list was replaced
    RecentPostsLoaded { count: usize },

    /// Loading recent posts failed; the previous list is kept
    RecentPostsLoadFailed { message: String },

    /// The view switched back to the recent posts list
    RecentPostsViewShown,

    /// A completion arrived for a request that is no longer current
    StaleCompletionDiscarded { request: RequestId },
}

impl ModelEvent {
    /// Whether the rendered view is affected by this event
    pub fn requires_redraw(&self) -> bool {
        !matches!(self, ModelEvent::StaleCompletionDiscarded { .. })
    }
}
