//! # Services Layer
//!
//! `PostsService` talks to the posts API; `FetchService` runs its calls on
//! background tasks and reports completions back to the controller.

pub mod fetch;
pub mod posts;

pub use fetch::{
    FetchCompletion, FetchKind, FetchOutcome, FetchRequest, FetchService, RequestId,
};
pub use posts::{PostsService, DEFAULT_RECENT_LIMIT};
