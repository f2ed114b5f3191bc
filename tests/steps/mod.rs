//! Step definitions for Cucumber tests
//!
//! Steps are organized by feature domain:
//! - `viewer` - API setup, startup and typing input
//! - `search` - post lookup results
//! - `recent_posts` - the recent posts list

pub mod recent_posts;
pub mod search;
pub mod viewer;
