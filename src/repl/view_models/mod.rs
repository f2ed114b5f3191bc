//! # ViewModel Module
//!
//! The blog viewer's state machine, split by concern:
//! - `core` - struct, construction, request ids and event emission
//! - `search` - input validation and post lookup
//! - `recent_posts` - loading and showing the recent posts list
//! - `completions` - applying fetch results, discarding stale ones

pub mod completions;
pub mod core;
pub mod recent_posts;
pub mod search;


pub use self::core::{
    invalid_id_message, post_not_found_message, ViewModel, RECENT_POSTS_ERROR_MESSAGE,
};
pub use search::parse_post_id;
