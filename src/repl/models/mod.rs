//! # Models
//!
//! Plain data shapes: API resources, the joined post and the view state.

pub mod post;
pub mod view_state;

pub use post::{Author, EnrichedPost, Post, User};
pub use view_state::ViewState;
