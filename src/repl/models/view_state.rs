//! # View State Model
//!
//! Everything the renderer needs to draw the blog viewer. Only the
//! ViewModel mutates it.

use super::post::EnrichedPost;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Raw text of the last search input
    pub search_id: String,
    pub selected_post: Option<EnrichedPost>,
    pub recent_posts: Vec<EnrichedPost>,
    pub error_message: Option<String>,
    pub is_loading: bool,
    pub show_recent_posts: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            search_id: String::new(),
            selected_post: None,
            recent_posts: Vec::new(),
            error_message: None,
            is_loading: false,
            show_recent_posts: true,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
