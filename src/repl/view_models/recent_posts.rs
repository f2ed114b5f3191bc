//! # Recent Posts
//!
//! Loading the recent posts list and switching back to it.

use crate::repl::events::ModelEvent;
use crate::repl::services::{FetchKind, FetchRequest};
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Lifecycle hook run once when the view starts
    pub fn initialize(&mut self) -> FetchRequest {
        tracing::info!(
            "Initializing blog viewer, loading {} recent posts",
            self.recent_limit
        );
        self.load_recent_posts()
    }

    /// Request the recent posts list. Any earlier load still in flight becomes stale.
    pub fn load_recent_posts(&mut self) -> FetchRequest {
        let request = self.next_request(FetchKind::RecentPosts {
            limit: self.recent_limit,
        });
        if let Some(superseded) = self.pending_recent.replace(request.id) {
            tracing::debug!("Recent posts load {} superseded by {}", superseded, request.id);
        }
        self.refresh_loading();
        request
    }

    /// Return to the recent posts list, dropping the current search.
    ///
    /// Reloads the list when it is empty.
    pub fn show_recent_posts_view(&mut self) -> Option<FetchRequest> {
        self.state.show_recent_posts = true;
        self.state.selected_post = None;
        self.state.error_message = None;
        self.state.search_id.clear();

        if let Some(abandoned) = self.pending_search.take() {
            tracing::debug!(
                "Abandoning search {} for post {}",
                abandoned.request,
                abandoned.post_id
            );
        }
        self.refresh_loading();
        self.emit(ModelEvent::RecentPostsViewShown);

        if self.state.recent_posts.is_empty() {
            Some(self.load_recent_posts())
        } else {
            None
        }
    }

    /// Same as `show_recent_posts_view`; bound to the clear action
    pub fn clear_search(&mut self) -> Option<FetchRequest> {
        self.show_recent_posts_view()
    }
}
