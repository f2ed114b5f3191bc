//! # Completion Handling
//!
//! Applies finished fetches to the view state. A completion only counts when
//! its request id is still the current one for its kind; anything older is
//! dropped so a slow response can never overwrite a newer one.

use crate::repl::errors::{error_chain, PostsError};
use crate::repl::events::ModelEvent;
use crate::repl::models::EnrichedPost;
use crate::repl::services::{FetchCompletion, FetchOutcome, RequestId};
use crate::repl::view_models::core::{post_not_found_message, ViewModel, RECENT_POSTS_ERROR_MESSAGE};

impl ViewModel {
    /// Apply a finished fetch. Returns false when the completion was stale.
    pub fn apply_completion(&mut self, completion: FetchCompletion) -> bool {
        let FetchCompletion { id, outcome } = completion;
        match outcome {
            FetchOutcome::Post(result) => self.apply_post_result(id, result),
            FetchOutcome::RecentPosts(result) => self.apply_recent_posts_result(id, result),
        }
    }

    fn apply_post_result(
        &mut self,
        id: RequestId,
        result: Result<EnrichedPost, PostsError>,
    ) -> bool {
        let pending = match self.pending_search {
            Some(pending) if pending.request == id => pending,
            _ => {
                self.discard_stale(id);
                return false;
            }
        };
        self.pending_search = None;

        match result {
            Ok(post) => {
                let post_id = post.id;
                self.state.selected_post = Some(post);
                self.refresh_loading();
                self.emit(ModelEvent::PostLoaded { post_id });
            }
            Err(err) => {
                tracing::error!("Error fetching post {}: {}", pending.post_id, error_chain(&err));
                let message = post_not_found_message(pending.post_id);
                self.state.error_message = Some(message.clone());
                self.state.selected_post = None;
                self.refresh_loading();
                self.emit(ModelEvent::PostLoadFailed {
                    post_id: pending.post_id,
                    message,
                });
            }
        }
        true
    }

    fn apply_recent_posts_result(
        &mut self,
        id: RequestId,
        result: Result<Vec<EnrichedPost>, PostsError>,
    ) -> bool {
        if self.pending_recent != Some(id) {
            self.discard_stale(id);
            return false;
        }
        self.pending_recent = None;

        match result {
            Ok(posts) => {
                let count = posts.len();
                self.state.recent_posts = posts;
                self.refresh_loading();
                self.emit(ModelEvent::RecentPostsLoaded { count });
            }
            Err(err) => {
                tracing::error!("Error loading recent posts: {}", error_chain(&err));
                self.state.error_message = Some(RECENT_POSTS_ERROR_MESSAGE.to_string());
                self.refresh_loading();
                self.emit(ModelEvent::RecentPostsLoadFailed {
                    message: RECENT_POSTS_ERROR_MESSAGE.to_string(),
                });
            }
        }
        true
    }

    fn discard_stale(&mut self, request: RequestId) {
        tracing::debug!("Discarding stale completion {}", request);
        self.emit(ModelEvent::StaleCompletionDiscarded { request });
    }
}
