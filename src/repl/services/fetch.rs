//! # Fetch Service
//!
//! Runs fetch requests issued by the ViewModel on background tasks and hands
//! the results back through a channel, so the controller never blocks on I/O.

use crate::repl::errors::PostsError;
use crate::repl::models::EnrichedPost;
use crate::repl::services::posts::PostsService;
use std::fmt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const COMPLETION_CHANNEL_CAPACITY: usize = 16;

/// Monotonic tag identifying one fetch request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// A single post joined with its author
    PostById(u64),
    /// The first `limit` posts joined with their authors
    RecentPosts { limit: usize },
}

/// Work the ViewModel wants done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub kind: FetchKind,
}

#[derive(Debug)]
pub enum FetchOutcome {
    Post(Result<EnrichedPost, PostsError>),
    RecentPosts(Result<Vec<EnrichedPost>, PostsError>),
}

/// Result of a finished request, tagged with the id it was issued under
#[derive(Debug)]
pub struct FetchCompletion {
    pub id: RequestId,
    pub outcome: FetchOutcome,
}

/// Dispatches `FetchRequest`s against a `PostsService`
pub struct FetchService {
    posts: PostsService,
    /// Channel for receiving completed fetches
    completion_receiver: mpsc::Receiver<FetchCompletion>,
    /// Channel sender cloned into each spawned task
    completion_sender: mpsc::Sender<FetchCompletion>,
}

impl FetchService {
    pub fn new(posts: PostsService) -> Self {
        let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_CHANNEL_CAPACITY);
        Self {
            posts,
            completion_receiver,
            completion_sender,
        }
    }

    pub fn posts(&self) -> &PostsService {
        &self.posts
    }

    /// Run a request in the background.
    ///
    /// Must be called from within a tokio runtime. The completion arrives on
    /// the internal channel; see `next_completion` and `poll_completion`.
    pub fn dispatch(&self, request: FetchRequest) -> JoinHandle<()> {
        let posts = self.posts.clone();
        let sender = self.completion_sender.clone();

        tracing::debug!("Dispatching request {} ({:?})", request.id, request.kind);

        tokio::spawn(async move {
            let outcome = match request.kind {
                FetchKind::PostById(post_id) => {
                    FetchOutcome::Post(posts.fetch_post_by_id(post_id).await)
                }
                FetchKind::RecentPosts { limit } => {
                    FetchOutcome::RecentPosts(posts.fetch_recent_posts(limit).await)
                }
            };

            // The receiver is gone only when the controller has shut down
            if sender
                .send(FetchCompletion {
                    id: request.id,
                    outcome,
                })
                .await
                .is_err()
            {
                tracing::debug!("Dropping completion for {}, receiver closed", request.id);
            }
        })
    }

    /// Wait for the next completed request
    pub async fn next_completion(&mut self) -> Option<FetchCompletion> {
        self.completion_receiver.recv().await
    }

    /// Check if there are any completed requests (non-blocking)
    pub fn poll_completion(&mut self) -> Option<FetchCompletion> {
        self.completion_receiver.try_recv().ok()
    }
}
