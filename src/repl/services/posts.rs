//! # Posts Service
//!
//! Data access for the posts API. Every operation is a plain async call that
//! either returns fully joined data or fails; there is no caching or retry.

use crate::config::ViewerConfig;
use crate::repl::errors::{PostsError, Resource};
use crate::repl::models::{EnrichedPost, Post, User};
use futures::future::try_join_all;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Number of posts `fetch_recent_posts` asks for when the caller has no preference
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Client for the posts and users endpoints of a JSONPlaceholder-style API
#[derive(Debug, Clone)]
pub struct PostsService {
    client: Client,
    base_url: Url,
}

impl PostsService {
    /// Create a service with a default client and no request timeout
    pub fn new(base_url: &str) -> Result<Self, PostsError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a service using an existing client
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, PostsError> {
        // Without the trailing slash Url::join would drop the last path segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|_| PostsError::InvalidUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(PostsError::InvalidUrl(normalized));
        }
        Ok(Self { client, base_url })
    }

    /// Create a service from viewer settings, applying the configured timeout
    pub fn from_config(config: &ViewerConfig) -> Result<Self, PostsError> {
        Self::with_client(build_client(config.timeout)?, &config.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `/posts`, unfiltered
    pub async fn fetch_all_posts(&self) -> Result<Vec<Post>, PostsError> {
        let url = self.endpoint("posts")?;
        self.get_json(url, None).await
    }

    /// GET `/users/{id}`
    pub async fn fetch_user(&self, id: u64) -> Result<User, PostsError> {
        let url = self.endpoint(&format!("users/{id}"))?;
        self.get_json(url, Some((Resource::User, id))).await
    }

    /// Fetch a post, then its author, and join them.
    ///
    /// The user request depends on the post's `userId`, so the two run in sequence.
    pub async fn fetch_post_by_id(&self, id: u64) -> Result<EnrichedPost, PostsError> {
        let url = self.endpoint(&format!("posts/{id}"))?;
        let post: Post = self.get_json(url, Some((Resource::Post, id))).await?;
        let user = self.fetch_user(post.user_id).await?;
        Ok(EnrichedPost::join(post, user))
    }

    /// Fetch up to `limit` posts and join each with its author.
    ///
    /// Author requests are issued concurrently. Results are paired by position,
    /// so `result[i]` is always the i-th post returned by the API regardless of
    /// which author request finished first. Any failed author request fails the
    /// whole call.
    pub async fn fetch_recent_posts(&self, limit: usize) -> Result<Vec<EnrichedPost>, PostsError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut url = self.endpoint("posts")?;
        url.query_pairs_mut().append_pair("_limit", &limit.to_string());
        let mut posts: Vec<Post> = self.get_json(url, None).await?;
        posts.truncate(limit);

        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let users = try_join_all(posts.iter().map(|post| self.fetch_user(post.user_id))).await?;
        tracing::debug!("Joined {} recent posts with their authors", posts.len());

        Ok(posts
            .into_iter()
            .zip(users)
            .map(|(post, user)| EnrichedPost::join(post, user))
            .collect())
    }

    fn endpoint(&self, path: &str) -> Result<Url, PostsError> {
        self.base_url
            .join(path)
            .map_err(|_| PostsError::InvalidUrl(format!("{}{path}", self.base_url)))
    }

    /// GET a URL and decode its JSON body. `target` names the resource so a 404
    /// can be reported as `NotFound`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        target: Option<(Resource, u64)>,
    ) -> Result<T, PostsError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| PostsError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {} returned {}", url, status);
            return Err(match target {
                Some((resource, id)) if status == StatusCode::NOT_FOUND => {
                    PostsError::NotFound { resource, id }
                }
                _ => PostsError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                },
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| PostsError::Transport {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| PostsError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn build_client(timeout: Option<Duration>) -> Result<Client, PostsError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(PostsError::ClientBuild)
}
