//! # Error Types
//!
//! `PostsError` covers everything that can go wrong talking to the posts API.
//! `ValidationError` covers search input rejected before any request is made.

use std::fmt;
use thiserror::Error;

/// Remote resource kinds served by the posts API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Post,
    User,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Post => write!(f, "post"),
            Resource::User => write!(f, "user"),
        }
    }
}

/// Failures surfaced by the data access layer
#[derive(Debug, Error)]
pub enum PostsError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{resource} {id} not found")]
    NotFound { resource: Resource, id: u64 },

    #[error("malformed response body from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API base URL '{0}'")]
    InvalidUrl(String),

    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

impl PostsError {
    /// True when the API reported the requested resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, PostsError::NotFound { .. })
    }
}

/// Render an error and its chain of causes on one line
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    message
}

/// Search input rejected client-side
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("search input is blank")]
    Blank,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("post id must be between {min} and {max}")]
    OutOfRange { min: u64, max: u64 },
}
