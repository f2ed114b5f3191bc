//! Post and user resources as served by the posts API, plus the joined shape
//! the view works with.

use serde::{Deserialize, Serialize};

/// A blog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    /// Id of the authoring user
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// An author record. Fields the API sends beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Public fields of a post's author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub username: String,
    pub email: String,
}

impl From<User> for Author {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            username: user.username,
            email: user.email,
        }
    }
}

/// A post joined with its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedPost {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub author: Author,
}

impl EnrichedPost {
    /// Join a post with the user it references
    pub fn join(post: Post, user: User) -> Self {
        if post.user_id != user.id {
            tracing::warn!(
                "Joining post {} (author {}) with user {}",
                post.id,
                post.user_id,
                user.id
            );
        }
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author: user.into(),
        }
    }
}
