//! A JSONPlaceholder look-alike for wiremock.
//!
//! Serves `/posts`, `/posts/{id}` and `/users/{id}`. Post `n` is written by
//! user `(n - 1) % USER_COUNT + 1`.

use serde_json::{json, Value};
use wiremock::{Request, Respond, ResponseTemplate};

pub const POST_COUNT: u64 = 100;
pub const USER_COUNT: u64 = 10;

pub fn author_of(post_id: u64) -> u64 {
    (post_id - 1) % USER_COUNT + 1
}

pub fn post_json(id: u64) -> Value {
    json!({
        "userId": author_of(id),
        "id": id,
        "title": format!("Post title {id}"),
        "body": format!("Body of post {id}"),
    })
}

pub fn user_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("User {id}"),
        "username": format!("user{id}"),
        "email": format!("user{id}@example.com"),
        "phone": "1-770-736-8031",
        "website": "hildegard.org",
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlogApi;

impl BlogApi {
    fn lookup(id: &str, count: u64, to_json: fn(u64) -> Value) -> ResponseTemplate {
        match id.parse::<u64>() {
            Ok(id) if (1..=count).contains(&id) => {
                ResponseTemplate::new(200).set_body_json(to_json(id))
            }
            _ => ResponseTemplate::new(404).set_body_json(json!({})),
        }
    }
}

impl Respond for BlogApi {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let path = request.url.path().trim_matches('/').to_string();
        let segments: Vec<&str> = path.split('/').collect();

        match segments.as_slice() {
            ["posts"] => {
                let limit = request
                    .url
                    .query_pairs()
                    .find(|(key, _)| key == "_limit")
                    .and_then(|(_, value)| value.parse::<u64>().ok())
                    .unwrap_or(POST_COUNT)
                    .min(POST_COUNT);
                let posts: Vec<Value> = (1..=limit).map(post_json).collect();
                ResponseTemplate::new(200).set_body_json(posts)
            }
            ["posts", id] => Self::lookup(id, POST_COUNT, post_json),
            ["users", id] => Self::lookup(id, USER_COUNT, user_json),
            _ => ResponseTemplate::new(404),
        }
    }
}
