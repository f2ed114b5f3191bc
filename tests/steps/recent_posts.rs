//! Step definitions for the recent posts list

use crate::common::{blog_api::author_of, world::PostlineWorld};
use cucumber::then;

#[then(expr = "{int} recent post(s) are listed")]
async fn recent_posts_listed(world: &mut PostlineWorld, count: usize) {
    assert_eq!(world.state().recent_posts.len(), count);
}

#[then("the recent posts are in API order with their authors")]
async fn recent_posts_in_order(world: &mut PostlineWorld) {
    for (index, post) in world.state().recent_posts.iter().enumerate() {
        let expected_id = index as u64 + 1;
        assert_eq!(post.id, expected_id);
        assert_eq!(post.author.name, format!("User {}", author_of(expected_id)));
        assert_eq!(post.author.email, format!("user{}@example.com", author_of(expected_id)));
    }
}

#[then("the recent posts list is visible")]
async fn recent_list_visible(world: &mut PostlineWorld) {
    let state = world.state();
    assert!(state.show_recent_posts, "state: {state:?}");
    assert_eq!(state.selected_post, None);
    assert!(state.search_id.is_empty());
}

#[then("the recent posts list is hidden")]
async fn recent_list_hidden(world: &mut PostlineWorld) {
    assert!(!world.state().show_recent_posts);
}
