//! Step definitions for post search results

use crate::common::{blog_api::author_of, world::PostlineWorld};
use cucumber::then;

#[then(expr = "post {int} is shown")]
async fn post_is_shown(world: &mut PostlineWorld, post_id: u64) {
    let state = world.state();
    let post = state
        .selected_post
        .as_ref()
        .unwrap_or_else(|| panic!("no post selected, state: {state:?}"));
    assert_eq!(post.id, post_id);
    assert_eq!(post.title, format!("Post title {post_id}"));
    assert!(!state.show_recent_posts);
}

#[then(expr = "the shown post is written by {string}")]
async fn shown_post_author(world: &mut PostlineWorld, name: String) {
    let post = world.state().selected_post.as_ref().expect("post selected");
    assert_eq!(post.author.name, name);
    assert_eq!(post.author.name, format!("User {}", author_of(post.id)));
}

#[then(expr = "the error message reports post {int} as not found")]
async fn not_found_message(world: &mut PostlineWorld, post_id: u64) {
    let expected = format!("No se encontró el post con ID \"{post_id}\". Intenta con otro número.");
    assert_eq!(world.state().error_message.as_deref(), Some(expected.as_str()));
}

#[then("no post is shown")]
async fn no_post_shown(world: &mut PostlineWorld) {
    assert_eq!(world.state().selected_post, None);
}

#[then(expr = "the search box holds {string}")]
async fn search_box_holds(world: &mut PostlineWorld, expected: String) {
    assert_eq!(world.state().search_id, expected);
}
