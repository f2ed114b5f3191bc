//! Step definitions for setting up the fake API and driving the viewer

use crate::common::world::PostlineWorld;
use cucumber::{given, then, when};
use postline::config::PostIdRange;
use std::time::Duration;
use tracing::debug;

#[given("the blog API is running")]
async fn blog_api_running(world: &mut PostlineWorld) {
    world.start_blog_api().await;
}

#[given(expr = "the recent posts limit is {int}")]
async fn recent_posts_limit(world: &mut PostlineWorld, limit: usize) {
    world.recent_limit = limit;
}

#[given(expr = "post ids are accepted from {int} to {int}")]
async fn post_id_range(world: &mut PostlineWorld, min: u64, max: u64) {
    world.id_range = PostIdRange::new(min, max).expect("valid range");
}

#[given(expr = "post {int} does not exist")]
async fn post_missing(world: &mut PostlineWorld, post_id: u64) {
    world.override_status(&format!("/posts/{post_id}"), 404).await;
}

#[given(expr = "post {int} responds after {int} milliseconds")]
async fn post_delayed(world: &mut PostlineWorld, post_id: u64, millis: u64) {
    world.delay_post(post_id, Duration::from_millis(millis)).await;
}

#[given("author lookups fail")]
async fn author_lookups_fail(world: &mut PostlineWorld) {
    world.fail_author_lookups().await;
}

#[given("the post list fails")]
async fn post_list_fails(world: &mut PostlineWorld) {
    world.override_status("/posts", 500).await;
}

#[given("the viewer has started")]
async fn viewer_has_started(world: &mut PostlineWorld) {
    world.start_viewer().expect("viewer should start");
}

#[when("the viewer starts")]
async fn viewer_starts(world: &mut PostlineWorld) {
    world.start_viewer().expect("viewer should start");
}

#[given("the viewer has settled")]
async fn viewer_started_and_settled(world: &mut PostlineWorld) {
    world.start_viewer().expect("viewer should start");
    world.settle().await.expect("requests should settle");
}

#[when(expr = "the user enters {string}")]
async fn user_enters(world: &mut PostlineWorld, line: String) {
    debug!("Entering '{}'", line);
    world.enter(&line).expect("input should be handled");
}

#[when("all requests settle")]
async fn requests_settle(world: &mut PostlineWorld) {
    world.settle().await.expect("requests should settle");
}

#[when(expr = "{int} milliseconds pass")]
async fn time_passes(world: &mut PostlineWorld, millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    let applied = world
        .controller()
        .apply_ready_completions()
        .expect("completions should apply");
    debug!("Applied {} completions after {}ms", applied, millis);
}

#[then("the view is not loading")]
async fn not_loading(world: &mut PostlineWorld) {
    assert!(!world.state().is_loading, "state: {:?}", world.state());
}

#[then("the view is loading")]
async fn loading(world: &mut PostlineWorld) {
    assert!(world.state().is_loading, "state: {:?}", world.state());
}

#[then(expr = "the error message is {string}")]
async fn error_message_is(world: &mut PostlineWorld, expected: String) {
    assert_eq!(world.state().error_message.as_deref(), Some(expected.as_str()));
}

#[then("there is no error message")]
async fn no_error_message(world: &mut PostlineWorld) {
    assert_eq!(world.state().error_message, None);
}

#[then(expr = "the screen shows {string}")]
async fn screen_shows(world: &mut PostlineWorld, text: String) {
    assert!(
        world.output.contains(&text),
        "'{}' not found in output:\n{}",
        text,
        world.output.contents()
    );
}

#[then(expr = "the API received {int} request(s) for {string}")]
async fn api_received(world: &mut PostlineWorld, count: usize, url_path: String) {
    assert_eq!(world.requests_to(&url_path).await, count);
}
