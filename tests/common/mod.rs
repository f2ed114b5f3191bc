//! Common test utilities and infrastructure
//!
//! - Cucumber world implementation
//! - A fake posts API served by wiremock

pub mod blog_api;
pub mod world;

// Re-export commonly used items
#[allow(unused_imports)]
pub use blog_api::BlogApi;
#[allow(unused_imports)]
pub use world::PostlineWorld;
