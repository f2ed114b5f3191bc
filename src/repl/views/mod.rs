//! # Views
//!
//! Presentation of the view state.

pub mod text_renderer;

pub use text_renderer::{format_view, TextRenderer, HELP_TEXT};
