//! # MVVM Architecture Implementation
//!
//! The blog viewer split into models, a ViewModel state machine, a text view
//! and the controller that drives them.

pub mod commands;
pub mod controllers;
pub mod errors;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use errors::{PostsError, Resource, ValidationError};
pub use events::*;
pub use models::*;
pub use services::*;
pub use view_models::{
    invalid_id_message, parse_post_id, post_not_found_message, ViewModel,
    RECENT_POSTS_ERROR_MESSAGE,
};
pub use views::*;

// Re-export specific items from commands and io to avoid conflicts
pub use commands::{CommandRegistry, InputCommand, UserCommand};
pub use io::{InputStream, MockInputStream, MockRenderStream, StdinInputStream};
