//! # postline - Terminal Blog Viewer
//!
//! Browses posts and their authors from a JSONPlaceholder-style REST API.
//! Type a post id to look it up; the recent posts list is shown otherwise.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    State     ┌──────────────┐   Requests   ┌──────────────┐
//! │    View     │◄─────────────│  ViewModel   │─────────────▶│ FetchService │
//! │             │              │              │              │              │
//! │ - Text      │              │ - Validation │  Completions │ - tokio      │
//! │   rendering │              │ - Staleness  │◄─────────────│   tasks      │
//! └─────────────┘              └──────────────┘              │ - Posts API  │
//!                                      ▲                     └──────────────┘
//!                                      │ UserCommands
//!                                      │
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │              │
//!                               │ - Input      │
//!                               │ - Event Loop │
//!                               └──────────────┘
//! ```
//!
//! The ViewModel never performs I/O. Every request it issues carries a
//! `RequestId`, and a completion is applied only while its id is still the
//! latest one of its kind.

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
