//! # I/O Abstraction Layer
//!
//! Input arrives as lines through the `InputStream` trait so the controller
//! can be driven by stdin in production and by a scripted queue in tests.
//! Output goes to any `std::io::Write`.
//!
//! ```text
//! Production:  AppController ──▶ StdinInputStream ──▶ tokio::io::stdin()
//!                            ──▶ std::io::Stdout
//!
//! Testing:     AppController ──▶ MockInputStream  ──▶ VecDeque<String>
//!                            ──▶ MockRenderStream ──▶ Arc<Mutex<Vec<u8>>>
//! ```

use anyhow::Result;
use std::future::Future;

pub mod mock;
pub mod terminal;

pub use mock::{MockInputStream, MockRenderStream};
pub use terminal::StdinInputStream;

/// Line-oriented input source
pub trait InputStream: Send {
    /// Wait for the next line. `Ok(None)` means the input is closed.
    ///
    /// Implementations must be cancel safe: the controller races this
    /// future against fetch completions.
    fn next_line(&mut self) -> impl Future<Output = Result<Option<String>>> + Send;
}
