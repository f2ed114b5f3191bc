//! # Terminal I/O
//!
//! Reads input lines from stdin.

use super::InputStream;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct StdinInputStream {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinInputStream {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinInputStream {
    fn default() -> Self {
        Self::new()
    }
}

impl InputStream for StdinInputStream {
    async fn next_line(&mut self) -> Result<Option<String>> {
        // Lines::next_line is cancel safe
        self.lines
            .next_line()
            .await
            .context("failed to read from stdin")
    }
}
