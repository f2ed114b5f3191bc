//! # Mock I/O Implementations for Testing
//!
//! Scripted input lines and an output buffer that tests can inspect.

use super::InputStream;
use anyhow::Result;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Mock input stream for testing
///
/// Yields pre-programmed lines, then reports end of input.
#[derive(Debug, Default)]
pub struct MockInputStream {
    lines: VecDeque<String>,
}

impl MockInputStream {
    /// Create a new mock input stream with pre-programmed lines
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an empty mock input stream
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a line to the stream
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }
}

impl InputStream for MockInputStream {
    async fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Shared output buffer; clones write to the same buffer
#[derive(Debug, Clone, Default)]
pub struct MockRenderStream {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buffer).into_owned()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.contents().contains(needle)
    }

    pub fn clear(&self) {
        self.buffer.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_input_stream_should_yield_lines_then_end() {
        let mut input = MockInputStream::new(["5", "q"]);
        input.push_line("extra");

        assert_eq!(input.next_line().await.unwrap().as_deref(), Some("5"));
        assert_eq!(input.next_line().await.unwrap().as_deref(), Some("q"));
        assert_eq!(input.next_line().await.unwrap().as_deref(), Some("extra"));
        assert_eq!(input.next_line().await.unwrap(), None);
    }

    #[test]
    fn mock_render_stream_clones_should_share_buffer() {
        let stream = MockRenderStream::new();
        let mut writer = stream.clone();
        write!(writer, "hello").unwrap();

        assert!(stream.contains("hello"));
        stream.clear();
        assert!(stream.contents().is_empty());
    }
}
