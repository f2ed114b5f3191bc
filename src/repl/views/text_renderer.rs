//! # Text Renderer
//!
//! Draws the `ViewState` as plain text. Rendering is a pure function of the
//! state (`format_view`); the renderer just writes it out.

use crate::repl::models::{EnrichedPost, ViewState};
use anyhow::Result;
use std::fmt::Write as _;
use std::io::Write;

const RULE: &str = "────────────────────────────────────────";

pub const HELP_TEXT: &str = "\
Commands:
  <id>          look up a post and its author
  r, recent     show recent posts
  c, clear      clear the search
  reload        reload recent posts
  h, help       show this help
  q, quit       exit
";

pub struct TextRenderer<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    pub fn render_banner(&mut self) -> Result<()> {
        writeln!(self.out, "🔵 postline")?;
        writeln!(
            self.out,
            "Type a post id to search, 'r' for recent posts, 'c' to clear, 'q' to quit."
        )?;
        self.out.flush()?;
        Ok(())
    }

    pub fn render_help(&mut self) -> Result<()> {
        write!(self.out, "{HELP_TEXT}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn render(&mut self, state: &ViewState) -> Result<()> {
        write!(self.out, "{}", format_view(state, self.verbose))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

/// Text for one frame of the view
pub fn format_view(state: &ViewState, verbose: bool) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{RULE}");

    if state.is_loading {
        let _ = writeln!(text, "⏳ Loading...");
    }
    if let Some(error) = &state.error_message {
        let _ = writeln!(text, "⚠ {error}");
    }

    if let Some(post) = &state.selected_post {
        format_post(&mut text, post);
    } else if state.show_recent_posts {
        format_recent_posts(&mut text, &state.recent_posts, state.is_loading, verbose);
    }

    text
}

fn format_post(text: &mut String, post: &EnrichedPost) {
    let _ = writeln!(text, "Post #{}: {}", post.id, post.title);
    let _ = writeln!(text);
    let _ = writeln!(text, "{}", post.body);
    let _ = writeln!(text);
    let _ = writeln!(
        text,
        "by {} (@{}) <{}>",
        post.author.name, post.author.username, post.author.email
    );
}

fn format_recent_posts(text: &mut String, posts: &[EnrichedPost], loading: bool, verbose: bool) {
    let _ = writeln!(text, "Recent posts");
    if posts.is_empty() && !loading {
        let _ = writeln!(text, "  (no posts)");
    }
    for post in posts {
        let _ = writeln!(
            text,
            "  #{:<4} {} by {} (@{})",
            post.id, post.title, post.author.name, post.author.username
        );
        if verbose {
            for line in post.body.lines() {
                let _ = writeln!(text, "         {line}");
            }
            let _ = writeln!(text, "         <{}>", post.author.email);
        }
    }
}
