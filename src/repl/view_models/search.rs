//! # Post Search
//!
//! Validates search input and issues the post lookup.

use crate::config::PostIdRange;
use crate::repl::errors::ValidationError;
use crate::repl::events::ModelEvent;
use crate::repl::services::{FetchKind, FetchRequest};
use crate::repl::view_models::core::{invalid_id_message, PendingSearch, ViewModel};

impl ViewModel {
    /// Search for a post by the id typed into `raw_input`.
    ///
    /// Returns the request to dispatch, or `None` when the input was rejected
    /// (in which case no request must be made).
    pub fn search(&mut self, raw_input: &str) -> Option<FetchRequest> {
        self.state.search_id = raw_input.to_string();

        let post_id = match parse_post_id(raw_input, &self.id_range) {
            Ok(post_id) => post_id,
            Err(reason) => {
                tracing::debug!("Rejected search input '{}': {}", raw_input, reason);
                self.state.error_message = Some(invalid_id_message(&self.id_range));
                self.state.selected_post = None;
                self.emit(ModelEvent::SearchRejected {
                    input: raw_input.to_string(),
                    reason,
                });
                return None;
            }
        };

        self.state.selected_post = None;
        self.state.error_message = None;
        self.state.show_recent_posts = false;

        let request = self.next_request(FetchKind::PostById(post_id));
        let superseded = self.pending_search.replace(PendingSearch {
            request: request.id,
            post_id,
        });
        if let Some(superseded) = superseded {
            tracing::debug!(
                "Search {} for post {} superseded by {}",
                superseded.request,
                superseded.post_id,
                request.id
            );
        }
        self.refresh_loading();

        Some(request)
    }
}

/// Parse search input into a post id within `range`.
///
/// Surrounding whitespace is ignored and so is anything after the leading
/// integer, so `"12abc"` and `"3.7"` read as 12 and 3.
pub fn parse_post_id(raw_input: &str, range: &PostIdRange) -> Result<u64, ValidationError> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank);
    }

    let value =
        leading_integer(trimmed).ok_or_else(|| ValidationError::NotANumber(trimmed.to_string()))?;

    u64::try_from(value)
        .ok()
        .filter(|id| range.contains(*id))
        .ok_or(ValidationError::OutOfRange {
            min: range.min(),
            max: range.max(),
        })
}

/// Optional sign followed by ASCII digits. Saturates instead of overflowing.
fn leading_integer(input: &str) -> Option<i64> {
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let magnitude = rest[..digit_count].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
