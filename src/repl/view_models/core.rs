//! # Core ViewModel Structure
//!
//! Contains the main ViewModel struct and basic initialization logic.
//! The ViewModel owns the `ViewState` and is the only thing that mutates it.
//! It never performs I/O: operations that need data return a `FetchRequest`
//! for the caller to dispatch, and results come back through `apply_completion`.

use crate::config::{PostIdRange, ViewerConfig, DEFAULT_VIEW_RECENT_LIMIT};
use crate::repl::events::{EventBus, ModelEvent};
use crate::repl::models::ViewState;
use crate::repl::services::{FetchKind, FetchRequest, RequestId};

/// Type alias for event bus option to reduce complexity
type EventBusOption = Option<Box<dyn EventBus>>;

/// Shown when recent posts cannot be loaded
pub const RECENT_POSTS_ERROR_MESSAGE: &str = "Error al cargar posts recientes.";

/// Validation message for search input outside the accepted id range
pub fn invalid_id_message(range: &PostIdRange) -> String {
    format!(
        "Por favor, ingresa un ID válido entre {} y {}.",
        range.min(),
        range.max()
    )
}

/// Shown when a post (or its author) cannot be fetched
pub fn post_not_found_message(post_id: u64) -> String {
    format!("No se encontró el post con ID \"{post_id}\". Intenta con otro número.")
}

/// The search request whose result the view is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct PendingSearch {
    pub request: RequestId,
    pub post_id: u64,
}

/// State machine behind the blog viewer
pub struct ViewModel {
    pub(super) state: ViewState,
    pub(super) id_range: PostIdRange,
    pub(super) recent_limit: usize,

    last_request_id: u64,
    /// Only the latest search may update the selected post
    pub(super) pending_search: Option<PendingSearch>,
    /// Only the latest recent posts load may update the list
    pub(super) pending_recent: Option<RequestId>,

    event_bus: EventBusOption,
    pending_events: Vec<ModelEvent>,
}

impl ViewModel {
    pub fn new(id_range: PostIdRange, recent_limit: usize) -> Self {
        Self {
            state: ViewState::new(),
            id_range,
            recent_limit,
            last_request_id: 0,
            pending_search: None,
            pending_recent: None,
            event_bus: None,
            pending_events: Vec::new(),
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.id_range, config.recent_limit)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn id_range(&self) -> PostIdRange {
        self.id_range
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    /// Set the event bus for publishing model events
    pub fn set_event_bus(&mut self, event_bus: Box<dyn EventBus>) {
        self.event_bus = Some(event_bus);
    }

    /// True while any issued request has not completed
    pub fn has_pending_requests(&self) -> bool {
        self.pending_search.is_some() || self.pending_recent.is_some()
    }

    /// Drain events emitted since the last call
    pub fn collect_pending_events(&mut self) -> Vec<ModelEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Allocate the next request id and announce the request
    pub(super) fn next_request(&mut self, kind: FetchKind) -> FetchRequest {
        self.last_request_id += 1;
        let request = FetchRequest {
            id: RequestId::new(self.last_request_id),
            kind,
        };
        self.emit(ModelEvent::FetchStarted {
            request: request.id,
            kind,
        });
        request
    }

    pub(super) fn refresh_loading(&mut self) {
        self.state.is_loading = self.has_pending_requests();
    }

    pub(super) fn emit(&mut self, event: ModelEvent) {
        if let Some(event_bus) = &mut self.event_bus {
            event_bus.publish_model_event(event.clone());
        }
        self.pending_events.push(event);
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(PostIdRange::default(), DEFAULT_VIEW_RECENT_LIMIT)
    }
}
