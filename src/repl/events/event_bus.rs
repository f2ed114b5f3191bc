//! # Event Bus
//!
//! In-process fan-out of model events to subscribers, using the observer pattern.

use super::model_events::ModelEvent;

/// Type alias for model event handlers to reduce complexity
pub type ModelEventHandler = Box<dyn Fn(&ModelEvent) + Send + Sync>;

/// Event bus for decoupled communication between components
pub trait EventBus: Send + Sync {
    /// Publish a model event
    fn publish_model_event(&mut self, event: ModelEvent);

    /// Subscribe to model events
    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler);
}

/// Simple in-memory event bus implementation
pub struct SimpleEventBus {
    model_handlers: Vec<ModelEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            model_handlers: Vec::new(),
        }
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for SimpleEventBus {
    fn publish_model_event(&mut self, event: ModelEvent) {
        for handler in &self.model_handlers {
            handler(&event);
        }
    }

    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler) {
        self.model_handlers.push(handler);
    }
}

/// Subscriber that writes every model event to the tracing log
pub fn log_model_events() -> ModelEventHandler {
    Box::new(|event| match event {
        ModelEvent::PostLoadFailed { post_id, message } => {
            tracing::warn!("Post {} failed to load: {}", post_id, message);
        }
        ModelEvent::RecentPostsLoadFailed { message } => {
            tracing::warn!("Recent posts failed to load: {}", message);
        }
        other => tracing::debug!("Model event: {:?}", other),
    })
}
