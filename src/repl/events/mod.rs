//! # Events Module
//!
//! Model events and the bus that distributes them.

pub mod event_bus;
pub mod model_events;

pub use event_bus::{log_model_events, EventBus, ModelEventHandler, SimpleEventBus};
pub use model_events::ModelEvent;
