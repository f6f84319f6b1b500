//! Core building blocks shared by configuration and the machine.
//!
//! - Identifiers for states and events
//! - An insertion-ordered map for the configuration tables
//! - The one-step undo/redo slots

mod history;
mod id;
mod ordered;

pub use history::History;
pub use id::{EventId, StateId};
pub use ordered::OrderedMap;
