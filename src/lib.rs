//! fsm-history: a data-driven finite state machine with one-step undo
//!
//! States and transitions are plain data. A [`Config`] names the initial
//! state and, for each state, which event leads where; a [`StateMachine`]
//! interprets it, tracking the current state and a single step of undo and
//! redo history.
//!
//! # Core Concepts
//!
//! - **Config**: Declarative machine definition, built in code, with
//!   [`fsm_config!`], or loaded from JSON
//! - **StateMachine**: Applies events and direct state changes, failing
//!   without side effects on invalid input
//! - **History**: One undo slot and one redo slot, never a stack
//!
//! # Example
//!
//! ```rust
//! use fsm_history::{FsmError, StateMachine};
//!
//! let mut machine = StateMachine::from_json(r#"{
//!     "initial": "A",
//!     "states": {
//!         "A": { "transitions": { "go": "B" } },
//!         "B": { "transitions": { "back": "A" } }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(machine.state(), "A");
//! machine.trigger("go").unwrap();
//! assert_eq!(machine.state(), "B");
//!
//! assert!(matches!(
//!     machine.trigger("go"),
//!     Err(FsmError::InvalidTransition { .. })
//! ));
//!
//! machine.trigger("back").unwrap();
//! assert_eq!(machine.states(None), ["A", "B"]);
//! assert_eq!(machine.states(Some("go")), ["A"]);
//!
//! // States are listed in declaration order, not sorted.
//! let machine = StateMachine::from_json(r#"{
//!     "initial": "Z",
//!     "states": { "Z": { "transitions": { "go": "A" } }, "A": {} }
//! }"#).unwrap();
//! assert_eq!(machine.states(None), ["Z", "A"]);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder, ConfigIssue, StateDef};
pub use core::{EventId, History, StateId};
pub use error::FsmError;
pub use machine::StateMachine;
