//! The state machine interpreter.
//!
//! States and transitions are data held in a [`Config`](crate::config::Config);
//! [`StateMachine`] tracks where that data says the machine currently is and
//! keeps one step of undo/redo history.

mod fsm;

pub use fsm::StateMachine;
