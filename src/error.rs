//! Errors returned by state machine construction and transitions.

use thiserror::Error;

/// Errors that can occur when building or driving a state machine.
///
/// A failed operation never mutates the machine: the current state and both
/// history slots are exactly as they were before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// No usable configuration was supplied.
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    /// `change_state` was asked to move to a state that is not configured.
    #[error("invalid state: '{state}' is not a configured state")]
    InvalidState { state: String },

    /// `trigger` was called with an event the current state has no transition for.
    #[error("invalid transition: cannot apply '{event}' in state '{state}'")]
    InvalidTransition { state: String, event: String },
}

impl FsmError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}
