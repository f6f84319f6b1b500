//! One-step undo/redo slots.
//!
//! History holds at most one state to go back to and at most one state to
//! go forward to. It is not a stack: a successful `undo` empties the undo
//! slot, so a second consecutive `undo` has nothing to do.

use super::id::StateId;

/// The undo (`previous`) and redo (`pending`) slots of a state machine.
///
/// `None` is the empty marker for either slot and never collides with a
/// state identifier, including the empty string.
///
/// # Example
///
/// ```rust
/// use fsm_history::core::{History, StateId};
///
/// let mut history = History::new();
/// let mut current = StateId::from("B");
///
/// history.record(StateId::from("A"));
/// assert!(history.undo(&mut current));
/// assert_eq!(current, "A");
///
/// assert!(!history.undo(&mut current));
/// assert!(history.redo(&mut current));
/// assert_eq!(current, "B");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    previous: Option<StateId>,
    pending: Option<StateId>,
}

impl History {
    /// Create history with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the state being left by a forward move.
    ///
    /// Only the undo slot is overwritten. A redo recorded by an earlier
    /// `undo` stays in place until `redo` or `clear` consumes it.
    pub fn record(&mut self, left: StateId) {
        self.previous = Some(left);
    }

    /// Step back to the recorded previous state.
    ///
    /// On success `current` holds the previous state, the state it replaced
    /// moves into the redo slot and the undo slot is emptied.
    pub fn undo(&mut self, current: &mut StateId) -> bool {
        let Some(previous) = self.previous.take() else {
            return false;
        };
        self.pending = Some(std::mem::replace(current, previous));
        true
    }

    /// Step forward to the state that was active before the last `undo`.
    ///
    /// On success the state it replaced moves into the undo slot and the
    /// redo slot is emptied.
    pub fn redo(&mut self, current: &mut StateId) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.previous = Some(std::mem::replace(current, pending));
        true
    }

    /// Empty both slots.
    pub fn clear(&mut self) {
        self.previous = None;
        self.pending = None;
    }

    /// State `undo` would return to.
    pub fn previous(&self) -> Option<&StateId> {
        self.previous.as_ref()
    }

    /// State `redo` would return to.
    pub fn pending(&self) -> Option<&StateId> {
        self.pending.as_ref()
    }

    /// Whether the undo slot is filled.
    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    /// Whether the redo slot is filled.
    pub fn can_redo(&self) -> bool {
        self.pending.is_some()
    }
}
