//! State machine driven by a declarative configuration.

use crate::config::Config;
use crate::core::{EventId, History, StateId};
use crate::error::FsmError;

/// Tracks the current state of a configured machine.
///
/// Every successful forward move (`change_state`, `trigger`, `reset`)
/// remembers the state it left so that one `undo` can return to it. An
/// `undo` in turn remembers the state it left so that one `redo` can
/// return to that. Failed operations leave the machine untouched.
///
/// # Example
///
/// ```rust
/// use fsm_history::{fsm_config, StateMachine};
///
/// let mut machine = StateMachine::new(fsm_config! {
///     initial: A,
///     A { go => B },
///     B { back => A },
/// });
///
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.state(), "B");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "A");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "B");
/// assert!(!machine.redo());
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Config,
    current: StateId,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The configuration is not validated; see [`Config::validate`].
    pub fn new(config: Config) -> Self {
        let current = config.initial().clone();
        Self {
            config,
            current,
            history: History::new(),
        }
    }

    /// Create a machine from a configuration that may be absent.
    pub fn try_new(config: Option<Config>) -> Result<Self, FsmError> {
        config
            .map(Self::new)
            .ok_or_else(|| FsmError::configuration("no configuration supplied"))
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        Config::from_json(json).map(Self::new)
    }

    /// Current state.
    pub fn state(&self) -> &StateId {
        &self.current
    }

    /// State the machine starts in and `reset` returns to.
    pub fn initial(&self) -> &StateId {
        self.config.initial()
    }

    /// Configuration the machine interprets.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Move directly to `target`, which must be a configured state.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.contains_state(target) {
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }

        let target = StateId::from(target);
        tracing::debug!(from = %self.current, to = %target, "change_state");
        self.advance(target);
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// The destination is taken as configured, without checking that it is
    /// itself a configured state.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self
            .config
            .state(self.current.as_str())
            .and_then(|def| def.target(event))
        else {
            return Err(FsmError::InvalidTransition {
                state: self.current.to_string(),
                event: event.to_string(),
            });
        };

        let target = target.clone();
        tracing::debug!(from = %self.current, to = %target, event, "trigger");
        self.advance(target);
        Ok(())
    }

    /// Return to the initial state. Always recorded as a step, even when
    /// the machine is already there.
    pub fn reset(&mut self) {
        let initial = self.config.initial().clone();
        tracing::debug!(from = %self.current, to = %initial, "reset");
        self.advance(initial);
    }

    /// Configured states, in configuration order.
    ///
    /// With an event, only the states that have a transition for it.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateId> {
        self.config
            .states()
            .iter()
            .filter(|(_, def)| event.map_or(true, |event| def.handles(event)))
            .map(|(id, _)| id)
            .collect()
    }

    /// Events the current state has transitions for, in configuration order.
    pub fn events(&self) -> Vec<&EventId> {
        self.config
            .state(self.current.as_str())
            .map(|def| def.transitions().keys().collect())
            .unwrap_or_default()
    }

    /// Whether `trigger(event)` would succeed from the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.config
            .state(self.current.as_str())
            .is_some_and(|def| def.handles(event))
    }

    /// Go back to the state before the last forward move.
    ///
    /// Returns `false`, changing nothing, when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.current);
        if undone {
            tracing::debug!(to = %self.current, "undo");
        } else {
            tracing::trace!("undo: no previous state");
        }
        undone
    }

    /// Return to the state that was active before the last `undo`.
    ///
    /// Returns `false`, changing nothing, when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.current);
        if redone {
            tracing::debug!(to = %self.current, "redo");
        } else {
            tracing::trace!("redo: no pending state");
        }
        redone
    }

    /// Whether `undo` would move the machine.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether `redo` would move the machine.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget both undo and redo. The current state is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn advance(&mut self, target: StateId) {
        let left = std::mem::replace(&mut self.current, target);
        self.history.record(left);
    }
}
