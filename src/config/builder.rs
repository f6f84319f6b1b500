//! Builder for assembling configurations in code.

use crate::config::{Config, StateDef};
use crate::core::{EventId, OrderedMap, StateId};
use crate::error::FsmError;

/// Builder for constructing configurations with a fluent API.
///
/// States are listed in the order they are first mentioned, either by
/// [`state`](Self::state) or as the source of a [`transition`](Self::transition).
/// Targets are not declared implicitly.
///
/// # Example
///
/// ```rust
/// use fsm_history::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("Locked")
///     .transition("Locked", "coin", "Unlocked")
///     .transition("Unlocked", "push", "Locked")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial(), "Locked");
/// assert_eq!(config.states().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: OrderedMap<StateId, StateDef>,
}

impl ConfigBuilder {
    /// Create a builder with no initial state and no states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring it again keeps its transitions.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.declare(state.into());
        self
    }

    /// Add a transition, declaring `from` if needed.
    /// A second transition for the same event replaces the first.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.declare(from.into()).insert(event, to);
        self
    }

    /// Build the configuration.
    /// Returns an error if no initial state was set.
    pub fn build(self) -> Result<Config, FsmError> {
        let initial = self.initial.ok_or_else(|| {
            FsmError::configuration("initial state not specified; call .initial(state) before .build()")
        })?;
        Ok(Config::new(initial, self.states))
    }

    fn declare(&mut self, state: StateId) -> &mut StateDef {
        self.states.get_or_insert_with(state, StateDef::new)
    }
}
