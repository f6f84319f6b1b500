//! Declarative state machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and where each event leads. It can be written as a Rust
//! value, assembled with [`ConfigBuilder`] or [`fsm_config!`](crate::fsm_config),
//! or loaded from JSON:
//!
//! ```json
//! {
//!   "initial": "Locked",
//!   "states": {
//!     "Locked":   { "transitions": { "coin": "Unlocked" } },
//!     "Unlocked": { "transitions": { "push": "Locked" } }
//!   }
//! }
//! ```
//!
//! Nothing here checks that `initial` or the transition targets name
//! configured states. Mistakes surface when the machine is driven, or up
//! front through [`Config::validate`].

pub mod builder;
pub mod macros;
pub mod validation;

pub use builder::ConfigBuilder;
pub use validation::ConfigIssue;

use crate::core::{EventId, OrderedMap, StateId};
use crate::error::FsmError;
use serde::{Deserialize, Serialize};

/// Transitions out of a single state, keyed by event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default)]
    transitions: OrderedMap<EventId, StateId>,
}

impl StateDef {
    /// A state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the transition taken on `event`.
    ///
    /// ```rust
    /// use fsm_history::config::StateDef;
    ///
    /// let locked = StateDef::new().on("coin", "Unlocked");
    /// assert_eq!(locked.target("coin").map(|s| s.as_str()), Some("Unlocked"));
    /// assert!(locked.target("push").is_none());
    /// ```
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.insert(event, target);
        self
    }

    pub(crate) fn insert(&mut self, event: impl Into<EventId>, target: impl Into<StateId>) {
        self.transitions.insert(event.into(), target.into());
    }

    /// Destination reached when `event` fires in this state.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions.get(event)
    }

    /// Whether this state has a transition for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Transitions keyed by event, in configuration order.
    pub fn transitions(&self) -> &OrderedMap<EventId, StateId> {
        &self.transitions
    }
}

/// Complete machine definition. Read-only once handed to a machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    initial: StateId,
    states: OrderedMap<StateId, StateDef>,
}

impl Config {
    /// Assemble a configuration from its parts, without validation.
    pub fn new(initial: impl Into<StateId>, states: OrderedMap<StateId, StateDef>) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from a JSON document.
    ///
    /// A `null` document means no configuration was supplied.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        serde_json::from_str::<Option<Self>>(json)
            .map_err(|e| FsmError::configuration(e.to_string()))?
            .ok_or_else(|| FsmError::configuration("no configuration supplied"))
    }

    /// Build a configuration from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, FsmError> {
        if value.is_null() {
            return Err(FsmError::configuration("no configuration supplied"));
        }
        serde_json::from_value(value).map_err(|e| FsmError::configuration(e.to_string()))
    }

    /// Render as a JSON value, keeping state and event order.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "initial": self.initial,
            "states": self.states,
        })
    }

    /// State a new machine starts in.
    pub fn initial(&self) -> &StateId {
        &self.initial
    }

    /// All state definitions, in configuration order.
    pub fn states(&self) -> &OrderedMap<StateId, StateDef> {
        &self.states
    }

    /// Definition of state `id`, if configured.
    pub fn state(&self, id: &str) -> Option<&StateDef> {
        self.states.get(id)
    }

    /// Whether `id` is a configured state.
    pub fn contains_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TURNSTILE: &str = r#"{
        "initial": "Locked",
        "states": {
            "Locked": { "transitions": { "coin": "Unlocked", "push": "Locked" } },
            "Unlocked": { "transitions": { "push": "Locked" } },
            "Broken": {}
        }
    }"#;

    #[test]
    fn parses_json_in_document_order() {
        let config = Config::from_json(TURNSTILE).unwrap();

        assert_eq!(config.initial(), "Locked");
        let names: Vec<&str> = config.states().keys().map(StateId::as_str).collect();
        assert_eq!(names, vec!["Locked", "Unlocked", "Broken"]);

        let locked = config.state("Locked").unwrap();
        let events: Vec<&str> = locked.transitions().keys().map(EventId::as_str).collect();
        assert_eq!(events, vec!["coin", "push"]);
        assert_eq!(locked.target("coin").unwrap(), "Unlocked");
    }

    #[test]
    fn state_without_transitions_key_is_empty() {
        let config = Config::from_json(TURNSTILE).unwrap();
        let broken = config.state("Broken").unwrap();
        assert!(broken.transitions().is_empty());
    }

    #[test]
    fn null_document_is_missing_configuration() {
        let err = Config::from_json("null").unwrap_err();
        assert_eq!(
            err,
            FsmError::Configuration {
                reason: "no configuration supplied".to_string()
            }
        );
    }

    #[test]
    fn malformed_document_is_configuration_error() {
        assert!(matches!(
            Config::from_json("{\"initial\": "),
            Err(FsmError::Configuration { .. })
        ));
        assert!(matches!(
            Config::from_json(r#"{"states": {}}"#),
            Err(FsmError::Configuration { .. })
        ));
    }

    #[test]
    fn unknown_initial_is_accepted_lazily() {
        let config = Config::from_json(r#"{"initial": "Ghost", "states": {}}"#).unwrap();
        assert_eq!(config.initial(), "Ghost");
        assert!(!config.contains_state("Ghost"));
    }

    const REVERSED: &str = r#"{
        "initial": "Zulu",
        "states": {
            "Zulu": { "transitions": { "yank": "Mike", "kick": "Alpha" } },
            "Mike": { "transitions": { "kick": "Zulu" } },
            "Alpha": {}
        }
    }"#;

    fn state_names(config: &Config) -> Vec<&str> {
        config.states().keys().map(StateId::as_str).collect()
    }

    #[test]
    fn from_json_keeps_non_alphabetical_order() {
        let config = Config::from_json(REVERSED).unwrap();

        assert_eq!(state_names(&config), vec!["Zulu", "Mike", "Alpha"]);
        let zulu: Vec<&str> = config
            .state("Zulu")
            .unwrap()
            .transitions()
            .keys()
            .map(EventId::as_str)
            .collect();
        assert_eq!(zulu, vec!["yank", "kick"]);
    }

    #[test]
    fn from_value_keeps_non_alphabetical_order() {
        let value: serde_json::Value = serde_json::from_str(REVERSED).unwrap();
        let config = Config::from_value(value).unwrap();

        assert_eq!(state_names(&config), vec!["Zulu", "Mike", "Alpha"]);
    }

    #[test]
    fn to_json_keeps_key_order() {
        let config = Config::from_json(REVERSED).unwrap();
        let json = config.to_json();

        let keys: Vec<&str> = json["states"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["Zulu", "Mike", "Alpha"]);

        let again = Config::from_value(json).unwrap();
        assert_eq!(state_names(&again), vec!["Zulu", "Mike", "Alpha"]);
        assert_eq!(again, config);
    }

    #[test]
    fn json_survives_a_round_trip() {
        let config = Config::from_json(TURNSTILE).unwrap();
        let again = Config::from_value(config.to_json()).unwrap();
        assert_eq!(config, again);
    }
}
