//! Opt-in eager validation of a configuration.
//!
//! Machines accept any configuration and only fail when a bad reference is
//! actually used. `Config::validate` lets callers check everything up front
//! and reports every problem in one pass rather than stopping at the first.

use crate::config::Config;
use crate::core::{EventId, StateId};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A reference in a configuration that does not resolve to a configured state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("initial state '{initial}' is not a configured state")]
    UnknownInitialState { initial: StateId },

    #[error("transition '{event}' from '{state}' targets unknown state '{target}'")]
    UnknownTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },
}

impl Config {
    /// Check that the initial state and every transition target are configured.
    ///
    /// All issues are accumulated, in configuration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_history::config::{Config, ConfigIssue};
    /// use stillwater::validation::Validation;
    ///
    /// let config = Config::from_json(
    ///     r#"{"initial": "Z", "states": {"A": {"transitions": {"go": "B"}}}}"#,
    /// ).unwrap();
    ///
    /// match config.validate() {
    ///     Validation::Failure(issues) => assert_eq!(issues.len(), 2),
    ///     Validation::Success(_) => panic!("expected issues"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Vec::new();

        checks.push(if self.contains_state(self.initial().as_str()) {
            Validation::success(())
        } else {
            Validation::fail(ConfigIssue::UnknownInitialState {
                initial: self.initial().clone(),
            })
        });

        for (state, def) in self.states().iter() {
            for (event, target) in def.transitions().iter() {
                if !self.contains_state(target.as_str()) {
                    checks.push(Validation::fail(ConfigIssue::UnknownTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
