mod builder;
mod census;
mod round;
pub use builder::*;
pub use census::*;
pub use round::*;

use crate::models::HealthState;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named agent with a health state. Agents are plain values: two agents
/// with the same name and state are equal.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Getters, CopyGetters, Serialize, Deserialize)]
pub struct Agent {
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    state: HealthState,
}

impl Agent {
    pub fn new(name: impl Into<String>, state: HealthState) -> Self {
        Agent {
            name: name.into(),
            state,
        }
    }

    /// Copy of agent with the same name and a new state.
    pub fn with_state(&self, state: HealthState) -> Self {
        Agent {
            name: self.name.clone(),
            state,
        }
    }

    pub fn is_participant(&self) -> bool {
        self.state.is_participant()
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.state)
    }
}
