pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::models::*;
pub use crate::sim::*;

/// An ordered listing of agents. Names do not need to be unique.
pub type Population = Vec<Agent>;

/// Head counts indexed by HealthState::index().
pub type StateCount = [usize; HealthState::CARDINALITY];
