//! One round of pairwise meetings in a population of labeled agents.
//!
//! Agents that are neither healthy nor dead are paired in order and each
//! member of a pair is promoted, demoted or left alone depending on the
//! pre-meeting state of both. See [`sim::run_round`].
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod prelude;
pub mod sim;
pub use crate::error::{Error, Result};
pub use crate::models::HealthState;
pub use crate::sim::{run_round, Agent};
