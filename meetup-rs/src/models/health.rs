use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Health scale of an agent, ordered by severity.
///
/// Moving one step towards `Cured` is a promotion and one step towards `Dead`
/// is a demotion. Steps are taken from an explicit adjacency table, so the
/// scale has no implicit numeric encoding and both ends are hard boundaries.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "StateField")]
pub enum HealthState {
    Cured,
    Healthy,
    Sick,
    Dying,
    Dead,
}

impl HealthState {
    /// Number of states in the scale.
    pub const CARDINALITY: usize = 5;

    /// All states, from the mildest to the most severe.
    pub const ALL: [HealthState; HealthState::CARDINALITY] = [
        HealthState::Cured,
        HealthState::Healthy,
        HealthState::Sick,
        HealthState::Dying,
        HealthState::Dead,
    ];

    pub const CSV_HEADER: &'static str = "Cured,Healthy,Sick,Dying,Dead";

    /// Position of state in the severity scale. Cured is 0 and Dead is 4.
    pub fn index(self) -> usize {
        match self {
            Self::Cured => 0,
            Self::Healthy => 1,
            Self::Sick => 2,
            Self::Dying => 3,
            Self::Dead => 4,
        }
    }

    /// Inverse of index(). Any value outside 0..=4 is rejected.
    pub fn from_index(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::Cured),
            1 => Ok(Self::Healthy),
            2 => Ok(Self::Sick),
            3 => Ok(Self::Dying),
            4 => Ok(Self::Dead),
            _ => Err(Error::InvalidState(format!(
                "index {} is outside of 0..={}",
                value,
                Self::CARDINALITY - 1
            ))),
        }
    }

    /// One step towards Cured, or None if already there.
    pub fn promoted(self) -> Option<Self> {
        match self {
            Self::Cured => None,
            Self::Healthy => Some(Self::Cured),
            Self::Sick => Some(Self::Healthy),
            Self::Dying => Some(Self::Sick),
            Self::Dead => Some(Self::Dying),
        }
    }

    /// One step towards Dead, or None if already there.
    pub fn demoted(self) -> Option<Self> {
        match self {
            Self::Cured => Some(Self::Healthy),
            Self::Healthy => Some(Self::Sick),
            Self::Sick => Some(Self::Dying),
            Self::Dying => Some(Self::Dead),
            Self::Dead => None,
        }
    }

    /// Like promoted(), but stepping past Cured is an error.
    pub fn try_promote(self) -> Result<Self> {
        self.promoted()
            .ok_or_else(|| Error::InvalidState(format!("cannot promote {:?}", self)))
    }

    /// Like demoted(), but stepping past Dead is an error.
    pub fn try_demote(self) -> Result<Self> {
        self.demoted()
            .ok_or_else(|| Error::InvalidState(format!("cannot demote {:?}", self)))
    }

    /// Healthy and Dead agents sit out of the meetings.
    pub fn is_participant(self) -> bool {
        !matches!(self, Self::Healthy | Self::Dead)
    }

    pub fn is_cured(self) -> bool {
        self == Self::Cured
    }

    /// Sick and Dying agents get worse when meeting anyone not cured.
    pub fn is_ill(self) -> bool {
        matches!(self, Self::Sick | Self::Dying)
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for HealthState {
    type Err = Error;

    /// Parse either a state name (case insensitive) or its index.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Self::from_index(value);
        }
        match s.to_ascii_lowercase().as_str() {
            "cured" | "cure" => Ok(Self::Cured),
            "healthy" => Ok(Self::Healthy),
            "sick" => Ok(Self::Sick),
            "dying" => Ok(Self::Dying),
            "dead" => Ok(Self::Dead),
            _ => Err(Error::InvalidState(format!("unknown state {:?}", s))),
        }
    }
}

/// A health state as written in config and CSV files: either a name or an
/// index into the severity scale. Floats and booleans are accepted here only
/// so that they are rejected as InvalidState on conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateField {
    Index(i64),
    Float(f64),
    Bool(bool),
    Name(String),
}

impl TryFrom<StateField> for HealthState {
    type Error = Error;

    fn try_from(field: StateField) -> Result<Self> {
        match field {
            StateField::Index(value) => HealthState::from_index(value),
            StateField::Float(value) => Err(Error::InvalidState(format!(
                "{} is not an integer index",
                value
            ))),
            StateField::Bool(value) => Err(Error::InvalidState(format!(
                "{} is not a state",
                value
            ))),
            StateField::Name(name) => name.parse(),
        }
    }
}

impl From<HealthState> for StateField {
    fn from(state: HealthState) -> Self {
        StateField::Name(state.to_string())
    }
}
