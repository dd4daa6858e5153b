use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{
    error::Result,
    io::{agents_from_records, read_population_csv_path, write_population_csv_path, AgentRecord},
    models::HealthState,
    prelude::Population,
    sim::Agent,
};

/// Configuration of a one-shot meetup run, usually read from a TOML file.
///
/// ```toml
/// verbose = true
/// output_csv = "out.csv"
///
/// [[population]]
/// name = "Buddy"
/// state = "Cured"
///
/// [[population]]
/// name = "Holly"
/// state = 4
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub verbose: bool,
    /// Read the population from this CSV file instead of `population`.
    pub population_csv: Option<String>,
    pub output_csv: Option<String>,
    pub population: Vec<AgentRecord>,
}

impl Default for Config {
    fn default() -> Self {
        let population = vec![
            Agent::new("Buddy", HealthState::Cured),
            Agent::new("Holly", HealthState::Dead),
        ];
        Config {
            verbose: false,
            population_csv: None,
            output_csv: None,
            population: population.iter().map(AgentRecord::from).collect(),
        }
    }
}

impl Config {
    pub fn from_toml_str(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    /// The configured population, validating every state.
    pub fn population(&self) -> Result<Population> {
        match &self.population_csv {
            Some(path) => read_population_csv_path(path),
            None => agents_from_records(self.population.clone()),
        }
    }

    /// Write population to output_csv, if configured. Return true when a
    /// file was written.
    pub fn write_output(&self, population: &[Agent]) -> Result<bool> {
        match &self.output_csv {
            Some(path) => {
                write_population_csv_path(population, path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::tempdir;
    use HealthState::*;

    #[test]
    fn default_population() {
        let pop = Config::default().population().unwrap();
        assert_eq!(pop, vec![Agent::new("Buddy", Cured), Agent::new("Holly", Dead)]);
    }

    #[test]
    fn parse_toml() {
        let data = r#"
            verbose = true

            [[population]]
            name = "Rex"
            state = "Dying"

            [[population]]
            name = "Fido"
            state = 0
        "#;
        let cfg = Config::from_toml_str(data).unwrap();
        assert!(cfg.verbose);
        assert_eq!(cfg.output_csv, None);
        assert_eq!(
            cfg.population().unwrap(),
            vec![Agent::new("Rex", Dying), Agent::new("Fido", Cured)]
        );
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn invalid_state_in_toml() {
        let data = "[[population]]\nname = \"Ghost\"\nstate = 9\n";
        let cfg = Config::from_toml_str(data).unwrap();
        assert!(cfg.population().unwrap_err().is_invalid_state());
    }

    #[test]
    fn float_state_in_toml() {
        let data = "[[population]]\nname = \"X\"\nstate = 2.0\n";
        let cfg = Config::from_toml_str(data).unwrap();
        assert!(cfg.population().unwrap_err().is_invalid_state());
    }

    #[test]
    fn write_output_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut cfg = Config::default();
        let pop = cfg.population().unwrap();
        assert!(!cfg.write_output(&pop).unwrap());

        cfg.output_csv = Some(path.to_string_lossy().into_owned());
        assert!(cfg.write_output(&pop).unwrap());

        let reread = Config {
            population_csv: cfg.output_csv.clone(),
            ..Config::default()
        };
        assert_eq!(reread.population().unwrap(), pop);
    }

    #[test]
    fn malformed_toml() {
        let err = Config::from_toml_str("population = 3").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn roundtrip() {
        let cfg = Config::default();
        let data = toml::to_string(&cfg).unwrap();
        let cfg_: Config = toml::from_str(&data).unwrap();
        assert_eq!(cfg, cfg_);
    }
}
