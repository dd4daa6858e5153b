use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::{
    error::Result,
    models::{HealthState, StateField},
    prelude::Population,
    sim::Agent,
};

/// An agent as it appears in CSV and TOML files. The state is kept raw so
/// that bad values surface as InvalidState when the record is converted.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AgentRecord {
    pub name: String,
    pub state: StateField,
}

impl AgentRecord {
    pub fn into_agent(self) -> Result<Agent> {
        let state = HealthState::try_from(self.state)?;
        Ok(Agent::new(self.name, state))
    }
}

impl From<&Agent> for AgentRecord {
    fn from(agent: &Agent) -> Self {
        AgentRecord {
            name: agent.name().clone(),
            state: agent.state().into(),
        }
    }
}

/// Convert a list of records, failing on the first invalid state.
pub fn agents_from_records(records: Vec<AgentRecord>) -> Result<Population> {
    records.into_iter().map(AgentRecord::into_agent).collect()
}

/// Read a population from CSV data with a `name,state` header.
pub fn read_population_csv<R: Read>(reader: R) -> Result<Population> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut records = vec![];
    for res in reader.deserialize() {
        let record: AgentRecord = res?;
        records.push(record);
    }
    agents_from_records(records)
}

pub fn read_population_csv_path(path: impl AsRef<Path>) -> Result<Population> {
    read_population_csv(File::open(path)?)
}

/// Write population as CSV with a `name,state` header.
pub fn write_population_csv<W: Write>(population: &[Agent], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for agent in population {
        writer.serialize(AgentRecord::from(agent))?;
    }
    writer.flush()?;
    return Ok(());
}

pub fn write_population_csv_path(population: &[Agent], path: impl AsRef<Path>) -> Result<()> {
    write_population_csv(population, File::create(path)?)
}
