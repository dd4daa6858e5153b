use getset::CopyGetters;
use std::fmt;

use super::Agent;
use crate::{models::HealthState, prelude::StateCount};

/// Number of agents in each health state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, CopyGetters)]
pub struct Census {
    #[getset(get_copy = "pub")]
    counts: StateCount,
}

impl Census {
    pub fn from_population(population: &[Agent]) -> Self {
        let mut counts = StateCount::default();
        for ag in population {
            counts[ag.state().index()] += 1;
        }
        Census { counts }
    }

    pub fn count(&self, state: HealthState) -> usize {
        self.counts[state.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Agents that take part in the meetings of a round.
    pub fn participants(&self) -> usize {
        HealthState::ALL
            .iter()
            .filter(|st| st.is_participant())
            .map(|&st| self.count(st))
            .sum()
    }

    /// Counts as a CSV row matching HealthState::CSV_HEADER.
    pub fn csv_row(&self) -> String {
        let cols: Vec<String> = self.counts.iter().map(|n| n.to_string()).collect();
        cols.join(",")
    }

    /// Render a sequence of census as CSV, one row per census.
    pub fn render_csv<'a>(data: impl IntoIterator<Item = &'a Census>) -> String {
        let mut out = String::from(HealthState::CSV_HEADER);
        out.push('\n');
        for census in data {
            out.push_str(&census.csv_row());
            out.push('\n');
        }
        return out;
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = HealthState::ALL
            .iter()
            .map(|&st| format!("{}={}", st, self.count(st)))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::run_round;
    use HealthState::*;

    #[test]
    fn counts_population() {
        let pop = vec![
            Agent::new("a", Sick),
            Agent::new("b", Sick),
            Agent::new("c", Dead),
            Agent::new("d", Cured),
        ];
        let census = Census::from_population(&pop);
        assert_eq!(census.counts(), [1, 0, 2, 0, 1]);
        assert_eq!(census.total(), 4);
        assert_eq!(census.participants(), 3);
        assert_eq!(census.to_string(), "Cured=1 Healthy=0 Sick=2 Dying=0 Dead=1");

        let after = Census::from_population(&run_round(&pop).unwrap());
        assert_eq!(after.counts(), [1, 0, 0, 2, 1]);
        assert_eq!(
            Census::render_csv(&[census, after]),
            "Cured,Healthy,Sick,Dying,Dead\n1,0,2,0,1\n1,0,0,2,1\n"
        );
    }
}
