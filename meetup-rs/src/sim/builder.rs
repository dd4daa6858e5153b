use rand::prelude::*;
use rand::rngs::SmallRng;

use super::Agent;
use crate::{
    models::HealthState,
    prelude::{Population, StateCount},
};

/// Random number generator seeded from system entropy.
pub fn default_rng() -> SmallRng {
    SmallRng::from_entropy()
}

/// Creates a population grouped by state, with counts[i] agents in the state
/// of index i. Agents are named after their state and position, e.g.
/// "Sick-0", "Sick-1", ...
pub fn new_population_from_counts(counts: StateCount) -> Population {
    let mut data: Population = Vec::with_capacity(counts.iter().sum());
    for (state, &n) in HealthState::ALL.iter().zip(counts.iter()) {
        for i in 0..n {
            data.push(Agent::new(format!("{}-{}", state, i), *state));
        }
    }
    return data;
}

/// Creates a population of n agents with states drawn uniformly from the
/// health scale.
pub fn random_population<R: Rng>(n: usize, rng: &mut R) -> Population {
    (0..n)
        .map(|i| {
            let state = *HealthState::ALL.choose(rng).unwrap_or(&HealthState::Healthy);
            Agent::new(format!("agent-{}", i), state)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Census;

    #[test]
    fn population_from_counts() {
        let pop = new_population_from_counts([1, 0, 2, 0, 3]);
        assert_eq!(pop.len(), 6);
        assert_eq!(pop[0], Agent::new("Cured-0", HealthState::Cured));
        assert_eq!(pop[2], Agent::new("Sick-1", HealthState::Sick));
        assert_eq!(Census::from_population(&pop).counts(), [1, 0, 2, 0, 3]);
    }

    #[test]
    fn seeded_random_population() {
        let a = random_population(100, &mut SmallRng::seed_from_u64(1));
        let b = random_population(100, &mut SmallRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
    }

    #[test]
    fn entropy_seeded_population() {
        let pop = random_population(20, &mut default_rng());
        assert_eq!(pop.len(), 20);
        assert_eq!(Census::from_population(&pop).total(), 20);
    }
}
