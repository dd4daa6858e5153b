use super::Agent;
use crate::{error::Result, models::HealthState, prelude::Population};
use log::*;

/// Outcome of a meeting for one of the two agents involved.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Transition {
    Demoted,
    Promoted,
    Unchanged,
}

/// Decide what happens to an agent in state `own` that meets an agent in
/// state `other`. Demotion is checked before promotion.
pub fn transition(own: HealthState, other: HealthState) -> Transition {
    if own.is_ill() && !other.is_cured() {
        Transition::Demoted
    } else if own.is_cured() && !other.is_cured() {
        Transition::Promoted
    } else {
        Transition::Unchanged
    }
}

/// True if agent gets worse after meeting other.
pub fn should_demote(agent: &Agent, other: &Agent) -> bool {
    transition(agent.state(), other.state()) == Transition::Demoted
}

/// True if agent gets better after meeting other.
pub fn should_promote(agent: &Agent, other: &Agent) -> bool {
    transition(agent.state(), other.state()) == Transition::Promoted
}

/// Outcome agent for `agent` after meeting `other`. Both must be given in
/// their pre-meeting states.
///
/// Promoting a cured agent leaves it cured. Demoting past Dead is an
/// InvalidState error.
pub fn meet(agent: &Agent, other: &Agent) -> Result<Agent> {
    let state = agent.state();
    let new_state = match transition(state, other.state()) {
        Transition::Demoted => state.try_demote()?,
        Transition::Promoted => match state.promoted() {
            Some(st) => st,
            None => {
                debug!(target: "round", "{} is already at the floor, promotion skipped", agent);
                state
            }
        },
        Transition::Unchanged => state,
    };
    trace!(target: "round", "{} meets {}: {} -> {}", agent, other, state, new_state);
    Ok(agent.with_state(new_state))
}

/// Split population into (non-participants, participants), keeping the
/// relative order within each group.
pub fn partition(population: &[Agent]) -> (Vec<&Agent>, Vec<&Agent>) {
    let (participants, others): (Vec<&Agent>, Vec<&Agent>) =
        population.iter().partition(|ag| ag.is_participant());
    (others, participants)
}

/// Run a single round of meetings.
///
/// Healthy and dead agents are copied first, unchanged and in order. The
/// remaining agents meet in consecutive pairs (p0, p1), (p2, p3), ... and each
/// pair contributes its outcomes as (p1', p0'). With an odd number of
/// participants the last one is appended unchanged.
///
/// The output always has the same length as the input. The whole round fails
/// if any transition would leave the health scale, which cannot happen for
/// populations of valid agents.
pub fn run_round(population: &[Agent]) -> Result<Population> {
    let (others, participants) = partition(population);
    debug!(
        target: "round",
        "round: {} participants, {} non-participants",
        participants.len(),
        others.len()
    );

    let mut results: Population = Vec::with_capacity(population.len());
    results.extend(others.into_iter().cloned());

    for pair in participants.chunks(2) {
        match *pair {
            [a, b] => {
                let b_new = meet(b, a)?;
                let a_new = meet(a, b)?;
                results.push(b_new);
                results.push(a_new);
            }
            [leftover] => {
                debug!(target: "round", "{} has no partner and is left unchanged", leftover);
                results.push(leftover.clone());
                break;
            }
            _ => unreachable!("chunks(2) yields one or two agents"),
        }
    }
    return Ok(results);
}
