use im::OrdSet;

use crate::distance::DistanceTable;
use crate::error::Error;
use crate::graph::{ValveGraph, ValveId};
use crate::partition::max_dual_release;
use crate::search::Searcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agents {
    One,
    Two,
}

/// The recognized knobs for one run: where the actors start, how many
/// minutes they get, and whether one actor works alone or two split the
/// valves between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub start_valve: String,
    pub time_budget: i64,
    pub agents: Agents,
}

pub fn solve(graph: &ValveGraph, scenario: &Scenario) -> Result<u64, Error> {
    let time_budget = u64::try_from(scenario.time_budget)
        .map_err(|_| Error::InvalidTimeBudget(scenario.time_budget))?;

    let start = graph
        .lookup(&scenario.start_valve)
        .ok_or_else(|| Error::UndefinedValve(scenario.start_valve.clone()))?;

    let distances = DistanceTable::build(graph, start)?;
    let searcher = Searcher::new(graph, &distances);
    let openable: OrdSet<ValveId> = graph.openable().into_iter().collect();

    match scenario.agents {
        Agents::One => searcher.max_release(start, openable, time_budget),
        Agents::Two => max_dual_release(&searcher, start, openable, time_budget),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::example_graph;

    #[test]
    fn test_negative_time_budget_is_rejected() {
        let graph = example_graph();
        let scenario = Scenario {
            start_valve: "AA".to_owned(),
            time_budget: -1,
            agents: Agents::One,
        };

        assert_eq!(
            solve(&graph, &scenario).err(),
            Some(Error::InvalidTimeBudget(-1)),
        );
    }

    #[test]
    fn test_unknown_start_valve_is_rejected() {
        let graph = example_graph();
        let scenario = Scenario {
            start_valve: "ZZ".to_owned(),
            time_budget: 30,
            agents: Agents::One,
        };

        assert_eq!(
            solve(&graph, &scenario).err(),
            Some(Error::UndefinedValve("ZZ".to_owned())),
        );
    }

    #[test]
    fn test_lone_actor_scenario() {
        let graph = example_graph();
        let scenario = Scenario {
            start_valve: "AA".to_owned(),
            time_budget: 30,
            agents: Agents::One,
        };

        assert_eq!(solve(&graph, &scenario).unwrap(), 1651);
    }

    #[test]
    fn test_paired_actors_scenario() {
        let graph = example_graph();
        let scenario = Scenario {
            start_valve: "AA".to_owned(),
            time_budget: 26,
            agents: Agents::Two,
        };

        assert_eq!(solve(&graph, &scenario).unwrap(), 1707);
    }
}
