use std::collections::HashMap;

use im::OrdSet;

use crate::distance::DistanceTable;
use crate::error::Error;
use crate::graph::{ValveGraph, ValveId};

/// One actor walking the tunnel network, opening valves.
pub struct Searcher<'g> {
    graph: &'g ValveGraph,
    distances: &'g DistanceTable<'g>,
}

// `OrdSet` compares and hashes on membership alone, in valve order, so two
// remaining-sets reached through different opening orders share a memo entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SearchState {
    position: ValveId,
    remaining: OrdSet<ValveId>,
    time_left: u64,
}

impl<'g> Searcher<'g> {
    pub fn new(graph: &'g ValveGraph, distances: &'g DistanceTable<'g>) -> Searcher<'g> {
        Searcher { graph, distances }
    }

    /// Maximum total release one actor can achieve starting at `start` with
    /// `time_budget` minutes, opening only valves in `candidates`. The memo
    /// cache lives and dies with this call; it is never valid to share one
    /// across different time budgets.
    pub fn max_release(
        &self,
        start: ValveId,
        candidates: OrdSet<ValveId>,
        time_budget: u64,
    ) -> Result<u64, Error> {
        let mut memo = HashMap::new();

        self.best_from(
            SearchState {
                position: start,
                remaining: candidates,
                time_left: time_budget,
            },
            &mut memo,
        )
    }

    fn best_from(
        &self,
        state: SearchState,
        memo: &mut HashMap<SearchState, u64>,
    ) -> Result<u64, Error> {
        if let Some(&best) = memo.get(&state) {
            return Ok(best);
        }

        let mut best = 0;

        for &next in state.remaining.iter() {
            if next == state.position {
                continue;
            }

            // One minute per tunnel hop, one more to open the valve.
            let cost = self.distances.between(state.position, next)? + 1;
            let Some(time_left) = state.time_left.checked_sub(cost) else {
                continue;
            };

            let mut released = time_left * self.graph.get(next).valve.flow_rate;

            // With less than two minutes left nothing further can pay off:
            // any later valve would open with zero minutes on the clock.
            if time_left >= 2 {
                released += self.best_from(
                    SearchState {
                        position: next,
                        remaining: state.remaining.without(&next),
                        time_left,
                    },
                    memo,
                )?;
            }

            best = best.max(released);
        }

        memo.insert(state, best);

        Ok(best)
    }
}
