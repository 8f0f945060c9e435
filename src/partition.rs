use std::collections::{HashMap, HashSet};

use im::OrdSet;
use log::debug;
use rayon::prelude::*;

use crate::error::Error;
use crate::graph::ValveId;
use crate::search::Searcher;

/// Maximum combined release for two actors starting at `start`, each opening
/// a disjoint share of `openable`, each with its own `time_budget` minutes.
///
/// Every subset of `openable` is scored once by a single-agent search; the
/// answer is the best `score(subset) + score(complement)` over all ways to
/// split the set between the actors.
pub fn max_dual_release(
    searcher: &Searcher,
    start: ValveId,
    openable: OrdSet<ValveId>,
    time_budget: u64,
) -> Result<u64, Error> {
    let Some(&pin) = openable.get_min() else {
        return Ok(0);
    };

    let assignments = enumerate(&openable);
    debug!("{} subset assignments to score", assignments.len());

    // The enumeration already de-duplicated subsets, so the parallel scoring
    // evaluates each exactly once. One memo cache per subset evaluation.
    let scores: HashMap<OrdSet<ValveId>, u64> = assignments
        .into_par_iter()
        .map(|subset| {
            searcher
                .max_release(start, subset.clone(), time_budget)
                .map(|score| (subset, score))
        })
        .collect::<Result<_, _>>()?;

    // Every unordered split has exactly one side containing `pin`, so pairing
    // only those sides with their complement in the full set walks each
    // partition once. Both sides are always present in `scores` because the
    // enumeration covered every subset of `openable`.
    let best = scores
        .iter()
        .filter(|(subset, _)| subset.contains(&pin))
        .map(|(subset, score)| {
            let complement: OrdSet<ValveId> = openable
                .iter()
                .filter(|&id| !subset.contains(id))
                .copied()
                .collect();

            score + scores[&complement]
        })
        .max()
        .unwrap_or(0);

    Ok(best)
}

// All 2^n subsets of `full`, produced by recursively removing one valve at a
// time. The seen-set cuts each already-visited branch short, which is what
// keeps the descent from revisiting the same subset n! times.
fn enumerate(full: &OrdSet<ValveId>) -> Vec<OrdSet<ValveId>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    descend(full.clone(), &mut seen, &mut out);
    out
}

fn descend(
    subset: OrdSet<ValveId>,
    seen: &mut HashSet<OrdSet<ValveId>>,
    out: &mut Vec<OrdSet<ValveId>>,
) {
    if !seen.insert(subset.clone()) {
        return;
    }

    for removed in subset.iter() {
        descend(subset.without(removed), seen, out);
    }

    out.push(subset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceTable;
    use crate::graph::{example_graph, valve, ValveGraph};

    fn single_and_dual(graph: &ValveGraph, start: &str, time_budget: u64) -> (u64, u64) {
        let start = graph.lookup(start).unwrap();
        let distances = DistanceTable::build(graph, start).unwrap();
        let searcher = Searcher::new(graph, &distances);
        let openable: OrdSet<ValveId> = graph.openable().into_iter().collect();

        let single = searcher
            .max_release(start, openable.clone(), time_budget)
            .unwrap();
        let dual = max_dual_release(&searcher, start, openable, time_budget).unwrap();

        (single, dual)
    }

    #[test]
    fn test_enumerate_covers_every_subset() {
        let graph = example_graph();
        let full: OrdSet<ValveId> = graph.openable().into_iter().collect();

        let subsets = enumerate(&full);

        assert_eq!(subsets.len(), 1 << full.len());
        assert_eq!(
            subsets.iter().collect::<HashSet<_>>().len(),
            subsets.len(),
            "enumeration produced a duplicate subset",
        );
    }

    #[test]
    fn test_sample_network_twenty_six_minutes() {
        let graph = example_graph();

        let (_, dual) = single_and_dual(&graph, "AA", 26);
        assert_eq!(dual, 1707);
    }

    #[test]
    fn test_dual_never_below_single() {
        let graph = example_graph();

        // One valid split gives one actor everything, so two actors can
        // always match a lone actor at the same budget.
        let (single, dual) = single_and_dual(&graph, "AA", 26);
        assert!(dual >= single);
    }

    #[test]
    fn test_split_clusters_score_independently() {
        // Two openable valves on opposite sides of the start, each too far
        // from the other to visit both in the budget.
        let graph = ValveGraph::build(vec![
            valve("SA", 0, vec!["XL", "XR"]),
            valve("XL", 0, vec!["SA", "LL"]),
            valve("LL", 10, vec!["XL"]),
            valve("XR", 0, vec!["SA", "RR"]),
            valve("RR", 9, vec!["XR"]),
        ])
        .unwrap();

        let (single, dual) = single_and_dual(&graph, "SA", 5);

        // A lone actor only has time for one side.
        assert_eq!(single, 20);

        // Each actor takes one cluster; the total is the sum of the two
        // cluster-only optima.
        let start = graph.lookup("SA").unwrap();
        let distances = DistanceTable::build(&graph, start).unwrap();
        let searcher = Searcher::new(&graph, &distances);
        let left = searcher
            .max_release(start, OrdSet::unit(graph.lookup("LL").unwrap()), 5)
            .unwrap();
        let right = searcher
            .max_release(start, OrdSet::unit(graph.lookup("RR").unwrap()), 5)
            .unwrap();

        assert_eq!((left, right), (20, 18));
        assert_eq!(dual, left + right);
    }

    #[test]
    fn test_no_openable_valves() {
        let graph = ValveGraph::build(vec![
            valve("AA", 0, vec!["BB"]),
            valve("BB", 0, vec!["AA"]),
        ])
        .unwrap();

        let (_, dual) = single_and_dual(&graph, "AA", 26);
        assert_eq!(dual, 0);
    }
}
