use std::collections::{HashMap, HashSet};

use log::debug;
use rayon::prelude::*;

use crate::error::Error;
use crate::graph::{ValveGraph, ValveId};

/// Tunnel hop counts between every pair of valves a search can stand at:
/// the start valve and the openable valves. Built once, read-only after.
pub struct DistanceTable<'g> {
    graph: &'g ValveGraph,
    table: HashMap<(ValveId, ValveId), u64>,
}

impl<'g> DistanceTable<'g> {
    /// Runs one breadth-first traversal per valve of interest, in parallel.
    /// Fails if any valve of interest can't reach another — the tunnel
    /// network is supposed to be connected.
    pub fn build(graph: &'g ValveGraph, start: ValveId) -> Result<DistanceTable<'g>, Error> {
        let mut interest = graph.openable();
        if !interest.contains(&start) {
            interest.push(start);
        }

        let per_source = interest
            .par_iter()
            .map(|&source| hop_counts(graph, source, &interest))
            .collect::<Result<Vec<_>, _>>()?;

        let mut table = HashMap::new();
        for entries in per_source {
            table.extend(entries);
        }

        debug!(
            "{} shortest-path entries across {} valves of interest",
            table.len(),
            interest.len()
        );

        Ok(DistanceTable { graph, table })
    }

    pub fn between(&self, a: ValveId, b: ValveId) -> Result<u64, Error> {
        self.table
            .get(&pair_key(a, b))
            .copied()
            .ok_or_else(|| Error::UnreachableValve {
                from: self.graph.get(a).valve.name.clone(),
                to: self.graph.get(b).valve.name.clone(),
            })
    }
}

// Distance is symmetric, so {a, b} and {b, a} share one entry.
fn pair_key(a: ValveId, b: ValveId) -> (ValveId, ValveId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// Expand the whole tunnel graph level by level from `source`, recording the
// level at which each valve of interest is first seen.
fn hop_counts(
    graph: &ValveGraph,
    source: ValveId,
    interest: &[ValveId],
) -> Result<Vec<((ValveId, ValveId), u64)>, Error> {
    let mut seen = HashSet::from([source]);
    let mut current = HashSet::from([source]);
    let mut out = vec![(pair_key(source, source), 0)];

    for cost in 1.. {
        current = current
            .into_iter()
            .flat_map(|id| graph.get(id).tunnels.iter().copied())
            .filter(|id| !seen.contains(id))
            .collect();

        seen.extend(current.iter().copied());

        for &found in &current {
            if interest.contains(&found) {
                out.push((pair_key(source, found), cost));
            }
        }

        if current.is_empty() {
            break;
        }
    }

    match interest.iter().find(|id| !seen.contains(*id)) {
        Some(&missing) => Err(Error::UnreachableValve {
            from: graph.get(source).valve.name.clone(),
            to: graph.get(missing).valve.name.clone(),
        }),
        None => Ok(out),
    }
}
