use std::collections::HashMap;

use id_arena::{Arena, Id};
use itertools::Itertools;

use crate::error::Error;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Valve {
    pub name: String,
    pub flow_rate: u64,
}

#[derive(Debug)]
pub struct ValveNode {
    pub id: ValveId,
    pub valve: Valve,
    pub tunnels: Vec<ValveId>,
}

pub type ValveId = Id<ValveNode>;

/// Immutable valve network. Nodes are allocated in name order, so arena id
/// order is name order and every iteration over the arena yields valves in
/// the canonical order the search caches rely on.
pub struct ValveGraph {
    arena: Arena<ValveNode>,
    names: HashMap<String, ValveId>,
}

impl ValveGraph {
    pub fn build(records: Vec<(Valve, Vec<&str>)>) -> Result<ValveGraph, Error> {
        let mut arena = Arena::new();
        let mut names = HashMap::new();
        let mut pending = Vec::new();

        for (valve, tunnels) in records
            .into_iter()
            .sorted_by(|(a, _), (b, _)| a.name.cmp(&b.name))
        {
            let name = valve.name.clone();
            let id = arena.alloc_with_id(|id| ValveNode {
                id,
                valve,
                tunnels: Vec::new(),
            });
            names.insert(name, id);
            pending.push((id, tunnels));
        }

        for (id, tunnels) in pending {
            let tunnels = tunnels
                .into_iter()
                .map(|name| {
                    names
                        .get(name)
                        .copied()
                        .ok_or_else(|| Error::UndefinedValve(name.to_owned()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            arena.get_mut(id).expect("valid id").tunnels = tunnels;
        }

        Ok(ValveGraph { arena, names })
    }

    pub fn get(&self, id: ValveId) -> &ValveNode {
        self.arena.get(id).expect("valid id")
    }

    pub fn lookup(&self, name: &str) -> Option<ValveId> {
        self.names.get(name).copied()
    }

    /// Valves worth opening (flow rate > 0), in name order.
    pub fn openable(&self) -> Vec<ValveId> {
        self.arena
            .iter()
            .filter(|(_, node)| node.valve.flow_rate > 0)
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn valve<'a>(name: &str, flow_rate: u64, tunnels: Vec<&'a str>) -> (Valve, Vec<&'a str>) {
    (
        Valve {
            name: name.to_owned(),
            flow_rate,
        },
        tunnels,
    )
}

/// The well-known ten-valve sample network.
#[cfg(test)]
pub(crate) fn example_graph() -> ValveGraph {
    ValveGraph::build(vec![
        valve("AA", 0, vec!["DD", "II", "BB"]),
        valve("BB", 13, vec!["CC", "AA"]),
        valve("CC", 2, vec!["DD", "BB"]),
        valve("DD", 20, vec!["CC", "AA", "EE"]),
        valve("EE", 3, vec!["FF", "DD"]),
        valve("FF", 0, vec!["EE", "GG"]),
        valve("GG", 0, vec!["FF", "HH"]),
        valve("HH", 22, vec!["GG"]),
        valve("II", 0, vec!["AA", "JJ"]),
        valve("JJ", 21, vec!["II"]),
    ])
    .unwrap()
}
