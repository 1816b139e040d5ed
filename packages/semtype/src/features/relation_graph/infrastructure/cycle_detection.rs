//! Cycle detection for the relation graph
//!
//! Tarjan SCC finds cyclic components in O(V+E); a BFS inside the first
//! cyclic component recovers a concrete cycle for the error message.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};

/// First directed cycle in `graph`, as a closed vertex sequence
/// (`[a, b, a]`), or `None` if the graph is acyclic.
pub(super) fn find_cycle<N, E>(graph: &DiGraph<N, E>) -> Option<Vec<NodeIndex>> {
    let mut cyclic: Vec<Vec<NodeIndex>> = tarjan_scc(graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .collect();

    // Report the component containing the earliest declared vertex
    cyclic.sort_by_key(|scc| scc.iter().min().copied());
    let scc = cyclic.into_iter().next()?;

    let start = *scc.iter().min()?;
    if graph.contains_edge(start, start) {
        return Some(vec![start, start]);
    }

    let members: HashSet<NodeIndex> = scc.iter().copied().collect();
    let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);

    while let Some(current) = queue.pop_front() {
        let mut successors: Vec<NodeIndex> = graph
            .neighbors(current)
            .filter(|n| members.contains(n))
            .collect();
        successors.sort();

        for next in successors {
            if next == start {
                let mut path = vec![current];
                let mut node = current;
                while let Some(&prev) = parent.get(&node) {
                    path.push(prev);
                    node = prev;
                }
                path.reverse();
                path.push(start);
                return Some(path);
            }
            if visited.insert(next) {
                parent.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    None
}
