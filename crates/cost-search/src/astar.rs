//! A* shortest-path search.
//!
//! The frontier is a min-heap on `f_score = g_score + heuristic`. Entries with
//! equal `f_score` pop in insertion order, so results are reproducible for a
//! given graph and heuristic. Improved nodes are pushed again rather than
//! decreased in place; stale entries are skipped once their node is finalized.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::fmt::Debug;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::heuristic::Heuristic;

/// A start-to-goal node sequence and its total edge cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path<N> {
    /// Nodes from start to goal, inclusive
    pub nodes: Vec<N>,
    /// Sum of edge costs along `nodes`
    pub cost: f64,
}

impl<N> Path<N> {
    /// Number of nodes, start and goal included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn goal(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

struct FrontierEntry<N> {
    f_score: f64,
    sequence: u64,
    node: N,
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Find the lowest-cost path from `start` to `goal`.
///
/// Returns `None` when `goal` is unreachable. `start == goal` yields a
/// single-node path of cost zero. The graph is never modified.
pub fn astar<N, H>(graph: &Graph<N>, start: N, goal: N, heuristic: &H) -> Option<Path<N>>
where
    N: Ord + Clone + Debug,
    H: Heuristic<N> + ?Sized,
{
    let mut frontier = BinaryHeap::new();
    let mut g_score: BTreeMap<N, f64> = BTreeMap::new();
    let mut came_from: BTreeMap<N, N> = BTreeMap::new();
    let mut finalized: BTreeSet<N> = BTreeSet::new();
    let mut sequence: u64 = 0;

    g_score.insert(start.clone(), 0.0);
    frontier.push(FrontierEntry {
        f_score: heuristic.estimate(&start, &goal),
        sequence,
        node: start.clone(),
    });

    while let Some(FrontierEntry { node: current, .. }) = frontier.pop() {
        if finalized.contains(&current) {
            continue;
        }

        if current == goal {
            let cost = g_score.get(&current).copied().unwrap_or_default();
            debug!(
                "astar: reached {:?} from {:?} at cost {} after finalizing {} nodes",
                goal,
                start,
                cost,
                finalized.len()
            );
            return Some(Path {
                nodes: reconstruct_path(&came_from, current),
                cost,
            });
        }

        let current_g = g_score.get(&current).copied().unwrap_or(f64::INFINITY);
        finalized.insert(current.clone());

        for (neighbor, cost) in graph.neighbors(&current) {
            if finalized.contains(neighbor) {
                continue;
            }

            let tentative = current_g + cost;
            let improved = g_score
                .get(neighbor)
                .map_or(true, |&known| tentative < known);

            if improved {
                g_score.insert(neighbor.clone(), tentative);
                came_from.insert(neighbor.clone(), current.clone());
                sequence += 1;
                frontier.push(FrontierEntry {
                    f_score: tentative + heuristic.estimate(neighbor, &goal),
                    sequence,
                    node: neighbor.clone(),
                });
            }
        }
    }

    debug!(
        "astar: no path from {:?} to {:?} ({} nodes finalized)",
        start,
        goal,
        finalized.len()
    );
    None
}

/// Total cost of walking `nodes` in order, or `None` if a hop is not an edge.
pub fn path_cost<N>(graph: &Graph<N>, nodes: &[N]) -> Option<f64>
where
    N: Ord + Clone + Debug,
{
    nodes
        .windows(2)
        .map(|hop| graph.edge_cost(&hop[0], &hop[1]))
        .sum()
}

fn reconstruct_path<N: Ord + Clone>(came_from: &BTreeMap<N, N>, goal: N) -> Vec<N> {
    let mut nodes = vec![goal.clone()];
    let mut current = goal;
    while let Some(previous) = came_from.get(&current) {
        nodes.push(previous.clone());
        current = previous.clone();
    }
    nodes.reverse();
    nodes
}
