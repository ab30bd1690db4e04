use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::geo::Coordinate;
use crate::graph::RoadGraph;
use crate::network::{NodeId, RoadNetwork};

/// Find the cheapest route between `start` and `goal` using A* search over
/// the weighted edge metric.
///
/// The heuristic is the great-circle distance from a node to the goal, which
/// never overestimates the remaining road distance. Returns the node sequence
/// from `start` to `goal` inclusive, or `None` when the two nodes are not
/// connected.
pub fn find_route_a_star(
    graph: &RoadGraph,
    network: &RoadNetwork,
    start: NodeId,
    goal: NodeId,
) -> Option<Vec<NodeId>> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let goal_position = network.position(goal)?;

    let mut g_score: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start, 0.0);
    parents.insert(start, None);
    let start_estimate = heuristic_distance(network, start, goal_position);
    queue.push(AStarEntry::new(start, 0.0, start_estimate));

    while let Some(entry) = queue.pop() {
        let current_score = match g_score.get(&entry.node) {
            Some(score) if (*score - entry.cost.0).abs() < f64::EPSILON => *score,
            Some(score) if *score < entry.cost.0 => continue,
            Some(score) => *score,
            None => continue,
        };

        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let tentative_g = current_score + edge.weighted_cost();
            if tentative_g < *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative_g);
                parents.insert(next, Some(entry.node));
                let heuristic = heuristic_distance(network, next, goal_position);
                queue.push(AStarEntry::new(next, tentative_g, heuristic));
            }
        }
    }

    None
}

/// One traversed edge of a planned route with its raw physical distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLeg {
    pub from: NodeId,
    pub to: NodeId,
    pub distance_km: f64,
}

/// Expand a node sequence into the legs that connect consecutive nodes.
///
/// Legs carry the raw distance of the cheapest edge between each pair, which
/// is what energy accounting operates on. Returns `None` when two consecutive
/// nodes share no edge, which cannot happen for a path produced by the search.
pub fn route_legs(graph: &RoadGraph, path: &[NodeId]) -> Option<Vec<RouteLeg>> {
    let mut legs = Vec::with_capacity(path.len().saturating_sub(1));
    for pair in path.windows(2) {
        let edge = graph.edge_between(pair[0], pair[1])?;
        legs.push(RouteLeg {
            from: pair[0],
            to: pair[1],
            distance_km: edge.distance_km,
        });
    }
    Some(legs)
}

fn heuristic_distance(network: &RoadNetwork, from: NodeId, goal: Coordinate) -> f64 {
    match network.position(from) {
        Some(position) => position.distance_km(&goal),
        None => 0.0,
    }
}

fn reconstruct_path(
    parents: &HashMap<NodeId, Option<NodeId>>,
    start: NodeId,
    goal: NodeId,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: NodeId,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: NodeId, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
