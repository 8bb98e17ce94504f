//! Single-source shortest paths and route reconstruction.
//!
//! # Pluggability
//!
//! Nearest-hospital selection calls routing through the [`Router`] trait, so
//! a session can swap in another engine without touching the selector.  The
//! default [`DijkstraRouter`] is a binary-heap Dijkstra over the CSR map.
//!
//! # Cost units
//!
//! Distances are whole metres (`u32`).  [`UNREACHABLE`] (`u32::MAX`) marks
//! nodes with no path from the source; relaxation saturates so it never
//! wraps.  Road lengths are non-negative by construction (the builder rejects
//! zero and the type is unsigned), which is what makes the greedy settle
//! order optimal.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use hl_core::NodeId;

use crate::network::CityGraph;
use crate::{SpatialError, SpatialResult};

/// Distance of a node not reachable from the source.
pub const UNREACHABLE: u32 = u32::MAX;

// ── ShortestPathTree ──────────────────────────────────────────────────────────

/// Distance and predecessor tables from one source.
///
/// Owned by the caller of a single routing request; recomputed from scratch
/// for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: NodeId,
    /// `dist_m[v]` = shortest distance from `source` to `v`, or `UNREACHABLE`.
    dist_m: Vec<u32>,
    /// `prev[v]` = node `v` was last improved from; `NodeId::INVALID` for the
    /// source and for unreached nodes.
    prev:   Vec<NodeId>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.dist_m.len()
    }

    /// Distance in metres, `None` if unreachable or out of range.
    pub fn distance_m(&self, node: NodeId) -> Option<u32> {
        self.dist_m.get(node.index()).copied().filter(|&d| d != UNREACHABLE)
    }

    pub fn distance_km(&self, node: NodeId) -> Option<f64> {
        self.distance_m(node).map(|d| d as f64 / 1000.0)
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance_m(node).is_some()
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.prev.get(node.index()).copied().filter(|p| p.is_valid())
    }

    /// Raw distance table, indexed by `NodeId`.
    pub fn distances_m(&self) -> &[u32] {
        &self.dist_m
    }

    /// Raw predecessor table, indexed by `NodeId`.
    pub fn predecessors(&self) -> &[NodeId] {
        &self.prev
    }

    /// Route from the source to `target`; empty if `target` is unreachable.
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        reconstruct_path(&self.prev, self.source, target)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations hold no mutable state; every call returns fresh tables.
pub trait Router: Send + Sync {
    /// Shortest distances and predecessors from `source` to every node.
    ///
    /// Fails only if `source` is not a node of `graph`.
    fn shortest_paths(&self, graph: &CityGraph, source: NodeId) -> SpatialResult<ShortestPathTree>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR map.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_paths(&self, graph: &CityGraph, source: NodeId) -> SpatialResult<ShortestPathTree> {
        dijkstra(graph, source)
    }
}

fn dijkstra(graph: &CityGraph, source: NodeId) -> SpatialResult<ShortestPathTree> {
    if !graph.contains(source) {
        return Err(SpatialError::NodeNotFound(source));
    }

    let n = graph.node_count();
    let mut dist    = vec![UNREACHABLE; n];
    let mut prev    = vec![NodeId::INVALID; n];
    let mut settled = vec![false; n];

    dist[source.index()] = 0;

    // Min-heap: (distance, node). Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    let mut settled_count = 0usize;
    while let Some(Reverse((cost, node))) = heap.pop() {
        // A node can sit in the heap several times; only the first pop counts.
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        settled_count += 1;

        for (neighbor, length_m) in graph.neighbors(node) {
            if settled[neighbor.index()] {
                continue;
            }
            let new_cost = cost.saturating_add(length_m);
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = node;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    debug!(%source, settled = settled_count, nodes = n, "shortest paths computed");
    Ok(ShortestPathTree { source, dist_m: dist, prev })
}

// ── Path reconstruction ───────────────────────────────────────────────────────

/// Walk predecessor links back from `target` and return the route in
/// `source → target` order.
///
/// Returns an empty vector when the walk does not end at `source` (target
/// unreachable) or `target` is not in the table.  A route to the source itself
/// is `[source]`.
pub fn reconstruct_path(predecessors: &[NodeId], source: NodeId, target: NodeId) -> Vec<NodeId> {
    if target.index() >= predecessors.len() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut cur = target;
    while let Some(&p) = predecessors.get(cur.index()) {
        if !p.is_valid() {
            break;
        }
        // A well-formed table is a forest; more hops than nodes means a cycle.
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        path.push(p);
        cur = p;
    }
    path.reverse();

    if path.first() == Some(&source) { path } else { Vec::new() }
}
