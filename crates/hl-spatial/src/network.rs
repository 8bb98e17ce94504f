//! City map representation and builder.
//!
//! # Data layout
//!
//! Roads are undirected.  Each road is stored once in the `road_*` arrays
//! (indexed by `RoadId`, insertion order) and twice in the **Compressed
//! Sparse Row (CSR)** adjacency, once per direction.  Given a `NodeId n`, its
//! incident arcs occupy the slice:
//!
//! ```text
//! arc_to[ node_arc_start[n] .. node_arc_start[n+1] ]
//! ```
//!
//! so iterating a node's neighbours is a contiguous scan.
//!
//! # Units
//!
//! Road lengths are whole metres (`u32`).  Generated roads are multiples of
//! 100 m (one decimal in kilometres), so path sums are exact.

use std::collections::HashSet;

use hl_core::{NodeId, NodeRole, RoadId};

use crate::{SpatialError, SpatialResult};

// ── Read-only views ───────────────────────────────────────────────────────────

/// One node as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MapNode<'a> {
    pub id:   NodeId,
    pub name: &'a str,
    pub role: NodeRole,
}

/// One undirected road.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Road {
    pub id:       RoadId,
    pub a:        NodeId,
    pub b:        NodeId,
    pub length_m: u32,
}

impl Road {
    #[inline]
    pub fn length_km(&self) -> f64 {
        self.length_m as f64 / 1000.0
    }

    /// The endpoint opposite `node`, or `None` if `node` is not on this road.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

// ── CityGraph ─────────────────────────────────────────────────────────────────

/// Undirected, weighted city map.
///
/// Built only through [`CityGraphBuilder`] or
/// [`generate_city`](crate::generate_city), so every map has no self-loops,
/// no duplicate roads and only positive lengths.  Read it through the query
/// methods below.
#[derive(Debug, Clone)]
pub struct CityGraph {
    // ── Node data (indexed by NodeId) ─────────────────────────────────────
    pub(crate) node_name: Vec<String>,
    pub(crate) node_role: Vec<NodeRole>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// Row pointer.  Arcs of node `n` are at `node_arc_start[n] .. node_arc_start[n+1]`.
    /// Length = `node_count + 1`.
    pub(crate) node_arc_start: Vec<u32>,
    /// Neighbour reached by each arc.
    pub(crate) arc_to: Vec<NodeId>,
    /// Road each arc belongs to.
    pub(crate) arc_road: Vec<RoadId>,

    // ── Road data (indexed by RoadId) ─────────────────────────────────────
    pub(crate) road_a:        Vec<NodeId>,
    pub(crate) road_b:        Vec<NodeId>,
    pub(crate) road_length_m: Vec<u32>,
}

impl CityGraph {
    /// A map with no nodes or roads.
    pub fn empty() -> Self {
        CityGraphBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_name.len()
    }

    pub fn road_count(&self) -> usize {
        self.road_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_name.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    // ── Node queries ──────────────────────────────────────────────────────

    pub fn node(&self, id: NodeId) -> Option<MapNode<'_>> {
        if !self.contains(id) {
            return None;
        }
        Some(MapNode {
            id,
            name: &self.node_name[id.index()],
            role: self.node_role[id.index()],
        })
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = MapNode<'_>> + '_ {
        self.node_name
            .iter()
            .zip(&self.node_role)
            .enumerate()
            .map(|(i, (name, &role))| MapNode { id: NodeId(i as u32), name, role })
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node_name.get(id.index()).map(String::as_str)
    }

    pub fn role(&self, id: NodeId) -> Option<NodeRole> {
        self.node_role.get(id.index()).copied()
    }

    /// The first node tagged [`NodeRole::Person`].
    pub fn person(&self) -> Option<NodeId> {
        self.node_role
            .iter()
            .position(|&r| r == NodeRole::Person)
            .map(|i| NodeId(i as u32))
    }

    /// Hospital nodes in ascending id order.
    pub fn hospitals(&self) -> Vec<NodeId> {
        NodeId::dense(self.node_count())
            .filter(|n| self.node_role[n.index()].is_target())
            .collect()
    }

    // ── Road queries ──────────────────────────────────────────────────────

    pub fn road(&self, id: RoadId) -> Option<Road> {
        let i = id.index();
        (i < self.road_count()).then(|| Road {
            id,
            a:        self.road_a[i],
            b:        self.road_b[i],
            length_m: self.road_length_m[i],
        })
    }

    /// All roads in insertion order.
    pub fn roads(&self) -> impl Iterator<Item = Road> + '_ {
        (0..self.road_count()).map(|i| Road {
            id:       RoadId(i as u32),
            a:        self.road_a[i],
            b:        self.road_b[i],
            length_m: self.road_length_m[i],
        })
    }

    /// `(neighbour, length_m)` for every road incident to `node`.
    ///
    /// A contiguous index range; no heap allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, u32)> + '_ {
        let start = self.node_arc_start[node.index()] as usize;
        let end   = self.node_arc_start[node.index() + 1] as usize;
        (start..end).map(|arc| {
            (self.arc_to[arc], self.road_length_m[self.arc_road[arc].index()])
        })
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        let start = self.node_arc_start[node.index()] as usize;
        let end   = self.node_arc_start[node.index() + 1] as usize;
        end - start
    }

    /// The road joining `a` and `b`, if any.
    pub fn road_between(&self, a: NodeId, b: NodeId) -> Option<RoadId> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        let start = self.node_arc_start[a.index()] as usize;
        let end   = self.node_arc_start[a.index() + 1] as usize;
        (start..end)
            .find(|&arc| self.arc_to[arc] == b)
            .map(|arc| self.arc_road[arc])
    }

    pub fn length_between_m(&self, a: NodeId, b: NodeId) -> Option<u32> {
        self.road_between(a, b).map(|r| self.road_length_m[r.index()])
    }

    /// Total length of a node sequence, or `None` if two consecutive nodes
    /// are not joined by a road.
    pub fn path_length_m(&self, path: &[NodeId]) -> Option<u32> {
        path.windows(2)
            .try_fold(0u32, |acc, w| acc.checked_add(self.length_between_m(w[0], w[1])?))
    }

    // ── Connectivity ──────────────────────────────────────────────────────

    /// Connected components, ordered by their smallest node id.
    pub fn connected_components(&self) -> Vec<Vec<NodeId>> {
        connected_components(
            self.node_count(),
            self.road_a.iter().copied().zip(self.road_b.iter().copied()),
        )
    }

    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }
}

/// Group `0..node_count` into connected components under the given
/// undirected `roads`.
///
/// Components are ordered by their smallest member and each component lists
/// its members in ascending order.
pub fn connected_components(
    node_count: usize,
    roads: impl IntoIterator<Item = (NodeId, NodeId)>,
) -> Vec<Vec<NodeId>> {
    let mut parent: Vec<usize> = (0..node_count).collect();

    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    for (a, b) in roads {
        let ra = find(&mut parent, a.index());
        let rb = find(&mut parent, b.index());
        if ra != rb {
            // Smaller root wins so roots stay stable across merges.
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            parent[hi] = lo;
        }
    }

    let mut slot_of_root = vec![usize::MAX; node_count];
    let mut components: Vec<Vec<NodeId>> = Vec::new();
    for n in 0..node_count {
        let root = find(&mut parent, n);
        if slot_of_root[root] == usize::MAX {
            slot_of_root[root] = components.len();
            components.push(Vec::new());
        }
        components[slot_of_root[root]].push(NodeId(n as u32));
    }
    components
}

// ── CityGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`CityGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use hl_core::NodeRole;
/// use hl_spatial::CityGraphBuilder;
///
/// let mut b = CityGraphBuilder::new();
/// let home = b.add_node("Your Location", NodeRole::Person);
/// let er   = b.add_node("Trauma Center", NodeRole::Hospital);
/// b.add_road(home, er, 4_200).unwrap();
/// let map = b.build();
/// assert_eq!(map.node_count(), 2);
/// assert_eq!(map.road_count(), 1);
/// ```
pub struct CityGraphBuilder {
    names: Vec<String>,
    roles: Vec<NodeRole>,
    roads: Vec<RawRoad>,
    seen:  HashSet<(NodeId, NodeId)>,
}

struct RawRoad {
    a:        NodeId,
    b:        NodeId,
    length_m: u32,
}

#[inline]
fn road_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl CityGraphBuilder {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            roles: Vec::new(),
            roads: Vec::new(),
            seen:  HashSet::new(),
        }
    }

    pub fn with_capacity(nodes: usize, roads: usize) -> Self {
        Self {
            names: Vec::with_capacity(nodes),
            roles: Vec::with_capacity(nodes),
            roads: Vec::with_capacity(roads),
            seen:  HashSet::with_capacity(roads),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, name: impl Into<String>, role: NodeRole) -> NodeId {
        let id = NodeId(self.names.len() as u32);
        self.names.push(name.into());
        self.roles.push(role);
        id
    }

    /// Add an undirected road of `length_m` metres between `a` and `b`.
    ///
    /// Rejects unknown endpoints, self-loops, a second road between the same
    /// pair, and zero length.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, length_m: u32) -> SpatialResult<RoadId> {
        for n in [a, b] {
            if n.index() >= self.names.len() {
                return Err(SpatialError::NodeNotFound(n));
            }
        }
        if a == b {
            return Err(SpatialError::SelfLoop(a));
        }
        if length_m == 0 {
            return Err(SpatialError::NonPositiveLength { a, b });
        }
        if !self.seen.insert(road_key(a, b)) {
            return Err(SpatialError::DuplicateRoad { a, b });
        }
        let id = RoadId(self.roads.len() as u32);
        self.roads.push(RawRoad { a, b, length_m });
        Ok(id)
    }

    /// Convenience: length in kilometres, rounded to whole metres.
    pub fn add_road_km(&mut self, a: NodeId, b: NodeId, length_km: f64) -> SpatialResult<RoadId> {
        if !(length_km.is_finite() && length_km > 0.0) {
            return Err(SpatialError::NonPositiveLength { a, b });
        }
        let length_m = (length_km * 1000.0).round().min(u32::MAX as f64) as u32;
        self.add_road(a, b, length_m)
    }

    pub fn has_road(&self, a: NodeId, b: NodeId) -> bool {
        self.seen.contains(&road_key(a, b))
    }

    pub fn node_count(&self) -> usize { self.names.len() }
    pub fn road_count(&self) -> usize { self.roads.len() }

    /// Components of the roads added so far; see [`connected_components`].
    pub fn connected_components(&self) -> Vec<Vec<NodeId>> {
        connected_components(self.names.len(), self.roads.iter().map(|r| (r.a, r.b)))
    }

    /// Consume the builder and produce a [`CityGraph`].
    pub fn build(self) -> CityGraph {
        let node_count = self.names.len();

        // Two arcs per road, grouped by source node.  Stable sort keeps
        // neighbours in road insertion order.
        let mut arcs: Vec<(NodeId, NodeId, RoadId)> = Vec::with_capacity(self.roads.len() * 2);
        for (i, r) in self.roads.iter().enumerate() {
            let id = RoadId(i as u32);
            arcs.push((r.a, r.b, id));
            arcs.push((r.b, r.a, id));
        }
        arcs.sort_by_key(|&(from, _, _)| from);

        let mut node_arc_start = vec![0u32; node_count + 1];
        for &(from, _, _) in &arcs {
            node_arc_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_arc_start[i] += node_arc_start[i - 1];
        }
        debug_assert_eq!(node_arc_start[node_count] as usize, arcs.len());

        CityGraph {
            node_name:     self.names,
            node_role:     self.roles,
            node_arc_start,
            arc_to:        arcs.iter().map(|&(_, to, _)| to).collect(),
            arc_road:      arcs.iter().map(|&(_, _, road)| road).collect(),
            road_a:        self.roads.iter().map(|r| r.a).collect(),
            road_b:        self.roads.iter().map(|r| r.b).collect(),
            road_length_m: self.roads.iter().map(|r| r.length_m).collect(),
        }
    }
}

impl Default for CityGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
