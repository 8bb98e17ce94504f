//! Nearest-target selection.
//!
//! One shortest-path run from the source serves every candidate, so the cost
//! is a single Dijkstra regardless of how many hospitals the map has.

use std::collections::BTreeMap;

use tracing::debug;

use hl_core::NodeId;

use crate::network::CityGraph;
use crate::router::Router;
use crate::{SpatialError, SpatialResult};

/// The closest hospital, the route to it, and every candidate's distance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NearestHospital {
    pub hospital:   NodeId,
    pub name:       String,
    pub distance_m: u32,
    /// Node sequence from the source to `hospital`, both ends included.
    pub route:      Vec<NodeId>,
    /// Distance to every candidate; `None` when a candidate is unreachable.
    pub distances_m: BTreeMap<NodeId, Option<u32>>,
}

impl NearestHospital {
    pub fn distance_km(&self) -> f64 {
        self.distance_m as f64 / 1000.0
    }

    /// Distance to any candidate in kilometres.
    pub fn distance_to_km(&self, target: NodeId) -> Option<f64> {
        self.distances_m
            .get(&target)
            .copied()
            .flatten()
            .map(|d| d as f64 / 1000.0)
    }
}

/// Pick the candidate in `targets` closest to `source`.
///
/// Returns `Ok(None)` when `targets` is empty or none of them is reachable.
/// Candidates are scanned in slice order and the first one at the minimum
/// distance wins.  Only the winner's route is reconstructed.
pub fn find_nearest<R: Router + ?Sized>(
    router:  &R,
    graph:   &CityGraph,
    source:  NodeId,
    targets: &[NodeId],
) -> SpatialResult<Option<NearestHospital>> {
    if let Some(&missing) = targets.iter().find(|t| !graph.contains(**t)) {
        return Err(SpatialError::NodeNotFound(missing));
    }
    if targets.is_empty() {
        debug!(%source, "no candidate targets");
        return Ok(None);
    }

    let tree = router.shortest_paths(graph, source)?;

    let mut best: Option<(NodeId, u32)> = None;
    let mut distances_m = BTreeMap::new();
    for &target in targets {
        let d = tree.distance_m(target);
        distances_m.insert(target, d);
        if let Some(d) = d {
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((target, d));
            }
        }
    }

    let Some((hospital, distance_m)) = best else {
        debug!(%source, candidates = targets.len(), "no candidate reachable");
        return Ok(None);
    };

    let route = tree.path_to(hospital);
    debug!(%source, %hospital, distance_m, hops = route.len().saturating_sub(1), "nearest target selected");

    Ok(Some(NearestHospital {
        hospital,
        name: graph.name(hospital).unwrap_or_default().to_owned(),
        distance_m,
        route,
        distances_m,
    }))
}

/// [`find_nearest`] from the map's person node over all of its hospitals.
pub fn find_nearest_hospital<R: Router + ?Sized>(
    router: &R,
    graph:  &CityGraph,
) -> SpatialResult<Option<NearestHospital>> {
    let person = graph.person().ok_or(SpatialError::NoPerson)?;
    find_nearest(router, graph, person, &graph.hospitals())
}
