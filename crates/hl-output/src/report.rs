//! Turn maps and routing results into rows and short strings for display.

use hl_core::NodeRole;
use hl_spatial::{CityGraph, NearestHospital};

use crate::row::{HospitalDistanceRow, NodeRow, RoadRow, RouteStepKind, RouteStepRow};

/// Longest node label shown in full on a map drawing.
const LABEL_MAX_CHARS: usize = 15;

/// Shorten `name` for a map label: more than 15 characters become the first
/// 15 followed by `"..."`.
pub fn display_label(name: &str) -> String {
    if name.chars().count() > LABEL_MAX_CHARS {
        let mut label: String = name.chars().take(LABEL_MAX_CHARS).collect();
        label.push_str("...");
        label
    } else {
        name.to_owned()
    }
}

/// `"4.2 km"`.
pub fn format_km(km: f64) -> String {
    format!("{km:.1} km")
}

pub fn node_rows(graph: &CityGraph) -> Vec<NodeRow> {
    graph
        .nodes()
        .map(|n| NodeRow { node_id: n.id.0, name: n.name.to_owned(), role: n.role })
        .collect()
}

pub fn road_rows(graph: &CityGraph) -> Vec<RoadRow> {
    graph
        .roads()
        .map(|r| RoadRow { node_a: r.a.0, node_b: r.b.0, distance_km: r.length_km() })
        .collect()
}

/// Label each node of `route`: first is the start, last the destination,
/// everything between is a via.  A one-node route is just a start.
pub fn route_steps(graph: &CityGraph, route: &[hl_core::NodeId]) -> Vec<RouteStepRow> {
    let last = route.len().saturating_sub(1);
    route
        .iter()
        .enumerate()
        .map(|(step, &node)| RouteStepRow {
            step,
            node_id: node.0,
            name:    graph.name(node).unwrap_or_default().to_owned(),
            kind:    match step {
                0 => RouteStepKind::Start,
                s if s == last => RouteStepKind::Destination,
                _ => RouteStepKind::Via,
            },
        })
        .collect()
}

/// Every hospital on the map in id order, with the selected one flagged.
///
/// Hospitals absent from `result` (or all of them, when `result` is `None`)
/// are listed as unreachable.
pub fn hospital_rows(graph: &CityGraph, result: Option<&NearestHospital>) -> Vec<HospitalDistanceRow> {
    graph
        .nodes()
        .filter(|n| match n.role {
            NodeRole::Hospital => true,
            NodeRole::Person | NodeRole::Plain => false,
        })
        .map(|n| HospitalDistanceRow {
            node_id:     n.id.0,
            name:        n.name.to_owned(),
            distance_km: result.and_then(|r| r.distance_to_km(n.id)),
            nearest:     result.is_some_and(|r| r.hospital == n.id),
        })
        .collect()
}
