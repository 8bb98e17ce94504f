//! Plain data row types written by output backends.

use hl_core::NodeRole;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRow {
    pub node_id: u32,
    pub name:    String,
    pub role:    NodeRole,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadRow {
    pub node_a:      u32,
    pub node_b:      u32,
    pub distance_km: f64,
}

/// Position of a node along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStepKind {
    Start,
    Via,
    Destination,
}

impl RouteStepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteStepKind::Start       => "start",
            RouteStepKind::Via         => "via",
            RouteStepKind::Destination => "destination",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStepRow {
    /// 0-based position along the route.
    pub step:    usize,
    pub node_id: u32,
    pub name:    String,
    pub kind:    RouteStepKind,
}

/// One line of the hospital comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct HospitalDistanceRow {
    pub node_id:     u32,
    pub name:        String,
    /// `None` when the hospital is unreachable.
    pub distance_km: Option<f64>,
    /// `true` for the selected hospital.
    pub nearest:     bool,
}
