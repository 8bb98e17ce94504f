//! Random connected city maps.
//!
//! Generation runs in three phases:
//!
//! 1. **Nodes**: node 0 is the person; `hospital_count` distinct nodes from
//!    `1..node_count` are drawn without replacement and become hospitals; the
//!    rest are plain.  Names come from the fixed pools in `hl_core::config`.
//! 2. **Roads**: random node pairs are drawn; a pair that is distinct and not
//!    yet joined gets a road with a length from `road_km`.  Stops after
//!    `road_count` roads or `road_count * attempt_factor` draws, whichever
//!    comes first, so near-complete maps cannot loop for long.
//! 3. **Bridges**: if the roads left the map in several components, one road
//!    with a length from `bridge_km` joins each consecutive pair of
//!    components.  The result is always connected.

use rand::seq::index;
use tracing::{debug, warn};

use hl_core::config::{hospital_name, location_name, PERSON_NAME};
use hl_core::{GeneratorConfig, MapRng, NodeId, NodeRole};

use crate::network::{CityGraph, CityGraphBuilder};
use crate::SpatialResult;

/// Build a random connected map.
///
/// Fails only when `config` does not validate; nothing is drawn from `rng`
/// in that case.
pub fn generate_city(config: &GeneratorConfig, rng: &mut MapRng) -> SpatialResult<CityGraph> {
    config.validate()?;

    let n = config.node_count;

    // ── Phase 1: roles and names ──────────────────────────────────────────
    let mut roles = vec![NodeRole::Plain; n];
    let mut names: Vec<&str> = (0..n).map(location_name).collect();
    roles[NodeId::PERSON.index()] = NodeRole::Person;
    names[NodeId::PERSON.index()] = PERSON_NAME;

    let picks = index::sample(rng.inner(), n - 1, config.hospital_count);
    for (ordinal, offset) in picks.iter().enumerate() {
        let node = offset + 1;
        roles[node] = NodeRole::Hospital;
        names[node] = hospital_name(ordinal);
    }

    let mut b = CityGraphBuilder::with_capacity(n, config.road_count + n);
    for (name, role) in names.into_iter().zip(roles) {
        b.add_node(name, role);
    }

    // ── Phase 2: random roads ─────────────────────────────────────────────
    let upper = n as u32;
    let mut added = 0usize;
    let mut attempts = 0usize;
    while added < config.road_count && attempts < config.max_attempts() {
        attempts += 1;
        let a = NodeId(rng.gen_range(0..upper));
        let c = NodeId(rng.gen_range(0..upper));
        if a != c && !b.has_road(a, c) {
            let length_m = config.road_km.sample_m(rng);
            b.add_road(a, c, length_m)?;
            added += 1;
        }
    }
    if added < config.road_count {
        warn!(
            requested = config.road_count,
            added,
            attempts,
            "attempt budget exhausted before all roads were placed"
        );
    }

    // ── Phase 3: bridge components ────────────────────────────────────────
    let components = b.connected_components();
    if components.len() > 1 {
        debug!(components = components.len(), "bridging disconnected components");
        for pair in components.windows(2) {
            let (Some(&a), Some(&c)) = (rng.choose(&pair[0]), rng.choose(&pair[1])) else {
                continue;
            };
            let length_m = config.bridge_km.sample_m(rng);
            b.add_road(a, c, length_m)?;
        }
    }

    let graph = b.build();
    debug_assert!(graph.is_connected());
    debug!(
        nodes = graph.node_count(),
        roads = graph.road_count(),
        hospitals = config.hospital_count,
        "map generated"
    );
    Ok(graph)
}
