//! The `LocatorSession` struct and its three actions.

use tracing::{info, warn};

use hl_core::{MapRng, MapSettings, NodeId};
use hl_spatial::{find_nearest_hospital, generate_city, CityGraph, NearestHospital, Router};

use crate::{SessionError, SessionObserver, SessionResult};

/// Where a session is in its generate → route cycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SessionState {
    /// No map yet (fresh or reset).
    Empty,
    /// A map exists but has not been routed.
    MapReady,
    /// A map exists and holds a routing result.
    Routed,
}

/// One user's map and latest routing result.
///
/// The algorithms it calls are stateless; all mutable state lives here and
/// is replaced wholesale by each action.  A failed action leaves the session
/// exactly as it was.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct LocatorSession<R: Router> {
    pub(crate) settings: MapSettings,
    pub(crate) rng:      MapRng,
    pub(crate) router:   R,
    pub(crate) graph:    Option<CityGraph>,
    pub(crate) result:   Option<NearestHospital>,
}

impl<R: Router> LocatorSession<R> {
    // ── Actions ───────────────────────────────────────────────────────────

    /// Generate a fresh map with `settings`, replacing any previous map and
    /// discarding its routing result.
    ///
    /// Invalid settings return an error and leave the session untouched.
    pub fn generate<O: SessionObserver>(
        &mut self,
        settings: MapSettings,
        observer: &mut O,
    ) -> SessionResult<&CityGraph> {
        let graph = generate_city(&settings.generator_config(), &mut self.rng)?;

        self.settings = settings;
        self.result = None;
        let graph = self.graph.insert(graph);

        info!(
            complexity = %settings.complexity,
            hospitals = settings.hospital_count,
            roads = graph.road_count(),
            "new map generated"
        );
        observer.on_map_generated(graph);
        Ok(&*graph)
    }

    /// Generate a fresh map with the settings of the last successful
    /// [`generate`](Self::generate) (or the builder's settings).
    pub fn regenerate<O: SessionObserver>(&mut self, observer: &mut O) -> SessionResult<&CityGraph> {
        self.generate(self.settings, observer)
    }

    /// Find the hospital nearest to the person on the current map.
    ///
    /// Returns `Ok(None)` if no hospital is reachable.  Fails with
    /// [`SessionError::NoMap`] before any map has been generated.
    pub fn route<O: SessionObserver>(
        &mut self,
        observer: &mut O,
    ) -> SessionResult<Option<&NearestHospital>> {
        let graph = self.graph.as_ref().ok_or(SessionError::NoMap)?;
        let found = find_nearest_hospital(&self.router, graph)?;

        match &found {
            Some(r) => {
                info!(hospital = %r.name, distance_km = r.distance_km(), stops = r.route.len(), "route found");
                observer.on_route_found(graph, r);
            }
            None => {
                warn!("no hospital reachable from the person");
                observer.on_no_route(graph);
            }
        }
        self.result = found;
        Ok(self.result.as_ref())
    }

    /// Drop the map and any result.  Settings are kept.
    pub fn reset<O: SessionObserver>(&mut self, observer: &mut O) {
        self.graph = None;
        self.result = None;
        info!("session reset");
        observer.on_reset();
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        match (&self.graph, &self.result) {
            (None, _)          => SessionState::Empty,
            (Some(_), None)    => SessionState::MapReady,
            (Some(_), Some(_)) => SessionState::Routed,
        }
    }

    /// Settings of the current (or next) map.
    pub fn settings(&self) -> MapSettings {
        self.settings
    }

    pub fn graph(&self) -> Option<&CityGraph> {
        self.graph.as_ref()
    }

    pub fn result(&self) -> Option<&NearestHospital> {
        self.result.as_ref()
    }

    /// Nodes to highlight as the winning route; empty until routed.
    pub fn highlight_path(&self) -> &[NodeId] {
        self.result
            .as_ref()
            .map(|r| r.route.as_slice())
            .unwrap_or_default()
    }
}
