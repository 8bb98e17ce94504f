//! Integration tests for hl-session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use hl_core::{MapComplexity, MapSettings, NodeId, NodeRole};
use hl_spatial::{
    CityGraph, DijkstraRouter, NearestHospital, Router, ShortestPathTree, SpatialError,
    SpatialResult,
};

use crate::{
    LocatorSession, NoopObserver, SessionBuilder, SessionError, SessionKey, SessionObserver,
    SessionState, SessionStore,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn seeded(seed: u64) -> LocatorSession<DijkstraRouter> {
    SessionBuilder::new(DijkstraRouter).seed(seed).build().unwrap()
}

/// Records every callback in order.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl SessionObserver for Recorder {
    fn on_map_generated(&mut self, graph: &CityGraph) {
        self.events.push(format!("map:{}", graph.node_count()));
    }

    fn on_route_found(&mut self, _graph: &CityGraph, result: &NearestHospital) {
        self.events.push(format!("route:{}", result.hospital.0));
    }

    fn on_no_route(&mut self, _graph: &CityGraph) {
        self.events.push("no-route".into());
    }

    fn on_reset(&mut self) {
        self.events.push("reset".into());
    }
}

/// Dijkstra that can be switched off to simulate an engine failure.
#[derive(Clone)]
struct SwitchableRouter {
    broken: Arc<AtomicBool>,
}

impl Router for SwitchableRouter {
    fn shortest_paths(&self, graph: &CityGraph, source: NodeId) -> SpatialResult<ShortestPathTree> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(SpatialError::NodeNotFound(source));
        }
        DijkstraRouter.shortest_paths(graph, source)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn starts_empty_with_default_settings() {
        let session = seeded(1);
        assert_eq!(session.state(), SessionState::Empty);
        assert_eq!(session.settings(), MapSettings::default());
        assert!(session.graph().is_none());
        assert!(session.result().is_none());
        assert!(session.highlight_path().is_empty());
    }

    #[test]
    fn invalid_settings_rejected() {
        let result = SessionBuilder::new(DijkstraRouter)
            .settings(MapSettings::new(MapComplexity::Simple, 8))
            .build();
        assert!(matches!(result, Err(SessionError::Config(_))));
    }

    #[test]
    fn unseeded_session_still_generates() {
        let mut session = SessionBuilder::new(DijkstraRouter).build().unwrap();
        assert!(session.regenerate(&mut NoopObserver).is_ok());
    }
}

// ── Generate / route / reset ──────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn route_before_generate_fails() {
        let mut session = seeded(2);
        assert_eq!(session.route(&mut NoopObserver).unwrap_err(), SessionError::NoMap);
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn generate_then_route() {
        let mut session = seeded(3);
        let settings = MapSettings::new(MapComplexity::Complex, 5);
        let graph = session.generate(settings, &mut NoopObserver).unwrap();
        assert_eq!(graph.node_count(), 16);
        assert_eq!(graph.hospitals().len(), 5);
        assert_eq!(session.state(), SessionState::MapReady);
        assert_eq!(session.settings(), settings);

        let found = session.route(&mut NoopObserver).unwrap().unwrap().clone();
        assert_eq!(session.state(), SessionState::Routed);
        assert_eq!(found.route.first(), Some(&NodeId::PERSON));
        assert_eq!(found.route.last(), Some(&found.hospital));
        assert_eq!(session.highlight_path(), found.route.as_slice());
        let graph = session.graph().unwrap();
        assert_eq!(graph.role(found.hospital), Some(NodeRole::Hospital));
        assert_eq!(found.distances_m.len(), 5);
    }

    #[test]
    fn new_map_clears_previous_result() {
        let mut session = seeded(4);
        session.generate(MapSettings::default(), &mut NoopObserver).unwrap();
        session.route(&mut NoopObserver).unwrap();
        assert_eq!(session.state(), SessionState::Routed);

        session.regenerate(&mut NoopObserver).unwrap();
        assert_eq!(session.state(), SessionState::MapReady);
        assert!(session.result().is_none());
        assert!(session.highlight_path().is_empty());
    }

    #[test]
    fn invalid_generate_keeps_prior_state() {
        let mut session = seeded(5);
        session.generate(MapSettings::new(MapComplexity::Simple, 3), &mut NoopObserver).unwrap();
        session.route(&mut NoopObserver).unwrap();
        let before = session.result().cloned();
        let roads_before = session.graph().unwrap().road_count();

        let err = session
            .generate(MapSettings::new(MapComplexity::Simple, 0), &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, SessionError::Spatial(SpatialError::Config(_))));
        assert_eq!(session.state(), SessionState::Routed);
        assert_eq!(session.result().cloned(), before);
        assert_eq!(session.graph().unwrap().road_count(), roads_before);
        assert_eq!(session.settings(), MapSettings::new(MapComplexity::Simple, 3));
    }

    #[test]
    fn failed_route_keeps_prior_result() {
        let broken = Arc::new(AtomicBool::new(false));
        let router = SwitchableRouter { broken: Arc::clone(&broken) };
        let mut session = SessionBuilder::new(router).seed(6).build().unwrap();
        session.generate(MapSettings::default(), &mut NoopObserver).unwrap();
        let first = session.route(&mut NoopObserver).unwrap().cloned();
        assert!(first.is_some());

        broken.store(true, Ordering::SeqCst);
        assert!(session.route(&mut NoopObserver).is_err());
        assert_eq!(session.result().cloned(), first);
        assert_eq!(session.state(), SessionState::Routed);
    }

    #[test]
    fn reset_returns_to_empty_and_keeps_settings() {
        let mut session = seeded(7);
        let settings = MapSettings::new(MapComplexity::Simple, 6);
        session.generate(settings, &mut NoopObserver).unwrap();
        session.route(&mut NoopObserver).unwrap();
        session.reset(&mut NoopObserver);
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.graph().is_none());
        assert!(session.result().is_none());
        assert_eq!(session.settings(), settings);
    }

    #[test]
    fn same_seed_same_maps_and_routes() {
        let mut a = seeded(8);
        let mut b = seeded(8);
        for _ in 0..5 {
            a.regenerate(&mut NoopObserver).unwrap();
            b.regenerate(&mut NoopObserver).unwrap();
            let ra = a.route(&mut NoopObserver).unwrap().cloned();
            let rb = b.route(&mut NoopObserver).unwrap().cloned();
            assert_eq!(ra, rb);
        }
    }

    #[test]
    fn observer_sees_each_transition() {
        let mut session = seeded(9);
        let mut rec = Recorder::default();
        session.generate(MapSettings::new(MapComplexity::Simple, 3), &mut rec).unwrap();
        let hospital = session.route(&mut rec).unwrap().unwrap().hospital;
        session.reset(&mut rec);
        assert_eq!(
            rec.events,
            vec!["map:8".to_string(), format!("route:{}", hospital.0), "reset".to_string()]
        );
    }

    #[test]
    fn failed_actions_do_not_notify() {
        let mut session = seeded(10);
        let mut rec = Recorder::default();
        let _ = session.route(&mut rec);
        let _ = session.generate(MapSettings::new(MapComplexity::Medium, 12), &mut rec);
        assert!(rec.events.is_empty());
    }
}

// ── SessionStore ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod store_tests {
    use super::*;

    #[test]
    fn sessions_are_isolated() {
        let mut store = SessionStore::new(DijkstraRouter, MapSettings::default(), 42).unwrap();
        let alice = SessionKey(1);
        let bob = SessionKey(2);

        store.session(alice).unwrap().regenerate(&mut NoopObserver).unwrap();
        store.session(alice).unwrap().route(&mut NoopObserver).unwrap();
        store.session(bob).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(alice).unwrap().state(), SessionState::Routed);
        assert_eq!(store.get(bob).unwrap().state(), SessionState::Empty);

        store.session(bob).unwrap().regenerate(&mut NoopObserver).unwrap();
        store.session(alice).unwrap().reset(&mut NoopObserver);
        assert_eq!(store.get(alice).unwrap().state(), SessionState::Empty);
        assert_eq!(store.get(bob).unwrap().state(), SessionState::MapReady);
    }

    #[test]
    fn same_root_seed_reproduces_sessions() {
        let mut s1 = SessionStore::new(DijkstraRouter, MapSettings::default(), 7).unwrap();
        let mut s2 = SessionStore::new(DijkstraRouter, MapSettings::default(), 7).unwrap();
        for key in [SessionKey(3), SessionKey(4)] {
            let a: Vec<NodeRole> = s1
                .session(key)
                .unwrap()
                .regenerate(&mut NoopObserver)
                .unwrap()
                .nodes()
                .map(|n| n.role)
                .collect();
            let b: Vec<NodeRole> = s2
                .session(key)
                .unwrap()
                .regenerate(&mut NoopObserver)
                .unwrap()
                .nodes()
                .map(|n| n.role)
                .collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn remove_drops_session() {
        let mut store = SessionStore::new(DijkstraRouter, MapSettings::default(), 1).unwrap();
        store.session(SessionKey(5)).unwrap();
        assert!(store.remove(SessionKey(5)).is_some());
        assert!(store.is_empty());
        assert!(store.get(SessionKey(5)).is_none());
    }

    #[test]
    fn invalid_store_settings_rejected() {
        assert!(SessionStore::new(DijkstraRouter, MapSettings::new(MapComplexity::Simple, 0), 1).is_err());
    }
}
