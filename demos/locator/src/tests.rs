//! Tests for the locator demo's JSON view.

#[cfg(test)]
mod json_tests {
    use hl_core::{MapComplexity, MapSettings};
    use hl_session::{NoopObserver, SessionBuilder};
    use hl_spatial::DijkstraRouter;
    use serde_json::Value;

    use crate::{map_json, run};

    #[test]
    fn routed_map_is_a_single_json_document() {
        let settings = MapSettings::new(MapComplexity::Simple, 3);
        let mut session = SessionBuilder::new(DijkstraRouter).seed(42).build().unwrap();
        run(&mut session, settings, &mut NoopObserver).unwrap();

        let graph = session.graph().unwrap();
        let text = map_json(graph, settings.complexity, session.result()).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(doc["complexity"], "simple");
        assert_eq!(doc["nodes"].as_array().unwrap().len(), 8);
        assert_eq!(doc["nodes"][0]["name"], "Your Location");
        assert_eq!(doc["nodes"][0]["role"], "person");
        assert_eq!(doc["roads"].as_array().unwrap().len(), graph.road_count());

        let nearest = session.result().unwrap();
        assert_eq!(doc["nearest"]["hospital"], nearest.hospital.0);
        assert_eq!(doc["nearest"]["distance_m"], nearest.distance_m);
        assert_eq!(
            doc["nearest"]["route"].as_array().unwrap().len(),
            nearest.route.len()
        );
        // Per-hospital distances are keyed by node id.
        assert_eq!(doc["nearest"]["distances_m"].as_object().unwrap().len(), 3);
    }

    #[test]
    fn unrouted_map_has_null_nearest() {
        let settings = MapSettings::new(MapComplexity::Medium, 4);
        let mut session = SessionBuilder::new(DijkstraRouter).seed(7).build().unwrap();
        session.generate(settings, &mut NoopObserver).unwrap();

        let text = map_json(session.graph().unwrap(), settings.complexity, None).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();
        assert!(doc["nearest"].is_null());
        assert_eq!(doc["nodes"].as_array().unwrap().len(), 12);
    }
}
