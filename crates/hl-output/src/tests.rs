//! Integration tests for hl-output.

use hl_core::{NodeId, NodeRole};
use hl_spatial::{find_nearest_hospital, CityGraph, CityGraphBuilder, DijkstraRouter};

/// Person → Main Street → hospital (5 km), a 9 km shortcut, and a second
/// hospital nobody can reach.
fn two_hospitals() -> CityGraph {
    let mut b = CityGraphBuilder::new();
    let p = b.add_node("Your Location", NodeRole::Person);
    let m = b.add_node("Main Street", NodeRole::Plain);
    let h = b.add_node("City General Hospital", NodeRole::Hospital);
    b.add_node("St. Mary's Medical", NodeRole::Hospital);
    b.add_road_km(p, m, 2.0).unwrap();
    b.add_road_km(m, h, 3.0).unwrap();
    b.add_road_km(p, h, 9.0).unwrap();
    b.build()
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::{display_label, format_km, hospital_rows, node_rows, road_rows, route_steps, RouteStepKind};

    #[test]
    fn labels_truncate_after_fifteen_chars() {
        assert_eq!(display_label("Main Street"), "Main Street");
        assert_eq!(display_label("Fifteen chars!!"), "Fifteen chars!!");
        assert_eq!(display_label("City General Hospital"), "City General Ho...");
        // Character count, not bytes.
        assert_eq!(display_label("Ärztehaus Süd-Ost Ü"), "Ärztehaus Süd-O...");
    }

    #[test]
    fn km_has_one_decimal() {
        assert_eq!(format_km(5.0), "5.0 km");
        assert_eq!(format_km(12.34), "12.3 km");
    }

    #[test]
    fn node_and_road_rows_cover_map() {
        let g = two_hospitals();
        let nodes = node_rows(&g);
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].role, NodeRole::Person);
        assert_eq!(nodes[3].name, "St. Mary's Medical");

        let roads = road_rows(&g);
        assert_eq!(roads.len(), 3);
        assert!(roads.iter().any(|r| (r.node_a, r.node_b) == (0, 2) && r.distance_km == 9.0));
    }

    #[test]
    fn route_narrative_marks_start_via_destination() {
        let g = two_hospitals();
        let steps = route_steps(&g, &[NodeId(0), NodeId(1), NodeId(2)]);
        let kinds: Vec<_> = steps.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, [RouteStepKind::Start, RouteStepKind::Via, RouteStepKind::Destination]);
        assert_eq!(steps[1].name, "Main Street");
        assert_eq!(steps[2].step, 2);
    }

    #[test]
    fn short_routes() {
        let g = two_hospitals();
        assert!(route_steps(&g, &[]).is_empty());

        let one = route_steps(&g, &[NodeId(0)]);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].kind, RouteStepKind::Start);

        let two = route_steps(&g, &[NodeId(0), NodeId(2)]);
        assert_eq!(two[1].kind, RouteStepKind::Destination);
    }

    #[test]
    fn hospital_table_flags_winner_and_unreachable() {
        let g = two_hospitals();
        let found = find_nearest_hospital(&DijkstraRouter, &g).unwrap().unwrap();
        let rows = hospital_rows(&g, Some(&found));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].node_id, 2);
        assert_eq!(rows[0].distance_km, Some(5.0));
        assert!(rows[0].nearest);
        assert_eq!(rows[1].node_id, 3);
        assert_eq!(rows[1].distance_km, None);
        assert!(!rows[1].nearest);
    }

    #[test]
    fn hospital_table_without_result() {
        let g = two_hospitals();
        let rows = hospital_rows(&g, None);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.distance_km.is_none() && !r.nearest));
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::report::{hospital_rows, node_rows, road_rows, route_steps};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let expected: [(&str, &[&str]); 4] = [
            ("nodes.csv", &["node_id", "name", "role"]),
            ("roads.csv", &["node_a", "node_b", "distance_km"]),
            ("route.csv", &["step", "node_id", "name", "kind"]),
            ("hospital_distances.csv", &["node_id", "name", "distance_km", "nearest"]),
        ];
        for (file, header) in expected {
            let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
            let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
            assert_eq!(headers, header, "{file}");
        }
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let g = two_hospitals();
        let found = find_nearest_hospital(&DijkstraRouter, &g).unwrap().unwrap();

        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_nodes(&node_rows(&g)).unwrap();
        w.write_roads(&road_rows(&g)).unwrap();
        w.write_route(&route_steps(&g, &found.route)).unwrap();
        w.write_hospital_distances(&hospital_rows(&g, Some(&found))).unwrap();
        w.finish().unwrap();

        let nodes = records(&dir, "nodes.csv");
        assert_eq!(nodes.len(), 4);
        assert_eq!(&nodes[0][1], "Your Location");
        assert_eq!(&nodes[0][2], "person");
        assert_eq!(&nodes[2][2], "hospital");

        let roads = records(&dir, "roads.csv");
        assert_eq!(roads.len(), 3);
        assert!(roads.iter().all(|r| r[2].contains('.')));

        let route = records(&dir, "route.csv");
        assert_eq!(route.len(), 3);
        assert_eq!(&route[0][3], "start");
        assert_eq!(&route[1][2], "Main Street");
        assert_eq!(&route[2][3], "destination");

        let dist = records(&dir, "hospital_distances.csv");
        assert_eq!(dist.len(), 2);
        assert_eq!(&dist[0][2], "5.0");
        assert_eq!(&dist[0][3], "1");
        assert_eq!(&dist[1][2], "");
        assert_eq!(&dist[1][3], "0");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use tempfile::TempDir;

    use hl_core::{MapComplexity, MapSettings};
    use hl_session::{SessionBuilder, SessionObserver};

    use super::*;
    use crate::{
        CsvWriter, ExportObserver, HospitalDistanceRow, NodeRow, OutputError, OutputResult,
        OutputWriter, RoadRow, RouteStepRow,
    };

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn session_exports_map_and_route() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = ExportObserver::new(CsvWriter::new(dir.path()).unwrap());
        let mut session = SessionBuilder::new(DijkstraRouter).seed(11).build().unwrap();

        let roads = session
            .generate(MapSettings::new(MapComplexity::Simple, 3), &mut obs)
            .unwrap()
            .road_count();
        let found = session.route(&mut obs).unwrap().unwrap().clone();
        obs.finish();
        assert!(obs.take_error().is_none());

        assert_eq!(records(&dir, "nodes.csv").len(), 8);
        assert_eq!(records(&dir, "roads.csv").len(), roads);
        assert_eq!(records(&dir, "route.csv").len(), found.route.len());

        let dist = records(&dir, "hospital_distances.csv");
        assert_eq!(dist.len(), 3);
        let flagged: Vec<_> = dist.iter().filter(|r| &r[3] == "1").collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(&flagged[0][0], found.hospital.0.to_string().as_str());
    }

    #[test]
    fn no_route_writes_unreachable_table() {
        let mut b = CityGraphBuilder::new();
        b.add_node("Your Location", NodeRole::Person);
        b.add_node("City General Hospital", NodeRole::Hospital);
        let g = b.build();

        let dir = tempfile::tempdir().unwrap();
        let mut obs = ExportObserver::new(CsvWriter::new(dir.path()).unwrap());
        obs.on_no_route(&g);
        obs.finish();
        assert!(obs.take_error().is_none());

        let dist = records(&dir, "hospital_distances.csv");
        assert_eq!(dist.len(), 1);
        assert_eq!(&dist[0][2], "");
        assert_eq!(&dist[0][3], "0");
        assert!(records(&dir, "route.csv").is_empty());
    }

    /// Fails every write with a distinct message.
    #[derive(Default)]
    struct FailingWriter {
        calls: usize,
    }

    impl FailingWriter {
        fn fail(&mut self) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(io::Error::other(format!("write {}", self.calls))))
        }
    }

    impl OutputWriter for FailingWriter {
        fn write_nodes(&mut self, _: &[NodeRow]) -> OutputResult<()> { self.fail() }
        fn write_roads(&mut self, _: &[RoadRow]) -> OutputResult<()> { self.fail() }
        fn write_route(&mut self, _: &[RouteStepRow]) -> OutputResult<()> { self.fail() }
        fn write_hospital_distances(&mut self, _: &[HospitalDistanceRow]) -> OutputResult<()> {
            self.fail()
        }
        fn finish(&mut self) -> OutputResult<()> { Ok(()) }
    }

    #[test]
    fn first_error_kept() {
        let g = two_hospitals();
        let mut obs = ExportObserver::new(FailingWriter::default());
        obs.on_map_generated(&g);
        obs.on_no_route(&g);

        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("write 1"), "{err}");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 3);
    }
}
