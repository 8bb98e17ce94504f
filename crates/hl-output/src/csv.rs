//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `nodes.csv`
//! - `roads.csv`
//! - `route.csv`
//! - `hospital_distances.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{HospitalDistanceRow, NodeRow, OutputResult, RoadRow, RouteStepRow};

/// Writes maps and routes to four CSV files.
pub struct CsvWriter {
    nodes:     Writer<File>,
    roads:     Writer<File>,
    route:     Writer<File>,
    distances: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the four CSV files in `dir` and write the header rows.
    ///
    /// `dir` must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut nodes = Writer::from_path(dir.join("nodes.csv"))?;
        nodes.write_record(["node_id", "name", "role"])?;

        let mut roads = Writer::from_path(dir.join("roads.csv"))?;
        roads.write_record(["node_a", "node_b", "distance_km"])?;

        let mut route = Writer::from_path(dir.join("route.csv"))?;
        route.write_record(["step", "node_id", "name", "kind"])?;

        let mut distances = Writer::from_path(dir.join("hospital_distances.csv"))?;
        distances.write_record(["node_id", "name", "distance_km", "nearest"])?;

        debug!(dir = %dir.display(), "opened csv output");
        Ok(Self { nodes, roads, route, distances, finished: false })
    }
}

/// One decimal place, matching the kilometre precision of generated roads.
fn km_field(km: f64) -> String {
    format!("{km:.1}")
}

impl OutputWriter for CsvWriter {
    fn write_nodes(&mut self, rows: &[NodeRow]) -> OutputResult<()> {
        for row in rows {
            self.nodes.write_record(&[
                row.node_id.to_string(),
                row.name.clone(),
                row.role.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_roads(&mut self, rows: &[RoadRow]) -> OutputResult<()> {
        for row in rows {
            self.roads.write_record(&[
                row.node_a.to_string(),
                row.node_b.to_string(),
                km_field(row.distance_km),
            ])?;
        }
        Ok(())
    }

    fn write_route(&mut self, rows: &[RouteStepRow]) -> OutputResult<()> {
        for row in rows {
            self.route.write_record(&[
                row.step.to_string(),
                row.node_id.to_string(),
                row.name.clone(),
                row.kind.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_hospital_distances(&mut self, rows: &[HospitalDistanceRow]) -> OutputResult<()> {
        for row in rows {
            self.distances.write_record(&[
                row.node_id.to_string(),
                row.name.clone(),
                // Empty field for an unreachable hospital.
                row.distance_km.map(km_field).unwrap_or_default(),
                (row.nearest as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.nodes.flush()?;
        self.roads.flush()?;
        self.route.flush()?;
        self.distances.flush()?;
        Ok(())
    }
}
