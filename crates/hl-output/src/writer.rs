//! The `OutputWriter` trait implemented by export backends.

use crate::{HospitalDistanceRow, NodeRow, OutputResult, RoadRow, RouteStepRow};

/// Sink for map and route rows.
///
/// Errors are returned to the caller; [`ExportObserver`][crate::ExportObserver]
/// stores them because session callbacks have no return value.
pub trait OutputWriter {
    /// Write every node of a freshly generated map.
    fn write_nodes(&mut self, rows: &[NodeRow]) -> OutputResult<()>;

    /// Write every road of a freshly generated map.
    fn write_roads(&mut self, rows: &[RoadRow]) -> OutputResult<()>;

    /// Write the steps of one route, start to destination.
    fn write_route(&mut self, rows: &[RouteStepRow]) -> OutputResult<()>;

    /// Write the per-hospital distance table of one routing request.
    fn write_hospital_distances(&mut self, rows: &[HospitalDistanceRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
