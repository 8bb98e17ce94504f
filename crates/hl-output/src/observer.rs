//! `ExportObserver<W>` bridges `SessionObserver` to an `OutputWriter`.

use hl_session::SessionObserver;
use hl_spatial::{CityGraph, NearestHospital};
use tracing::warn;

use crate::report::{hospital_rows, node_rows, road_rows, route_steps};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SessionObserver`] that writes every generated map and every routing
/// result to an [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SessionObserver`
/// methods have no return value.  Check for them with
/// [`take_error`][Self::take_error].
pub struct ExportObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ExportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Safe to call more than once.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "export write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SessionObserver for ExportObserver<W> {
    fn on_map_generated(&mut self, graph: &CityGraph) {
        let result = self.writer.write_nodes(&node_rows(graph));
        self.store_err(result);
        let result = self.writer.write_roads(&road_rows(graph));
        self.store_err(result);
    }

    fn on_route_found(&mut self, graph: &CityGraph, result: &NearestHospital) {
        let written = self.writer.write_route(&route_steps(graph, &result.route));
        self.store_err(written);
        let written = self.writer.write_hospital_distances(&hospital_rows(graph, Some(result)));
        self.store_err(written);
    }

    fn on_no_route(&mut self, graph: &CityGraph) {
        let written = self.writer.write_hospital_distances(&hospital_rows(graph, None));
        self.store_err(written);
    }
}
