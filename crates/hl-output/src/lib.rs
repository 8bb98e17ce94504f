//! `hl-output`: presentation rows and export for the hospital locator.
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`row`]      | Plain row types (`NodeRow`, `RoadRow`, `RouteStepRow`, `HospitalDistanceRow`) |
//! | [`report`]   | Row builders, route narrative, label/distance formatting     |
//! | [`writer`]   | `OutputWriter` trait                                         |
//! | [`csv`]      | `CsvWriter` backend                                          |
//! | [`observer`] | `ExportObserver`, bridging `SessionObserver` to a writer     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use hl_output::{CsvWriter, ExportObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ExportObserver::new(writer);
//! session.generate(settings, &mut obs)?;
//! session.route(&mut obs)?;
//! obs.finish();
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ExportObserver;
pub use report::{display_label, format_km, hospital_rows, node_rows, road_rows, route_steps};
pub use row::{HospitalDistanceRow, NodeRow, RoadRow, RouteStepKind, RouteStepRow};
pub use writer::OutputWriter;
