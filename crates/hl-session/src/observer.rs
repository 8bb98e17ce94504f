//! Session observer trait for renderers and exporters.

use hl_spatial::{CityGraph, NearestHospital};

/// Callbacks invoked by [`LocatorSession`][crate::LocatorSession] after each
/// successful transition.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers get read-only access; they
/// cannot change session state.
///
/// # Example: console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SessionObserver for Printer {
///     fn on_route_found(&mut self, _graph: &CityGraph, result: &NearestHospital) {
///         println!("nearest: {} ({:.1} km)", result.name, result.distance_km());
///     }
/// }
/// ```
pub trait SessionObserver {
    /// A new map replaced the previous one.
    fn on_map_generated(&mut self, _graph: &CityGraph) {}

    /// Routing found a nearest hospital.
    fn on_route_found(&mut self, _graph: &CityGraph, _result: &NearestHospital) {}

    /// Routing ran but no hospital was reachable.
    fn on_no_route(&mut self, _graph: &CityGraph) {}

    /// The session was cleared.
    fn on_reset(&mut self) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
