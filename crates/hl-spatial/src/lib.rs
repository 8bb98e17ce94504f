//! `hl-spatial`: city map graph, map generation, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`network`]   | `CityGraph` (undirected CSR), `CityGraphBuilder`           |
//! | [`generator`] | `generate_city`, random connected map                     |
//! | [`router`]    | `Router` trait, `DijkstraRouter`, `ShortestPathTree`, `reconstruct_path` |
//! | [`nearest`]   | `find_nearest`, `find_nearest_hospital`, `NearestHospital` |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize` on nodes, roads and routing results.     |

pub mod error;
pub mod generator;
pub mod nearest;
pub mod network;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use generator::generate_city;
pub use nearest::{find_nearest, find_nearest_hospital, NearestHospital};
pub use network::{connected_components, CityGraph, CityGraphBuilder, MapNode, Road};
pub use router::{reconstruct_path, DijkstraRouter, Router, ShortestPathTree, UNREACHABLE};
