//! `hl-core`: foundational types for the hospital locator.
//!
//! This crate is a dependency of every other `hl-*` crate.  It has no `hl-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `RoadId`                                          |
//! | [`role`]   | `NodeRole` (person / hospital / plain)                      |
//! | [`config`] | `MapComplexity`, `MapSettings`, `GeneratorConfig`, name pools |
//! | [`rng`]    | `MapRng`                                                    |
//! | [`error`]  | `HlError`, `HlResult`                                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, roles and config.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod role;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GeneratorConfig, MapComplexity, MapSettings, WeightRange};
pub use error::{HlError, HlResult};
pub use ids::{NodeId, RoadId};
pub use rng::MapRng;
pub use role::NodeRole;
