//! `hl-session`: the interactive side of the hospital locator.
//!
//! A [`LocatorSession`] owns one map and at most one routing result, and
//! moves between three states:
//!
//! ```text
//!            generate()            route()
//!   Empty ───────────────▶ MapReady ────────▶ Routed
//!     ▲                      ▲  │                │
//!     │                      │  └── generate() ◀─┘  (new map, result cleared)
//!     └──────── reset() ─────┴───────────────────┘
//! ```
//!
//! Every transition replaces state wholesale; nothing is merged.  Renderers
//! hook in through [`SessionObserver`] or read the session's query methods.
//! [`SessionStore`] keeps independent sessions per client key.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hl_core::MapSettings;
//! use hl_session::{NoopObserver, SessionBuilder};
//! use hl_spatial::DijkstraRouter;
//!
//! let mut session = SessionBuilder::new(DijkstraRouter).seed(42).build()?;
//! session.generate(MapSettings::default(), &mut NoopObserver)?;
//! let found = session.route(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use observer::{NoopObserver, SessionObserver};
pub use session::{LocatorSession, SessionState};
pub use store::{SessionKey, SessionStore};
