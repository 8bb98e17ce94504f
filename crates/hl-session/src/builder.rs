//! Fluent builder for constructing a [`LocatorSession`].

use hl_core::{MapRng, MapSettings};
use hl_spatial::Router;

use crate::{LocatorSession, SessionResult};

/// Fluent builder for [`LocatorSession<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                              |
/// |-----------------|--------------------------------------|
/// | `.settings(s)`  | `MapSettings::default()` (medium, 4) |
/// | `.seed(n)`      | OS entropy (maps not reproducible)   |
/// | `.rng(r)`       | none; overrides `.seed`              |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(DijkstraRouter)
///     .settings(MapSettings::new(MapComplexity::Simple, 3))
///     .seed(42)
///     .build()?;
/// ```
pub struct SessionBuilder<R: Router> {
    router:   R,
    settings: MapSettings,
    seed:     Option<u64>,
    rng:      Option<MapRng>,
}

impl<R: Router> SessionBuilder<R> {
    pub fn new(router: R) -> Self {
        Self {
            router,
            settings: MapSettings::default(),
            seed:     None,
            rng:      None,
        }
    }

    /// Settings used by [`LocatorSession::regenerate`] until the first
    /// explicit `generate`.
    pub fn settings(mut self, settings: MapSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Seed the session's map generator for reproducible maps.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Supply an already-seeded generator, e.g. a [`MapRng::child`].
    pub fn rng(mut self, rng: MapRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the settings and return an empty session.
    pub fn build(self) -> SessionResult<LocatorSession<R>> {
        self.settings.generator_config().validate()?;

        let rng = match (self.rng, self.seed) {
            (Some(rng), _)     => rng,
            (None, Some(seed)) => MapRng::new(seed),
            (None, None)       => MapRng::from_entropy(),
        };

        Ok(LocatorSession {
            settings: self.settings,
            rng,
            router:   self.router,
            graph:    None,
            result:   None,
        })
    }
}
