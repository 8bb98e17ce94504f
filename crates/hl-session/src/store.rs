//! Per-client session isolation.
//!
//! A server handling several users keeps one [`LocatorSession`] per key.
//! Sessions never share maps, results or generator state; each gets a child
//! of the store's root [`MapRng`], so a fixed root seed and the same order of
//! first requests reproduce every session's maps.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use hl_core::{MapRng, MapSettings};
use hl_spatial::Router;

use crate::{LocatorSession, SessionBuilder, SessionResult};

/// Opaque client key.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct SessionKey(pub u64);

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionKey({})", self.0)
    }
}

/// Sessions keyed by client.
pub struct SessionStore<R: Router + Clone> {
    root:     MapRng,
    router:   R,
    settings: MapSettings,
    sessions: HashMap<SessionKey, LocatorSession<R>>,
}

impl<R: Router + Clone> SessionStore<R> {
    /// New sessions start with `settings` and a clone of `router`.
    pub fn new(router: R, settings: MapSettings, root_seed: u64) -> SessionResult<Self> {
        settings.generator_config().validate()?;
        Ok(Self {
            root: MapRng::new(root_seed),
            router,
            settings,
            sessions: HashMap::new(),
        })
    }

    /// The session for `key`, created empty on first use.
    pub fn session(&mut self, key: SessionKey) -> SessionResult<&mut LocatorSession<R>> {
        match self.sessions.entry(key) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                let session = SessionBuilder::new(self.router.clone())
                    .settings(self.settings)
                    .rng(self.root.child(key.0))
                    .build()?;
                debug!(%key, "session created");
                Ok(e.insert(session))
            }
        }
    }

    pub fn get(&self, key: SessionKey) -> Option<&LocatorSession<R>> {
        self.sessions.get(&key)
    }

    /// Drop a session and everything it holds.
    pub fn remove(&mut self, key: SessionKey) -> Option<LocatorSession<R>> {
        self.sessions.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
