//! Map-generation configuration: complexity presets, road-length ranges and
//! the name pools used to label nodes.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::{HlError, HlResult, MapRng};

/// Name given to the person's node (node 0).
pub const PERSON_NAME: &str = "Your Location";

/// Names for plain nodes, assigned cyclically by node index.
pub const LOCATION_NAMES: [&str; 16] = [
    "Central Square", "Park Avenue", "Main Street", "Downtown",
    "Riverside", "Hillview", "Market Place", "University Area",
    "Industrial Zone", "Residential Area", "Shopping Mall", "Airport Road",
    "Business District", "Old Town", "New City", "Suburb",
];

/// Names for hospitals, assigned cyclically in selection order.
pub const HOSPITAL_NAMES: [&str; 6] = [
    "City General Hospital", "Emergency Medical Center", "St. Mary Hospital",
    "Regional Medical Center", "Community Hospital", "Trauma Center",
];

/// Hospital counts offered by interactive front ends.  Advisory only; the
/// hard limit is `1..node_count`.
pub const HOSPITAL_COUNT_RANGE: RangeInclusive<usize> = 3..=6;

/// Hospitals placed when no count is given.
pub const DEFAULT_HOSPITAL_COUNT: usize = 4;

/// Upper bound on a configured road length.  Keeps metre totals far from
/// `u32::MAX` on any map the generator can produce.
const MAX_ROAD_KM: f64 = 1_000.0;

// ── MapComplexity ─────────────────────────────────────────────────────────────

/// Size presets for generated maps.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MapComplexity {
    /// 8 nodes, 12 roads.
    Simple,
    /// 12 nodes, 18 roads.
    #[default]
    Medium,
    /// 16 nodes, 25 roads.
    Complex,
}

impl MapComplexity {
    pub const ALL: [MapComplexity; 3] =
        [MapComplexity::Simple, MapComplexity::Medium, MapComplexity::Complex];

    pub fn node_count(self) -> usize {
        match self {
            MapComplexity::Simple  => 8,
            MapComplexity::Medium  => 12,
            MapComplexity::Complex => 16,
        }
    }

    /// Number of random roads requested before the connectivity pass.
    pub fn road_count(self) -> usize {
        match self {
            MapComplexity::Simple  => 12,
            MapComplexity::Medium  => 18,
            MapComplexity::Complex => 25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MapComplexity::Simple  => "simple",
            MapComplexity::Medium  => "medium",
            MapComplexity::Complex => "complex",
        }
    }
}

impl fmt::Display for MapComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapComplexity {
    type Err = HlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple"  => Ok(MapComplexity::Simple),
            "medium"  => Ok(MapComplexity::Medium),
            "complex" => Ok(MapComplexity::Complex),
            other => Err(HlError::InvalidConfiguration(format!(
                "unknown map complexity {other:?} (expected simple, medium or complex)"
            ))),
        }
    }
}

// ── MapSettings ───────────────────────────────────────────────────────────────

/// The two knobs a user turns before generating a map.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapSettings {
    pub complexity:     MapComplexity,
    pub hospital_count: usize,
}

impl MapSettings {
    pub fn new(complexity: MapComplexity, hospital_count: usize) -> Self {
        Self { complexity, hospital_count }
    }

    /// Expand into a full generator configuration with default road ranges.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(
            self.complexity.node_count(),
            self.complexity.road_count(),
            self.hospital_count,
        )
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self::new(MapComplexity::default(), DEFAULT_HOSPITAL_COUNT)
    }
}

// ── WeightRange ───────────────────────────────────────────────────────────────

/// Closed range of road lengths in kilometres.
///
/// Samples are rounded to one decimal and returned as whole metres, so every
/// sampled length is a positive multiple of 100 m.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightRange {
    pub min_km: f64,
    pub max_km: f64,
}

impl WeightRange {
    /// Lengths of randomly placed roads.
    pub const ROADS: WeightRange = WeightRange { min_km: 1.0, max_km: 15.0 };
    /// Lengths of bridges added to join disconnected components.
    pub const BRIDGES: WeightRange = WeightRange { min_km: 2.0, max_km: 8.0 };

    pub fn new(min_km: f64, max_km: f64) -> Self {
        Self { min_km, max_km }
    }

    pub fn validate(&self, what: &str) -> HlResult<()> {
        let ok = self.min_km.is_finite()
            && self.max_km.is_finite()
            && self.min_km > 0.0
            && self.min_km <= self.max_km
            && self.max_km <= MAX_ROAD_KM;
        if ok {
            Ok(())
        } else {
            Err(HlError::InvalidConfiguration(format!(
                "{what} range [{}, {}] km must satisfy 0 < min <= max <= {MAX_ROAD_KM}",
                self.min_km, self.max_km
            )))
        }
    }

    /// Draw a length in metres, rounded to the nearest 100 m (never 0).
    pub fn sample_m(&self, rng: &mut MapRng) -> u32 {
        let km: f64 = rng.gen_range(self.min_km..=self.max_km);
        let tenths = (km * 10.0).round().max(1.0) as u32;
        tenths * 100
    }
}

// ── GeneratorConfig ───────────────────────────────────────────────────────────

/// Everything the map generator needs.
///
/// Usually built from [`MapSettings`]; construct directly for custom sizes.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Total nodes including the person.  Must be at least 2.
    pub node_count: usize,

    /// Random roads requested.  `node_count - 1` or more is recommended but
    /// not required; the connectivity pass adds bridges as needed.
    pub road_count: usize,

    /// Hospitals to place.  Must be in `1..node_count`.
    pub hospital_count: usize,

    /// Length range of random roads.
    pub road_km: WeightRange,

    /// Length range of bridges between components.
    pub bridge_km: WeightRange,

    /// Random pair draws allowed per requested road.  Default: 3.
    pub attempt_factor: usize,
}

impl GeneratorConfig {
    pub fn new(node_count: usize, road_count: usize, hospital_count: usize) -> Self {
        Self {
            node_count,
            road_count,
            hospital_count,
            road_km:        WeightRange::ROADS,
            bridge_km:      WeightRange::BRIDGES,
            attempt_factor: 3,
        }
    }

    /// Upper bound on random pair draws during road placement.
    #[inline]
    pub fn max_attempts(&self) -> usize {
        self.road_count.saturating_mul(self.attempt_factor)
    }

    /// Reject configurations the generator cannot honour.
    pub fn validate(&self) -> HlResult<()> {
        if self.node_count < 2 {
            return Err(HlError::InvalidConfiguration(format!(
                "node count {} is below the minimum of 2",
                self.node_count
            )));
        }
        if u32::try_from(self.node_count).is_err() {
            return Err(HlError::InvalidConfiguration(format!(
                "node count {} does not fit a node id",
                self.node_count
            )));
        }
        if self.hospital_count == 0 || self.hospital_count >= self.node_count {
            return Err(HlError::InvalidConfiguration(format!(
                "hospital count {} must be between 1 and {}",
                self.hospital_count,
                self.node_count - 1
            )));
        }
        if self.attempt_factor == 0 {
            return Err(HlError::InvalidConfiguration(
                "attempt factor must be at least 1".into(),
            ));
        }
        self.road_km.validate("road length")?;
        self.bridge_km.validate("bridge length")?;
        Ok(())
    }
}

impl From<MapSettings> for GeneratorConfig {
    fn from(settings: MapSettings) -> Self {
        settings.generator_config()
    }
}

/// Name for a plain node at `index`.
#[inline]
pub fn location_name(index: usize) -> &'static str {
    LOCATION_NAMES[index % LOCATION_NAMES.len()]
}

/// Name for the `ordinal`-th hospital placed on a map.
#[inline]
pub fn hospital_name(ordinal: usize) -> &'static str {
    HOSPITAL_NAMES[ordinal % HOSPITAL_NAMES.len()]
}
