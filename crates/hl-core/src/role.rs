//! Node role tag shared by the generator, router, and presentation layers.

/// What a map node represents.  Fixed when the map is generated.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeRole {
    /// The person looking for a hospital.  Exactly one per map.
    Person,
    /// A candidate destination.
    Hospital,
    /// Any other waypoint.
    #[default]
    Plain,
}

impl NodeRole {
    /// `true` for nodes considered by nearest-hospital selection.
    #[inline]
    pub fn is_target(self) -> bool {
        matches!(self, NodeRole::Hospital)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeRole::Person   => "person",
            NodeRole::Hospital => "hospital",
            NodeRole::Plain    => "plain",
        }
    }
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
