//! Node and road identifiers.
//!
//! Ids are dense: a map with `n` nodes uses exactly `NodeId(0)..NodeId(n)`,
//! and roads are numbered the same way in insertion order.  Per-node and
//! per-road data therefore live in plain `Vec`s indexed by `id.index()`.
//! `u32::MAX` is never a real id; it marks "no node" in predecessor tables.

use std::fmt;

/// Define a `Copy` newtype id over an unsigned integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Marks a missing id, e.g. the predecessor of a route's source.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Position in the owning map's per-node or per-road vectors.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// `INVALID`, so an id nobody assigned never aliases node 0.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a map node.  Node ids are dense: `0..node_count`.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of an undirected road in insertion order.
    pub struct RoadId(u32);
}

impl NodeId {
    /// The person's location.  Every generated map places it at node 0.
    pub const PERSON: NodeId = NodeId(0);

    /// Every id of a map with `count` nodes, in order.
    pub fn dense(count: usize) -> impl Iterator<Item = NodeId> {
        (0..count).map_while(|i| u32::try_from(i).ok().map(NodeId))
    }
}
