//! `NodeId`: a strong, zero-cost handle for graph nodes
//!
//! Every node in a [`MutableDirectedGraph`](crate::topology::graph::MutableDirectedGraph)
//! is identified solely by a non-negative integer, unique within one graph
//! instance. `NodeId` wraps a `u64` so identifiers cannot be confused with
//! counts or offsets, while staying usable as a map key.
//!
//! `0` is a valid identifier: the allocator hands out `0` first on an empty graph.

use std::fmt;

/// Identifier of a node within a single graph.
///
/// # Memory layout
/// This type is `repr(transparent)` over `u64`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new `NodeId` from a raw `u64` value.
    ///
    /// ```rust
    /// use mutgraph::topology::node::NodeId;
    /// let n = NodeId::new(3);
    /// assert_eq!(n.get(), 3);
    /// ```
    #[inline]
    pub const fn new(raw: u64) -> Self {
        NodeId(raw)
    }

    /// Returns the inner `u64` value of this `NodeId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    #[inline]
    fn from(raw: u64) -> Self {
        NodeId(raw)
    }
}

impl From<NodeId> for u64 {
    #[inline]
    fn from(n: NodeId) -> Self {
        n.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

/// Prints only the raw integer.
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(NodeId, u64);
}
