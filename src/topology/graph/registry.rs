//! Node identity registry: the authoritative set of live node ids.
//!
//! Identifier space is owned per graph instance, so independent graphs never
//! share or leak ids.

use crate::topology::node::NodeId;
use hashbrown::HashSet;
use itertools::Itertools;

/// Set of live node identifiers plus the smallest-free-id allocator.
#[derive(Clone, Debug, Default)]
pub struct NodeRegistry {
    nodes: HashSet<NodeId>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashSet::with_capacity(capacity),
        }
    }

    /// Register `n`; returns `false` if it was already live.
    #[inline]
    pub fn insert(&mut self, n: NodeId) -> bool {
        self.nodes.insert(n)
    }

    /// Unregister `n`; returns `false` if it was not live.
    #[inline]
    pub fn remove(&mut self, n: NodeId) -> bool {
        self.nodes.remove(&n)
    }

    #[inline]
    pub fn contains(&self, n: NodeId) -> bool {
        self.nodes.contains(&n)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Smallest non-negative identifier that is not live.
    ///
    /// Scans the live ids in ascending order; the first position `i` holding
    /// an id other than `i` is a gap and yields `i`. Without a gap the next id
    /// is the live count. Only computes the id: callers must still insert it.
    ///
    /// ```rust
    /// use mutgraph::topology::graph::registry::NodeRegistry;
    /// use mutgraph::topology::node::NodeId;
    /// let mut reg = NodeRegistry::new();
    /// assert_eq!(reg.allocate(), NodeId::new(0));
    /// for raw in [0, 1, 2] {
    ///     reg.insert(NodeId::new(raw));
    /// }
    /// reg.remove(NodeId::new(1));
    /// assert_eq!(reg.allocate(), NodeId::new(1));
    /// ```
    pub fn allocate(&self) -> NodeId {
        let gap = self
            .nodes
            .iter()
            .map(|n| n.get())
            .sorted_unstable()
            .enumerate()
            .find(|&(i, id)| i as u64 != id)
            .map(|(i, _)| i as u64);
        NodeId::new(gap.unwrap_or(self.nodes.len() as u64))
    }
}
