//! In-memory mutable directed graph with forward and reverse adjacency.
//!
//! [`MutableDirectedGraph`] trades memory for fast bidirectional queries: every
//! edge is stored twice, once keyed by head and once keyed by tail. All
//! mutation goes through this type, which updates the node registry and both
//! adjacency mirrors before returning.
//!
//! Not safe for concurrent mutation; callers sharing a graph across threads
//! must serialize mutating calls externally.

use super::adjacency::{AdjacencyIndex, EdgeMap};
use super::graph_trait::Graph;
use super::mutable::MutableGraph;
use super::registry::NodeRegistry;
use crate::debug_invariants;
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use crate::topology::edge::Edge;
use crate::topology::node::NodeId;
use hashbrown::{HashMap, HashSet};

/// A general-purpose mutable directed graph.
///
/// # Type Parameters
/// - `T`: per-edge payload. Defaults to `()`.
///
/// ```rust
/// use mutgraph::prelude::*;
/// let mut g = MutableDirectedGraph::<()>::new();
/// g.add_edge(Edge::unit(NodeId::new(0), NodeId::new(1)), 5.0);
/// assert_eq!(g.successors(NodeId::new(0)), vec![NodeId::new(1)]);
/// assert!(g.edge_to(NodeId::new(1), NodeId::new(0)).is_none());
/// assert!(g.edge_between(NodeId::new(1), NodeId::new(0)).is_some());
/// ```
#[derive(Clone, Debug)]
pub struct MutableDirectedGraph<T = ()> {
    registry: NodeRegistry,
    index: AdjacencyIndex<T>,
}

impl<T> Default for MutableDirectedGraph<T> {
    fn default() -> Self {
        Self {
            registry: NodeRegistry::default(),
            index: AdjacencyIndex::default(),
        }
    }
}

impl<T: Clone> MutableDirectedGraph<T> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `nodes` nodes before rehashing.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            registry: NodeRegistry::with_capacity(nodes),
            index: AdjacencyIndex::with_capacity(nodes),
        }
    }

    /// Constructs a graph from `(edge, cost)` pairs, last write winning per ordered pair.
    ///
    /// ```rust
    /// use mutgraph::prelude::*;
    /// let n = NodeId::new;
    /// let g = MutableDirectedGraph::from_edges([
    ///     (Edge::new(n(0), n(1), 'a'), 1.0),
    ///     (Edge::new(n(0), n(1), 'b'), 2.0),
    /// ]);
    /// assert_eq!(g.edge_count(), 1);
    /// assert_eq!(g.cost_between(n(0), n(1)), 2.0);
    /// ```
    pub fn from_edges<I: IntoIterator<Item = (Edge<T>, f64)>>(edges: I) -> Self {
        let mut g = Self::default();
        g.add_edges_from(edges);
        log::debug!(
            "built graph from edges: {} nodes, {} edges",
            g.registry.len(),
            g.index.edge_count()
        );
        g
    }

    /// Number of stored directed edges (a reciprocal pair counts twice).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.index.edge_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Read access to the forward/reverse mirrors.
    #[inline]
    pub fn index(&self) -> &AdjacencyIndex<T> {
        &self.index
    }

    /// Outgoing edges of `n` keyed by tail.
    #[inline]
    pub fn out_edges(&self, n: NodeId) -> Option<&EdgeMap<T>> {
        self.index.successors_of(n)
    }

    /// Incoming edges of `n` keyed by head.
    #[inline]
    pub fn in_edges(&self, n: NodeId) -> Option<&EdgeMap<T>> {
        self.index.predecessors_of(n)
    }
}

impl<T: Clone> Graph for MutableDirectedGraph<T> {
    type Payload = T;

    #[inline]
    fn node_exists(&self, n: NodeId) -> bool {
        self.registry.contains(n)
    }

    fn successors(&self, n: NodeId) -> Vec<NodeId> {
        self.out_edges(n)
            .map(|outs| outs.keys().copied().collect())
            .unwrap_or_default()
    }

    fn predecessors(&self, n: NodeId) -> Vec<NodeId> {
        self.in_edges(n)
            .map(|ins| ins.keys().copied().collect())
            .unwrap_or_default()
    }

    fn neighbors(&self, n: NodeId) -> Vec<NodeId> {
        let (Some(outs), Some(ins)) = (self.out_edges(n), self.in_edges(n)) else {
            return Vec::new();
        };
        let mut out: Vec<NodeId> = outs.keys().copied().collect();
        out.extend(ins.keys().copied().filter(|p| !outs.contains_key(p)));
        out
    }

    fn edge_to(&self, n: NodeId, m: NodeId) -> Option<&Edge<T>> {
        if !self.registry.contains(n) || !self.registry.contains(m) {
            return None;
        }
        self.index.get(n, m).map(|w| &w.edge)
    }

    fn degree(&self, n: NodeId) -> usize {
        if !self.registry.contains(n) {
            return 0;
        }
        self.out_edges(n).map_or(0, HashMap::len) + self.in_edges(n).map_or(0, HashMap::len)
    }

    fn cost_between(&self, head: NodeId, tail: NodeId) -> f64 {
        self.index
            .get(head, tail)
            .map_or(f64::INFINITY, |w| w.cost)
    }

    fn node_list(&self) -> Vec<NodeId> {
        self.registry.iter().collect()
    }

    /// Every stored edge once; of a reciprocal pair only the side scanned first
    /// is emitted.
    ///
    /// Each node gets a "done" set recording the tails it has emitted. All
    /// done sets are created before any adjacency is scanned, so the
    /// reciprocal check does not depend on scan order.
    fn edge_list(&self) -> Vec<Edge<T>> {
        let mut done: HashMap<NodeId, HashSet<NodeId>> = self
            .index
            .forward
            .iter()
            .map(|(&n, outs)| (n, HashSet::with_capacity(outs.len())))
            .collect();
        let mut edges = Vec::with_capacity(self.index.edge_count());

        for (&n, outs) in &self.index.forward {
            for (&succ, w) in outs {
                if done.get(&succ).is_some_and(|seen| seen.contains(&n)) {
                    continue;
                }
                edges.push(w.edge.clone());
                done.entry(n).or_default().insert(succ);
            }
        }
        edges
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.registry.len()
    }
}

impl<T: Clone> MutableGraph for MutableDirectedGraph<T> {
    fn add_node(&mut self, n: NodeId) {
        if !self.registry.insert(n) {
            return;
        }
        self.index.ensure(n);
        log::trace!("added node {n}");
    }

    fn add_edge(&mut self, edge: Edge<T>, cost: f64) {
        let (head, tail) = edge.endpoints();
        self.add_node(head);
        self.add_node(tail);
        let replaced = self.index.upsert(edge, cost);
        log::trace!(
            "{} edge {head} -> {tail} (cost {cost})",
            if replaced.is_some() { "replaced" } else { "added" }
        );
        debug_invariants!(self);
    }

    fn remove_node(&mut self, n: NodeId) {
        if !self.registry.remove(n) {
            return;
        }
        let dropped = self.index.scrub(n);
        log::trace!("removed node {n} with {dropped} incident edges");
        debug_invariants!(self);
    }

    fn remove_edge(&mut self, edge: &Edge<T>) {
        let (head, tail) = edge.endpoints();
        if !self.registry.contains(head) || !self.registry.contains(tail) {
            return;
        }
        if self.index.remove(head, tail).is_some() {
            log::trace!("removed edge {head} -> {tail}");
            debug_invariants!(self);
        }
    }

    fn reset(&mut self) {
        log::debug!(
            "resetting graph: dropping {} nodes, {} edges",
            self.registry.len(),
            self.index.edge_count()
        );
        self.registry.clear();
        self.index.clear();
    }

    #[inline]
    fn allocate_node_id(&self) -> NodeId {
        self.registry.allocate()
    }
}

impl<T: Clone> DebugInvariants for MutableDirectedGraph<T> {
    fn debug_assert_invariants(&self) {
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] MutableDirectedGraph invalid: {e}");
        }
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        let check = || -> Result<(), GraphError> {
            // 1) registry, forward and reverse share one key set
            for n in self.registry.iter() {
                if !self.index.forward.contains_key(&n) || !self.index.reverse.contains_key(&n) {
                    return Err(GraphError::KeySetMismatch(n));
                }
            }
            let stray = self
                .index
                .forward
                .keys()
                .chain(self.index.reverse.keys())
                .find(|n| !self.registry.contains(**n));
            if let Some(&n) = stray {
                return Err(GraphError::KeySetMismatch(n));
            }

            // 2) no edge leaves the registry
            for (&head, outs) in &self.index.forward {
                if let Some(&tail) = outs.keys().find(|t| !self.registry.contains(**t)) {
                    return Err(GraphError::DanglingEdge { head, tail });
                }
            }

            // 3) mirrors agree
            self.index.validate_mirrors()
        };
        check().inspect_err(|e| log::warn!("graph invariant violated: {e}"))
    }
}
