//! Dual adjacency index: forward (head → tail) and reverse (tail → head)
//! maps kept as mirrors of each other.
//!
//! Edges are values looked up by id pairs; no node holds a reference to
//! another, so removing a node can never leave a dangling pointer.
//!
//! Invariant: `forward[h][t] == w` iff `reverse[t][h] == w`.

use crate::graph_error::GraphError;
use crate::topology::edge::{Edge, WeightedEdge};
use crate::topology::node::NodeId;
use hashbrown::HashMap;

/// Edges incident to one node, keyed by the node at the far end.
pub type EdgeMap<T> = HashMap<NodeId, WeightedEdge<T>>;

#[derive(Clone, Debug)]
pub struct AdjacencyIndex<T = ()> {
    /// Successor edges: `forward[head][tail]`.
    pub forward: HashMap<NodeId, EdgeMap<T>>,
    /// Predecessor edges: `reverse[tail][head]`.
    pub reverse: HashMap<NodeId, EdgeMap<T>>,
}

impl<T> Default for AdjacencyIndex<T> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }
}

impl<T: Clone> AdjacencyIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: HashMap::with_capacity(capacity),
            reverse: HashMap::with_capacity(capacity),
        }
    }

    /// Create empty forward/reverse entries for `n` if missing.
    #[inline]
    pub fn ensure(&mut self, n: NodeId) {
        self.forward.entry(n).or_default();
        self.reverse.entry(n).or_default();
    }

    #[inline]
    pub fn contains(&self, n: NodeId) -> bool {
        self.forward.contains_key(&n)
    }

    /// Write `edge` into both mirrors, replacing any edge for the same ordered pair.
    /// Returns the replaced entry, if any.
    pub fn upsert(&mut self, edge: Edge<T>, cost: f64) -> Option<WeightedEdge<T>> {
        let (head, tail) = edge.endpoints();
        let weighted = WeightedEdge::new(edge, cost);
        self.reverse
            .entry(tail)
            .or_default()
            .insert(head, weighted.clone());
        self.forward.entry(head).or_default().insert(tail, weighted)
    }

    /// Remove the `head → tail` entry from both mirrors.
    pub fn remove(&mut self, head: NodeId, tail: NodeId) -> Option<WeightedEdge<T>> {
        if let Some(ins) = self.reverse.get_mut(&tail) {
            ins.remove(&head);
        }
        self.forward.get_mut(&head).and_then(|outs| outs.remove(&tail))
    }

    /// Drop every edge incident to `n` in both directions, then `n`'s own entries.
    /// Returns the number of directed edges removed.
    pub fn scrub(&mut self, n: NodeId) -> usize {
        let mut removed = 0;
        if let Some(outs) = self.forward.remove(&n) {
            for succ in outs.keys() {
                if let Some(ins) = self.reverse.get_mut(succ) {
                    ins.remove(&n);
                }
            }
            removed += outs.len();
        }
        if let Some(ins) = self.reverse.remove(&n) {
            // a self-loop already left reverse[n] in the loop above
            for pred in ins.keys() {
                if let Some(outs) = self.forward.get_mut(pred) {
                    outs.remove(&n);
                }
                removed += 1;
            }
        }
        removed
    }

    #[inline]
    pub fn get(&self, head: NodeId, tail: NodeId) -> Option<&WeightedEdge<T>> {
        self.forward.get(&head).and_then(|outs| outs.get(&tail))
    }

    #[inline]
    pub fn successors_of(&self, n: NodeId) -> Option<&EdgeMap<T>> {
        self.forward.get(&n)
    }

    #[inline]
    pub fn predecessors_of(&self, n: NodeId) -> Option<&EdgeMap<T>> {
        self.reverse.get(&n)
    }

    /// Number of stored directed edges.
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(HashMap::len).sum()
    }

    pub fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
    }

    /// Check the mirror invariant over both directions.
    ///
    /// Mirrors must agree on endpoints and on the cost bit pattern. Payloads
    /// are opaque and never compared.
    pub fn validate_mirrors(&self) -> Result<(), GraphError> {
        for (&head, outs) in &self.forward {
            for (&tail, w) in outs {
                let mirror = self
                    .reverse
                    .get(&tail)
                    .and_then(|ins| ins.get(&head))
                    .ok_or(GraphError::MissingMirror { head, tail })?;
                let endpoints_ok = (w.head(), w.tail()) == (head, tail)
                    && (mirror.head(), mirror.tail()) == (head, tail);
                if !endpoints_ok || mirror.cost.to_bits() != w.cost.to_bits() {
                    return Err(GraphError::MirrorMismatch { head, tail });
                }
            }
        }
        for (&tail, ins) in &self.reverse {
            for &head in ins.keys() {
                if self.get(head, tail).is_none() {
                    return Err(GraphError::MissingMirror { head, tail });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    fn index(edges: &[(u64, u64, f64)]) -> AdjacencyIndex<()> {
        let mut idx = AdjacencyIndex::new();
        for &(h, t, c) in edges {
            idx.ensure(n(h));
            idx.ensure(n(t));
            idx.upsert(Edge::unit(n(h), n(t)), c);
        }
        idx
    }

    #[test]
    fn upsert_writes_both_mirrors_and_overwrites() {
        let mut idx = index(&[(0, 1, 1.0)]);
        assert_eq!(idx.get(n(0), n(1)).map(|w| w.cost), Some(1.0));
        assert_eq!(idx.reverse[&n(1)][&n(0)].cost, 1.0);

        let prev = idx.upsert(Edge::unit(n(0), n(1)), 4.0);
        assert_eq!(prev.map(|w| w.cost), Some(1.0));
        assert_eq!(idx.reverse[&n(1)][&n(0)].cost, 4.0);
        assert_eq!(idx.edge_count(), 1);
        assert!(idx.validate_mirrors().is_ok());
    }

    #[test]
    fn remove_clears_both_mirrors() {
        let mut idx = index(&[(0, 1, 1.0), (1, 0, 2.0)]);
        assert!(idx.remove(n(0), n(1)).is_some());
        assert!(idx.get(n(0), n(1)).is_none());
        assert!(!idx.reverse[&n(1)].contains_key(&n(0)));
        assert!(idx.get(n(1), n(0)).is_some());
        assert!(idx.remove(n(0), n(1)).is_none());
        assert!(idx.validate_mirrors().is_ok());
    }

    #[test]
    fn scrub_counts_self_loop_once() {
        let mut idx = index(&[(0, 0, 1.0), (0, 1, 1.0), (2, 0, 1.0)]);
        assert_eq!(idx.scrub(n(0)), 3);
        assert!(!idx.contains(n(0)));
        assert!(idx.forward[&n(1)].is_empty() && idx.reverse[&n(1)].is_empty());
        assert!(idx.forward[&n(2)].is_empty());
        assert_eq!(idx.edge_count(), 0);
        assert!(idx.validate_mirrors().is_ok());
    }

    #[test]
    fn validate_accepts_nan_cost_and_nan_payload() {
        let mut idx = AdjacencyIndex::<f64>::new();
        idx.ensure(n(0));
        idx.ensure(n(1));
        idx.upsert(Edge::new(n(0), n(1), f64::NAN), f64::NAN);
        idx.upsert(Edge::new(n(1), n(0), f64::NAN), 1.0);
        assert!(idx.validate_mirrors().is_ok());
    }

    #[test]
    fn validate_detects_broken_mirror() {
        let mut idx = index(&[(0, 1, 1.0)]);
        if let Some(ins) = idx.reverse.get_mut(&n(1)) {
            ins.remove(&n(0));
        }
        assert_eq!(
            idx.validate_mirrors(),
            Err(GraphError::MissingMirror {
                head: n(0),
                tail: n(1)
            })
        );

        let mut idx = index(&[(0, 1, 1.0)]);
        if let Some(w) = idx.reverse.get_mut(&n(1)).and_then(|ins| ins.get_mut(&n(0))) {
            w.cost = 9.0;
        }
        assert_eq!(
            idx.validate_mirrors(),
            Err(GraphError::MirrorMismatch {
                head: n(0),
                tail: n(1)
            })
        );
    }
}
