//! Read-only query protocol for directed graphs.
//!
//! [`Graph`] is the contract consumed by path-search and traversal code built
//! on top of this crate. Queries never fail: an unregistered node yields an
//! empty or absent result, and the cost of a missing edge is `f64::INFINITY`.

use crate::topology::edge::Edge;
use crate::topology::node::NodeId;
use hashbrown::HashSet;

/// Directed graph with bidirectional adjacency queries.
///
/// Collections returned by this trait are snapshots, not live views, and
/// carry no ordering guarantee.
pub trait Graph {
    /// Opaque per-edge payload; cloned into snapshots, never compared.
    type Payload: Clone;

    /// Whether `n` is a live node.
    fn node_exists(&self, n: NodeId) -> bool;

    /// Nodes one forward hop from `n`.
    fn successors(&self, n: NodeId) -> Vec<NodeId>;
    /// Nodes one reverse hop from `n`.
    fn predecessors(&self, n: NodeId) -> Vec<NodeId>;

    /// Every distinct node adjacent to `n` in either direction, listed once.
    ///
    /// The default builds on `successors`/`predecessors` for implementors
    /// without direct map access; `MutableDirectedGraph` overrides it.
    fn neighbors(&self, n: NodeId) -> Vec<NodeId> {
        let mut out = self.successors(n);
        let seen: HashSet<NodeId> = out.iter().copied().collect();
        out.extend(
            self.predecessors(n)
                .into_iter()
                .filter(|p| !seen.contains(p)),
        );
        out
    }

    /// The directed edge `n → m`, if both nodes are live and it exists.
    fn edge_to(&self, n: NodeId, m: NodeId) -> Option<&Edge<Self::Payload>>;

    /// `n → m` if present, otherwise `m → n`.
    fn edge_between(&self, n: NodeId, m: NodeId) -> Option<&Edge<Self::Payload>> {
        self.edge_to(n, m).or_else(|| self.edge_to(m, n))
    }

    /// Forward plus reverse adjacency size; 0 for an absent node.
    fn degree(&self, n: NodeId) -> usize;

    /// Cost of the stored `head → tail` edge, or `f64::INFINITY` if there is none.
    fn cost_between(&self, head: NodeId, tail: NodeId) -> f64;

    /// Cost of the stored edge with `edge`'s endpoints; the payload is not compared.
    fn cost(&self, edge: &Edge<Self::Payload>) -> f64 {
        self.cost_between(edge.head, edge.tail)
    }

    /// All live nodes.
    fn node_list(&self) -> Vec<NodeId>;

    /// Every stored edge once, with a reciprocal pair collapsed to one edge.
    fn edge_list(&self) -> Vec<Edge<Self::Payload>>;

    /// Number of live nodes.
    fn node_count(&self) -> usize {
        self.node_list().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::graph::{MutableDirectedGraph, MutableGraph};

    /// Implements only the required methods so provided defaults are exercised.
    struct Minimal(MutableDirectedGraph<()>);

    impl Graph for Minimal {
        type Payload = ();

        fn node_exists(&self, n: NodeId) -> bool {
            self.0.node_exists(n)
        }
        fn successors(&self, n: NodeId) -> Vec<NodeId> {
            self.0.successors(n)
        }
        fn predecessors(&self, n: NodeId) -> Vec<NodeId> {
            self.0.predecessors(n)
        }
        fn edge_to(&self, n: NodeId, m: NodeId) -> Option<&Edge<()>> {
            self.0.edge_to(n, m)
        }
        fn degree(&self, n: NodeId) -> usize {
            self.0.degree(n)
        }
        fn cost_between(&self, head: NodeId, tail: NodeId) -> f64 {
            self.0.cost_between(head, tail)
        }
        fn node_list(&self) -> Vec<NodeId> {
            self.0.node_list()
        }
        fn edge_list(&self) -> Vec<Edge<()>> {
            self.0.edge_list()
        }
    }

    fn n(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn default_neighbors_lists_each_node_once() {
        let mut g = MutableDirectedGraph::new();
        g.add_edge(Edge::unit(n(0), n(1)), 1.0);
        g.add_edge(Edge::unit(n(1), n(0)), 1.0);
        g.add_edge(Edge::unit(n(2), n(0)), 1.0);
        let g = Minimal(g);

        let mut nbrs = g.neighbors(n(0));
        nbrs.sort_unstable();
        assert_eq!(nbrs, vec![n(1), n(2)]);
        assert!(g.neighbors(n(9)).is_empty());
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn default_edge_between_and_cost() {
        let mut g = MutableDirectedGraph::new();
        g.add_edge(Edge::unit(n(0), n(1)), 4.0);
        let g = Minimal(g);

        assert!(g.edge_between(n(1), n(0)).is_some());
        assert_eq!(g.cost(&Edge::unit(n(0), n(1))), 4.0);
        assert_eq!(g.cost(&Edge::unit(n(1), n(0))), f64::INFINITY);
    }
}
