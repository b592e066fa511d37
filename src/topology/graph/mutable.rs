use super::graph_trait::Graph;
use crate::topology::edge::Edge;
use crate::topology::node::NodeId;

/// Trait for graphs that support topology mutation.
///
/// Mutating an absent node or edge is a silent no-op. Implementations keep
/// their adjacency mirrors consistent after every call returns.
pub trait MutableGraph: Graph {
    /// Register `n` with empty adjacency; no-op if already live.
    fn add_node(&mut self, n: NodeId);

    /// Insert `edge` with `cost`, auto-registering missing endpoints.
    /// Replaces any edge already stored for `(head, tail)`.
    fn add_edge(&mut self, edge: Edge<Self::Payload>, cost: f64);

    /// Remove `n` and **all** incident edges (both directions).
    fn remove_node(&mut self, n: NodeId);

    /// Remove the edge stored for `(edge.head, edge.tail)`; the payload is not compared.
    fn remove_edge(&mut self, edge: &Edge<Self::Payload>);

    /// Discard all nodes and edges.
    fn reset(&mut self);

    /// Smallest identifier not currently live. Does not insert it.
    fn allocate_node_id(&self) -> NodeId;

    // ---------- Generic convenience mutators ----------

    /// Allocate an identifier and register it.
    fn new_node(&mut self) -> NodeId {
        let n = self.allocate_node_id();
        self.add_node(n);
        n
    }

    /// Insert each `(edge, cost)` in order ("last wins" per ordered pair).
    fn add_edges_from(&mut self, edges: impl IntoIterator<Item = (Edge<Self::Payload>, f64)>) {
        for (edge, cost) in edges {
            self.add_edge(edge, cost);
        }
    }
}
