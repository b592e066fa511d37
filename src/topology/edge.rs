//! Edge: directed connection between two nodes carrying a caller payload.
//!
//! An [`Edge`] is an ordered `(head, tail)` pair plus an opaque payload. A graph
//! retains at most one edge per ordered pair; inserting another edge for the
//! same pair overwrites the first regardless of payload. [`WeightedEdge`]
//! pairs an edge with its scalar traversal cost.

use crate::topology::node::NodeId;

/// A directed connection from `head` to `tail` carrying an arbitrary `payload`.
///
/// # Type Parameters
/// - `T`: per-edge payload. Defaults to `()` for payload-free edges.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge<T = ()> {
    /// Node the edge leaves.
    pub head: NodeId,
    /// Node the edge enters.
    pub tail: NodeId,
    /// User-defined payload attached to this edge.
    pub payload: T,
}

impl<T> Edge<T> {
    /// Construct a new `Edge` from `head` → `tail` with given `payload`.
    ///
    /// ```rust
    /// use mutgraph::topology::edge::Edge;
    /// use mutgraph::topology::node::NodeId;
    /// let e = Edge::new(NodeId::new(0), NodeId::new(1), "road");
    /// assert_eq!(e.head.get(), 0);
    /// assert_eq!(e.tail.get(), 1);
    /// assert_eq!(e.payload, "road");
    /// ```
    #[inline]
    pub fn new(head: NodeId, tail: NodeId, payload: T) -> Self {
        Edge {
            head,
            tail,
            payload,
        }
    }

    /// Returns the `(head, tail)` endpoints, dropping the payload.
    #[inline]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.head, self.tail)
    }

    /// Transform the payload `T` to a new type `Q` by applying `f`.
    pub fn map<Q>(self, f: impl FnOnce(T) -> Q) -> Edge<Q> {
        Edge::new(self.head, self.tail, f(self.payload))
    }
}

impl Edge<()> {
    /// Create an edge with no payload, i.e. bare connectivity.
    #[inline]
    pub fn unit(head: NodeId, tail: NodeId) -> Self {
        Edge::new(head, tail, ())
    }
}

/// An [`Edge`] annotated with a scalar traversal cost.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedEdge<T = ()> {
    pub edge: Edge<T>,
    pub cost: f64,
}

impl<T> WeightedEdge<T> {
    #[inline]
    pub fn new(edge: Edge<T>, cost: f64) -> Self {
        WeightedEdge { edge, cost }
    }

    #[inline]
    pub fn head(&self) -> NodeId {
        self.edge.head
    }

    #[inline]
    pub fn tail(&self) -> NodeId {
        self.edge.tail
    }
}
