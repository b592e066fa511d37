//! # mutgraph
//!
//! mutgraph is a general-purpose mutable directed graph container intended as
//! a foundation for graph algorithms (shortest path, traversal, flow) built
//! elsewhere. It keeps two adjacency indices, forward and reverse, so both
//! successor and predecessor queries are a single map lookup.
//!
//! ## Contract
//! - Mutating an absent node or edge is a no-op; querying one yields an empty
//!   or absent result. Nothing in the public protocol returns an error.
//! - [`Graph::cost`](topology::Graph::cost) returns `f64::INFINITY` for a
//!   missing edge, so relaxation loops need no special case.
//! - At most one edge is kept per ordered `(head, tail)` pair; a second insert
//!   overwrites the first.
//! - [`Graph::edge_list`](topology::Graph::edge_list) collapses a reciprocal
//!   pair `(a, b)` / `(b, a)` into one emitted edge.
//!
//! ## Invariant checking
//! Debug builds validate the adjacency mirrors after every mutation. Enable the
//! `strict-invariants` or `check-invariants` feature to keep those checks in
//! release builds.
//!
//! ## Logging
//! Mutations emit `trace`-level records and resets `debug`-level records
//! through the [`log`] facade. No logger is installed by the library.

pub mod debug_invariants;
pub mod graph_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use graph_error::GraphError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::topology::edge::{Edge, WeightedEdge};
    pub use crate::topology::graph::{Graph, MutableDirectedGraph, MutableGraph};
    pub use crate::topology::node::NodeId;
}
