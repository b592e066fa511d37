//! GraphError: invariant-violation reports for mutgraph.
//!
//! Mutators and queries on a graph never fail; absence is a no-op or an
//! empty result. This type only surfaces from
//! [`DebugInvariants::validate_invariants`](crate::DebugInvariants::validate_invariants).

use crate::topology::node::NodeId;
use thiserror::Error;

/// Unified error type for graph invariant checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node is registered but lacks an adjacency entry, or vice versa.
    #[error("Invariant error: node `{0}` is not present in all of registry/forward/reverse")]
    KeySetMismatch(NodeId),
    /// `forward[head][tail]` exists without `reverse[tail][head]` (or the reverse).
    #[error("Invariant error: edge ({head} -> {tail}) has no mirror entry")]
    MissingMirror { head: NodeId, tail: NodeId },
    /// Both mirror entries exist but disagree on endpoints or cost.
    #[error("Invariant error: mirror entries for ({head} -> {tail}) disagree")]
    MirrorMismatch { head: NodeId, tail: NodeId },
    /// An edge refers to a node that is not registered.
    #[error("Invariant error: edge ({head} -> {tail}) references an unregistered node")]
    DanglingEdge { head: NodeId, tail: NodeId },
}
