//! Top-level module for graph topology.
//!
//! This module provides the node and edge types and the directed graph
//! container built on them:
//! - [`node::NodeId`] identifiers and [`edge::Edge`] / [`edge::WeightedEdge`] values
//! - The [`Graph`] query trait and [`MutableGraph`] mutation trait
//! - [`MutableDirectedGraph`], the dual-adjacency implementation
//!
//! Most users will interact with the traits and `MutableDirectedGraph`.

pub mod edge;
pub mod graph;
pub mod node;

pub use edge::{Edge, WeightedEdge};
pub use graph::*;
pub use node::NodeId;
