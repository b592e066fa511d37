pub mod adjacency;
pub mod graph_trait;
pub mod mutable;
pub mod mutable_dir;
pub mod registry;

// Re-export the core traits and in-memory impl at top level
pub use graph_trait::Graph;
pub use mutable::MutableGraph;
pub use mutable_dir::MutableDirectedGraph;
