//! A reference C4.5 tree grown with the gain-ratio criterion.

/// Defines the builder of `C45Tree`.
pub mod builder;
/// Defines the tree produced by `C45TreeBuilder`.
pub mod c45_tree;

/// Defines the inner representations of `C45Tree`.
mod node;


pub use builder::{C45TreeBuilder, DEFAULT_MAX_DEPTH, DEFAULT_MIN_SPLIT_SIZE};
pub use c45_tree::C45Tree;
