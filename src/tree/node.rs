//! Defines the inner representation
//! of the C4.5 tree.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Attribute, Instance};
use crate::criterion::{Splitter, LR};
use crate::error::Result;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that has two children.
    Branch(BranchNode),


    /// A node that has no children.
    Leaf(LeafNode),
}


/// Represents the branch nodes of the tree.
/// Instances with `attribute <= threshold` go to `left`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) attribute: Attribute,
    pub(super) threshold: f64,
    pub(super) score: f64,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


/// Represents the leaf nodes of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) label: String,
    pub(super) n_instance: usize,
}


impl Node {
    /// Construct a leaf node.
    #[inline]
    pub(super) fn leaf<T: ToString>(label: T, n_instance: usize) -> Self {
        let label = label.to_string();
        Self::Leaf(LeafNode { label, n_instance })
    }


    /// Construct a branch node.
    #[inline]
    pub(super) fn branch(
        attribute: Attribute,
        threshold: f64,
        score: f64,
        left: Node,
        right: Node,
    ) -> Self
    {
        let left = Box::new(left);
        let right = Box::new(right);
        Self::Branch(BranchNode { attribute, threshold, score, left, right })
    }


    /// Walk down to the leaf for `instance` and return its label.
    pub(super) fn predict(&self, instance: &Instance) -> Result<&str> {
        match self {
            Node::Leaf(leaf) => Ok(&leaf.label),
            Node::Branch(branch) => {
                let rule = Splitter::new(&branch.attribute, branch.threshold);
                match rule.split(instance)? {
                    LR::Left => branch.left.predict(instance),
                    LR::Right => branch.right.predict(instance),
                }
            },
        }
    }


    /// Returns the length of the longest root-to-leaf path.
    pub(super) fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch(branch) => {
                1 + branch.left.depth().max(branch.right.depth())
            },
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub(super) fn leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(branch) => {
                branch.left.leaves() + branch.right.leaves()
            },
        }
    }


    pub(super) fn write_indented(
        &self,
        f: &mut fmt::Formatter<'_>,
        level: usize,
    ) -> fmt::Result
    {
        let indent = "|   ".repeat(level);
        match self {
            Node::Leaf(leaf) => {
                writeln!(f, "{indent}{} ({})", leaf.label, leaf.n_instance)
            },
            Node::Branch(branch) => {
                let name = branch.attribute.name();
                let threshold = branch.threshold;
                writeln!(f, "{indent}{name} <= {threshold}")?;
                branch.left.write_indented(f, level + 1)?;
                writeln!(f, "{indent}{name} > {threshold}")?;
                branch.right.write_indented(f, level + 1)
            },
        }
    }
}
