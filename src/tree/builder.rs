use crate::Sample;
use crate::error::{C45Error, Result};
use super::c45_tree::C45Tree;


/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 8;
/// The minimal number of instances a node needs to be split.
pub const DEFAULT_MIN_SPLIT_SIZE: usize = 2;


/// A struct that builds [`C45Tree`].
/// `C45TreeBuilder` keeps parameters for constructing the tree.
///
/// # Example
///
/// ```no_run
/// use c45split::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = C45TreeBuilder::new(&sample)
///     .max_depth(3)
///     .build()
///     .unwrap();
/// println!("{tree}");
/// ```
#[derive(Clone)]
pub struct C45TreeBuilder<'a> {
    sample: &'a Sample,
    max_depth: usize,
    min_split_size: usize,
}


impl<'a> C45TreeBuilder<'a> {
    /// Construct a new instance of [`C45TreeBuilder`].
    /// By default, [`C45TreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: DEFAULT_MAX_DEPTH == 8,
    /// min_split_size: DEFAULT_MIN_SPLIT_SIZE == 2,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            max_depth: DEFAULT_MAX_DEPTH,
            min_split_size: DEFAULT_MIN_SPLIT_SIZE,
        }
    }


    /// Specify the maximal depth of the tree.
    /// A tree of depth `0` is a single leaf.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Nodes with fewer instances than `size` become leaves.
    /// Values below `2` are treated as `2`.
    pub fn min_split_size(mut self, size: usize) -> Self {
        self.min_split_size = size.max(2);
        self
    }


    /// Build a [`C45Tree`].
    /// This method consumes `self`.
    pub fn build(self) -> Result<C45Tree> {
        if self.sample.instances().is_empty() {
            return Err(C45Error::EmptySample);
        }
        C45Tree::grow(self.sample, self.max_depth, self.min_split_size)
    }
}
