//! Defines the C4.5 tree grown with the gain-ratio criterion.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Instance, Sample};
use crate::criterion::{
    GainRatio,
    partition_by_threshold,
    majority_target,
    unanimous_target,
};
use crate::error::Result;
use super::node::Node;


/// A binary decision tree over continuous attributes.
/// This struct is just a wrapper of `Node`.
///
/// [`C45Tree`] is constructed
/// by [`C45TreeBuilder`](crate::tree::C45TreeBuilder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct C45Tree {
    root: Node,
}


impl From<Node> for C45Tree {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


/// Parameters shared by every recursive call of [`C45Tree::grow`].
struct Grower<'a> {
    sample: &'a Sample,
    criterion: GainRatio<'a>,
    min_split_size: usize,
}


impl<'a> Grower<'a> {
    /// Grow the sub-tree for `instances`.
    /// `fallback` labels the leaf of an empty set.
    fn full_tree(
        &self,
        instances: &[&Instance],
        fallback: &str,
        depth: usize,
    ) -> Result<Node>
    {
        let n_instance = instances.len();
        let label = majority_target(instances).unwrap_or(fallback);

        if n_instance == 0 {
            log::debug!("empty node, predicting parent's majority `{label}`");
            return Ok(Node::leaf(label, 0));
        }

        if unanimous_target(instances)
            || depth == 0
            || n_instance < self.min_split_size
        {
            log::debug!("leaf `{label}` with {n_instance} instances");
            return Ok(Node::leaf(label, n_instance));
        }

        let best = self.criterion.best_attribute(
            instances, self.sample.attributes()
        )?;
        let threshold = match best.threshold() {
            Some(threshold) => threshold,
            None => {
                log::debug!(
                    "no attribute splits {n_instance} instances, leaf `{label}`"
                );
                return Ok(Node::leaf(label, n_instance));
            },
        };
        let attribute = best.attribute();

        let (left, right) = partition_by_threshold(
            instances, attribute, threshold
        )?;

        // A positive gain ratio implies a positive split information.
        debug_assert!(!left.is_empty() && !right.is_empty());

        log::debug!(
            "split {n_instance} instances on `{}` <= {threshold} \
            (gain ratio {:.4}) into {} / {}",
            attribute.name(), best.score(), left.len(), right.len(),
        );

        let depth = depth - 1;
        let ltree = self.full_tree(&left, label, depth)?;
        let rtree = self.full_tree(&right, label, depth)?;

        Ok(Node::branch(
            attribute.clone(), threshold, best.score(), ltree, rtree
        ))
    }
}


impl C45Tree {
    /// Grow a tree on `sample`.
    /// This method is called only via `C45TreeBuilder::build`.
    pub(super) fn grow(
        sample: &Sample,
        max_depth: usize,
        min_split_size: usize,
    ) -> Result<Self>
    {
        let criterion = GainRatio::new(sample.target_values());
        let grower = Grower { sample, criterion, min_split_size };

        let instances = sample.instances().iter().collect::<Vec<_>>();
        let root = grower.full_tree(&instances, "", max_depth)?;

        let tree = Self::from(root);
        log::info!(
            "grew a C4.5 tree of depth {} with {} leaves",
            tree.depth(), tree.leaves(),
        );
        Ok(tree)
    }


    /// Returns the label predicted for `instance`.
    #[inline]
    pub fn predict(&self, instance: &Instance) -> Result<&str> {
        self.root.predict(instance)
    }


    /// Predict the labels of all the instances of `sample`.
    pub fn predict_all(&self, sample: &Sample) -> Result<Vec<String>> {
        sample.instances()
            .iter()
            .map(|x| self.predict(x).map(str::to_string))
            .collect()
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Serialize the tree to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }


    /// Deserialize a tree from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let tree = serde_json::from_str(json)?;
        Ok(tree)
    }
}


impl fmt::Display for C45Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_indented(f, 0)
    }
}
