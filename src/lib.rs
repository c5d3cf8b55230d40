#![warn(missing_docs)]

//!
//! A crate that provides the split criterion of C4.5 decision trees.
//!
//! Given labeled training instances and a continuous attribute,
//! the criterion finds the threshold that maximizes the **gain ratio**,
//! i.e., the information gain of the binary split `value <= threshold`
//! normalized by the entropy of the split itself.
//!
//! - [`GainRatio`] evaluates entropy, conditional entropy,
//!     split information, gain, and gain ratio,
//!     searches the best threshold of an attribute,
//!     and selects the best attribute among candidates.
//! - [`partition_by_threshold`], [`majority_target`], and
//!     [`unanimous_target`] are what a tree builder needs
//!     to split a node and to decide when to stop.
//! - [`C45TreeBuilder`] grows a [`C45Tree`] with the operations above.
//!
//! All the results are returned values;
//! the criterion keeps no state between calls.

pub mod error;
pub mod sample;
pub mod criterion;
pub mod tree;
pub mod prelude;


pub use error::{C45Error, Result};

pub use sample::{
    Attribute,
    Instance,
    TargetValues,
    Sample,
    SampleReader,
};

pub use criterion::{
    GainRatio,
    ThresholdSplit,
    BestSplit,
    entropy,
    candidate_thresholds,
    partition_by_threshold,
    majority_target,
    unanimous_target,
};

pub use tree::{C45Tree, C45TreeBuilder};
