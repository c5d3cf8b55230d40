//! Exports the standard structs and functions.
//!
pub use crate::error::{C45Error, Result};


pub use crate::sample::{
    Attribute,
    Instance,
    TargetValues,
    Sample,
    SampleReader,
};


pub use crate::criterion::{
    // Split criterion
    GainRatio,
    ThresholdSplit,
    BestSplit,


    // Tree-building helpers
    partition_by_threshold,
    majority_target,
    unanimous_target,
};


pub use crate::tree::{
    C45Tree,
    C45TreeBuilder,
};
