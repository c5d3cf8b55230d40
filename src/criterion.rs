//! The gain-ratio split criterion of C4.5
//! and the helpers a tree builder needs around it.

/// Defines Shannon entropy.
pub mod entropy;
/// Defines the binary partition by a threshold.
pub mod partition;
/// Defines the gain-ratio criterion.
pub mod gain_ratio;
/// Defines the threshold search.
pub mod threshold;
/// Defines the attribute selection.
pub mod selector;
/// Defines the leaf decisions.
pub mod leaf;

mod score;


pub use entropy::entropy;
pub use partition::{partition_by_threshold, Splitter, LR};
pub use gain_ratio::GainRatio;
pub use threshold::{candidate_thresholds, ThresholdSplit};
pub use selector::BestSplit;
pub use leaf::{majority_target, unanimous_target};
