//! Defines the gain-ratio criterion of C4.5.
use std::borrow::Borrow;

use crate::{Attribute, Instance, TargetValues};
use crate::error::Result;
use super::entropy::{self, plog2p};
use super::partition::partition_by_threshold;


/// The gain-ratio splitting criterion.
///
/// `GainRatio` borrows the target-value universe of a sample,
/// so that the entropy of a subset accounts for every label
/// even if some of them do not appear in the subset.
/// It holds no other state; all the results are returned values,
/// so that one can evaluate attributes or sub-trees in parallel.
///
/// # Example
/// ```
/// use c45split::{Attribute, Instance, TargetValues, GainRatio};
///
/// let age = Attribute::continuous("age");
/// let instances = [("25", "No"), ("30", "No"), ("35", "Yes"), ("40", "Yes")]
///     .into_iter()
///     .map(|(a, y)| Instance::new([("age", a)], y))
///     .collect::<Vec<_>>();
/// let targets = TargetValues::from_instances(&instances);
///
/// let criterion = GainRatio::new(&targets);
/// let split = criterion.best_threshold(&instances, &age)
///     .unwrap()
///     .unwrap();
/// assert_eq!(split.threshold(), 32.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GainRatio<'a> {
    targets: &'a TargetValues,
}


impl<'a> GainRatio<'a> {
    /// Construct the criterion over the label universe `targets`.
    #[inline]
    pub fn new(targets: &'a TargetValues) -> Self {
        Self { targets }
    }


    /// Returns the label universe.
    #[inline]
    pub fn target_values(&self) -> &'a TargetValues {
        self.targets
    }


    /// Shannon entropy of `instances`.
    #[inline]
    pub fn entropy<I>(&self, instances: &[I]) -> f64
        where I: Borrow<Instance>,
    {
        entropy::entropy(self.targets, instances)
    }


    /// Size-weighted entropy of the two sides
    /// of the split `attribute <= threshold`.
    pub fn conditional_entropy<I>(
        &self,
        instances: &[I],
        attribute: &Attribute,
        threshold: f64,
    ) -> Result<f64>
        where I: Borrow<Instance>,
    {
        if instances.is_empty() { return Ok(0.0); }

        let n_instance = instances.len() as f64;
        let (left, right) = partition_by_threshold(
            instances, attribute, threshold
        )?;

        let lp = left.len() as f64 / n_instance;
        let rp = right.len() as f64 / n_instance;

        Ok(lp * self.entropy(&left) + rp * self.entropy(&right))
    }


    /// Entropy of the split `attribute <= threshold` itself.
    /// This is `0.0` iff one side is empty.
    pub fn split_information<I>(
        &self,
        instances: &[I],
        attribute: &Attribute,
        threshold: f64,
    ) -> Result<f64>
        where I: Borrow<Instance>,
    {
        if instances.is_empty() { return Ok(0.0); }

        let n_instance = instances.len() as f64;
        let (left, right) = partition_by_threshold(
            instances, attribute, threshold
        )?;

        let lp = left.len() as f64 / n_instance;
        let rp = right.len() as f64 / n_instance;

        Ok(-plog2p(lp) - plog2p(rp))
    }


    /// Information gain of the split `attribute <= threshold`.
    #[inline]
    pub fn gain<I>(
        &self,
        instances: &[I],
        attribute: &Attribute,
        threshold: f64,
    ) -> Result<f64>
        where I: Borrow<Instance>,
    {
        let conditional = self.conditional_entropy(
            instances, attribute, threshold
        )?;
        Ok(self.entropy(instances) - conditional)
    }


    /// Gain normalized by the split information.
    /// A one-sided split has no split information;
    /// its gain ratio is defined as `0.0`.
    #[inline]
    pub fn gain_ratio<I>(
        &self,
        instances: &[I],
        attribute: &Attribute,
        threshold: f64,
    ) -> Result<f64>
        where I: Borrow<Instance>,
    {
        let parent = self.entropy(instances);
        self.gain_ratio_under(parent, instances, attribute, threshold)
    }


    /// Gain ratio of the split `attribute <= threshold`,
    /// given the entropy `parent` of `instances`.
    /// The instances are partitioned once.
    pub(crate) fn gain_ratio_under<I>(
        &self,
        parent: f64,
        instances: &[I],
        attribute: &Attribute,
        threshold: f64,
    ) -> Result<f64>
        where I: Borrow<Instance>,
    {
        if instances.is_empty() { return Ok(0.0); }

        let n_instance = instances.len() as f64;
        let (left, right) = partition_by_threshold(
            instances, attribute, threshold
        )?;

        let lp = left.len() as f64 / n_instance;
        let rp = right.len() as f64 / n_instance;

        let split_info = -plog2p(lp) - plog2p(rp);
        if split_info == 0.0 { return Ok(0.0); }

        let conditional = lp * self.entropy(&left) + rp * self.entropy(&right);
        Ok((parent - conditional) / split_info)
    }
}
