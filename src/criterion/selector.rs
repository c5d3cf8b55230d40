use rayon::prelude::*;

use std::borrow::Borrow;

use crate::{Attribute, Instance};
use crate::error::{C45Error, Result};
use super::gain_ratio::GainRatio;
use super::threshold::ThresholdSplit;


/// The attribute selected for splitting a set of instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestSplit<'a> {
    attribute: &'a Attribute,
    split: Option<ThresholdSplit>,
}


impl<'a> BestSplit<'a> {
    /// The selected attribute.
    #[inline]
    pub fn attribute(&self) -> &'a Attribute {
        self.attribute
    }


    /// The threshold found for the selected attribute.
    /// `None` if even the best attribute cannot split the set.
    #[inline]
    pub fn threshold(&self) -> Option<f64> {
        self.split.map(|s| s.threshold())
    }


    /// The gain ratio of the selected attribute.
    #[inline]
    pub fn score(&self) -> f64 {
        self.split.map_or(0.0, |s| s.score())
    }


    /// Returns `true` if the selected attribute splits the set.
    #[inline]
    pub fn is_splittable(&self) -> bool {
        self.split.is_some()
    }
}


impl GainRatio<'_> {
    /// Select the attribute whose best threshold has the largest
    /// gain ratio.
    ///
    /// Attributes are scored in parallel.
    /// If several attributes share the best score,
    /// the one appearing last in `attributes` wins.
    /// Fails with [`C45Error::EmptyAttributeList`]
    /// if `attributes` is empty.
    pub fn best_attribute<'b, I>(
        &self,
        instances: &[I],
        attributes: &'b [Attribute],
    ) -> Result<BestSplit<'b>>
        where I: Borrow<Instance> + Sync,
    {
        let splits = attributes.par_iter()
            .map(|attribute| {
                self.best_threshold(instances, attribute)
                    .map(|split| BestSplit { attribute, split })
            })
            .collect::<Result<Vec<_>>>()?;

        splits.into_iter()
            .reduce(|best, split| {
                if split.score() >= best.score() { split } else { best }
            })
            .ok_or(C45Error::EmptyAttributeList)
    }
}
