use serde::{Serialize, Deserialize};

use std::borrow::Borrow;

use crate::{Attribute, Instance};
use crate::error::Result;
use super::gain_ratio::GainRatio;
use super::score::Score;


/// The best threshold found for one attribute,
/// together with the gain ratio it achieves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSplit {
    threshold: f64,
    score: f64,
}


impl ThresholdSplit {
    #[inline]
    pub(crate) fn new(threshold: f64, score: Score) -> Self {
        Self { threshold, score: score.0 }
    }


    /// Instances with value `<= threshold` go to the left child.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// The gain ratio of the split.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }
}


/// Returns the arithmetic mean of `a` and `b`
/// without overflowing near `f64::MAX`.
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    let mid = (a + b) / 2.0;
    if mid.is_finite() { mid } else { a / 2.0 + b / 2.0 }
}


/// Enumerate the candidate thresholds for `attribute`:
/// the midpoints of adjacent distinct values, in ascending order.
/// `k` distinct values yield `k - 1` candidates.
pub fn candidate_thresholds<I>(instances: &[I], attribute: &Attribute)
    -> Result<Vec<f64>>
    where I: Borrow<Instance>,
{
    let mut values = instances.iter()
        .map(|x| x.borrow().value(attribute))
        .collect::<Result<Vec<f64>>>()?;

    values.sort_by(f64::total_cmp);
    values.dedup();

    let thresholds = values.windows(2)
        .map(|w| midpoint(w[0], w[1]))
        .collect();
    Ok(thresholds)
}


impl GainRatio<'_> {
    /// Find the threshold on `attribute` that maximizes the gain ratio.
    ///
    /// Returns `None` if the attribute cannot split `instances`:
    /// the attribute is not continuous, it takes fewer than two
    /// distinct values, or no candidate has a positive gain ratio.
    /// If several candidates share the best score,
    /// the smallest threshold wins.
    pub fn best_threshold<I>(&self, instances: &[I], attribute: &Attribute)
        -> Result<Option<ThresholdSplit>>
        where I: Borrow<Instance>,
    {
        if !attribute.is_continuous() { return Ok(None); }

        let thresholds = candidate_thresholds(instances, attribute)?;
        if thresholds.is_empty() { return Ok(None); }

        let parent = self.entropy(instances);
        let mut best: Option<ThresholdSplit> = None;
        let mut best_score = Score::ZERO;

        for threshold in thresholds {
            let score = self.gain_ratio_under(
                parent, instances, attribute, threshold
            )?;
            let score = Score::from(score);

            if score > best_score {
                best_score = score;
                best = Some(ThresholdSplit::new(threshold, score));
            }
        }
        Ok(best)
    }
}
