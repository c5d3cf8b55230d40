use std::borrow::Borrow;

use crate::{Attribute, Instance};
use crate::error::Result;


/// The output of the function `split` of [`Splitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// The value is less than or equal to the threshold.
    Left,
    /// The value is strictly greater than the threshold.
    Right,
}


/// A binary splitting rule `value <= threshold` on one attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splitter<'a> {
    attribute: &'a Attribute,
    threshold: f64,
}


impl<'a> Splitter<'a> {
    /// Construct a new rule.
    #[inline]
    pub fn new(attribute: &'a Attribute, threshold: f64) -> Self {
        Self { attribute, threshold }
    }


    /// Defines the splitting.
    #[inline]
    pub fn split(&self, instance: &Instance) -> Result<LR> {
        let value = instance.value(self.attribute)?;

        let lr = if value <= self.threshold { LR::Left } else { LR::Right };
        Ok(lr)
    }
}


/// Split `instances` into the ones whose value of `attribute` is
/// `<= threshold` and the ones that are `> threshold`.
/// Both groups keep the relative order of the input.
pub fn partition_by_threshold<'a, I>(
    instances: &'a [I],
    attribute: &Attribute,
    threshold: f64,
) -> Result<(Vec<&'a Instance>, Vec<&'a Instance>)>
    where I: Borrow<Instance>,
{
    let rule = Splitter::new(attribute, threshold);

    let mut left = Vec::new();
    let mut right = Vec::new();
    for x in instances {
        let x = x.borrow();
        match rule.split(x)? {
            LR::Left  => { left.push(x); },
            LR::Right => { right.push(x); },
        }
    }
    Ok((left, right))
}
