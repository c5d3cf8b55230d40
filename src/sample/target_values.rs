use serde::{Serialize, Deserialize};

use std::slice::Iter;

use crate::error::{C45Error, Result};
use super::instance::Instance;


/// The set of all class labels of a sample.
/// Labels keep the order in which they are given, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetValues {
    labels: Vec<String>,
}


impl TargetValues {
    /// Construct the label universe from the given labels.
    /// Repeated labels are kept once.
    pub fn new<I, T>(labels: I) -> Self
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        let mut universe = Self::default();
        labels.into_iter()
            .for_each(|label| universe.insert(label.to_string()));
        universe
    }


    /// Collect the labels appearing in `instances`, in first-seen order.
    pub fn from_instances(instances: &[Instance]) -> Self {
        Self::new(instances.iter().map(Instance::target_value))
    }


    fn insert(&mut self, label: String) {
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
    }


    /// Returns `true` if `label` is a member of the universe.
    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }


    /// Returns the number of labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }


    /// Returns `true` if no label is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }


    /// Iterate over the labels.
    #[inline]
    pub fn iter(&self) -> Iter<'_, String> {
        self.labels.iter()
    }


    /// Check that every instance is labeled inside the universe.
    pub fn validate(&self, instances: &[Instance]) -> Result<()> {
        match instances.iter().find(|x| !self.contains(x.target_value())) {
            Some(x) => Err(C45Error::UnknownTarget {
                label: x.target_value().to_string(),
            }),
            None => Ok(()),
        }
    }
}


impl<'a> IntoIterator for &'a TargetValues {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}
