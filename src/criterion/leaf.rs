use std::borrow::Borrow;
use std::collections::{BTreeMap, HashSet};

use crate::Instance;


/// Returns the most frequent label of `instances`,
/// or `None` if `instances` is empty.
/// Among equally frequent labels,
/// the lexicographically smallest one is returned.
pub fn majority_target<I>(instances: &[I]) -> Option<&str>
    where I: Borrow<Instance>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for x in instances {
        *counts.entry(x.borrow().target_value()).or_insert(0) += 1;
    }

    let mut majority: Option<(&str, usize)> = None;
    for (label, count) in counts {
        match majority {
            Some((_, best)) if best >= count => {},
            _ => { majority = Some((label, count)); },
        }
    }
    majority.map(|(label, _)| label)
}


/// Returns `true` iff all of `instances` share exactly one label.
/// An empty input has no label, so the result is `false`.
pub fn unanimous_target<I>(instances: &[I]) -> bool
    where I: Borrow<Instance>,
{
    let labels = instances.iter()
        .map(|x| x.borrow().target_value())
        .collect::<HashSet<_>>();
    labels.len() == 1
}


#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(labels: &[&str]) -> Vec<Instance> {
        labels.iter()
            .map(|y| Instance::new([("x", "0")], y))
            .collect()
    }

    #[test]
    fn majority() {
        let instances = labeled(&["A", "A", "B"]);
        assert_eq!(majority_target(&instances), Some("A"));

        let instances = labeled(&["B", "C", "C", "B", "C"]);
        assert_eq!(majority_target(&instances), Some("C"));
    }

    #[test]
    fn majority_ties_go_to_the_smallest_label() {
        let instances = labeled(&["Yes", "No", "Yes", "No"]);
        assert_eq!(majority_target(&instances), Some("No"));
    }

    #[test]
    fn majority_of_nothing() {
        let instances = labeled(&[]);
        assert_eq!(majority_target(&instances), None);
    }

    #[test]
    fn unanimity() {
        assert!(unanimous_target(&labeled(&["A", "A"])));
        assert!(!unanimous_target(&labeled(&["A", "B"])));
        assert!(!unanimous_target(&labeled(&[])));
    }
}
