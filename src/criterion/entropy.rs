use std::borrow::Borrow;
use std::collections::HashMap;

use crate::{Instance, TargetValues};


/// Returns `p * log2(p)`, where `0 * log2(0)` is defined as `0`.
#[inline(always)]
pub(crate) fn plog2p(p: f64) -> f64 {
    if p == 0.0 { 0.0 } else { p * p.log2() }
}


/// Shannon entropy (in bits) of the labels of `instances`,
/// measured over every label of `targets`.
/// Returns `0.0` for an empty input.
pub fn entropy<I>(targets: &TargetValues, instances: &[I]) -> f64
    where I: Borrow<Instance>,
{
    if instances.is_empty() { return 0.0; }

    let n_instance = instances.len() as f64;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for x in instances {
        *counts.entry(x.borrow().target_value()).or_insert(0) += 1;
    }

    targets.iter()
        .map(|label| {
            let count = counts.get(label.as_str()).copied().unwrap_or(0);
            -plog2p(count as f64 / n_instance)
        })
        .sum::<f64>()
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
    fn empty_has_no_entropy() {
        let targets = TargetValues::new(["A", "B"]);
        let instances: Vec<Instance> = Vec::new();
        assert_eq!(entropy(&targets, &instances), 0.0);
    }

    #[test]
    fn pure_set_has_no_entropy() {
        let targets = TargetValues::new(["A", "B"]);
        let instances = labeled(&["A", "A", "A"]);
        assert_eq!(entropy(&targets, &instances), 0.0);
    }

    #[test]
    fn even_two_class_set_is_one_bit() {
        let targets = TargetValues::new(["A", "B"]);
        let instances = labeled(&["A", "B", "B", "A", "A", "B"]);
        assert_eq!(entropy(&targets, &instances), 1.0);
    }

    #[test]
    fn four_even_classes_are_two_bits() {
        let targets = TargetValues::new(["A", "B", "C", "D"]);
        let instances = labeled(&["A", "B", "C", "D"]);
        assert_eq!(entropy(&targets, &instances), 2.0);
    }

    #[test]
    fn absent_labels_contribute_nothing() {
        let targets = TargetValues::new(["A", "B", "C"]);
        let instances = labeled(&["A", "B"]);
        assert_eq!(entropy(&targets, &instances), 1.0);
    }
}
