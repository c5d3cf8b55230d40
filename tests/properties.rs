use c45split::prelude::*;
use c45split::candidate_thresholds;

use proptest::prelude::*;


const LABELS: [&str; 3] = ["A", "B", "C"];


fn instances() -> impl Strategy<Value = Vec<Instance>> {
    prop::collection::vec((-50i32..50, 0usize..LABELS.len()), 0..40)
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(x, y)| Instance::new([("x", x)], LABELS[y]))
                .collect()
        })
}


proptest! {
    #[test]
    fn entropy_is_nonnegative(instances in instances()) {
        let targets = TargetValues::new(LABELS);
        let h = GainRatio::new(&targets).entropy(&instances);
        prop_assert!(h >= 0.0);
        prop_assert!(h <= (LABELS.len() as f64).log2() + 1e-12);
    }


    #[test]
    fn partition_covers_the_input(
        instances in instances(),
        threshold in -60.0f64..60.0,
    ) {
        let x = Attribute::continuous("x");
        let (left, right) = partition_by_threshold(&instances, &x, threshold)
            .unwrap();

        prop_assert_eq!(left.len() + right.len(), instances.len());
        for l in &left {
            prop_assert!(l.value(&x).unwrap() <= threshold);
        }
        for r in &right {
            prop_assert!(r.value(&x).unwrap() > threshold);
        }

        // Order is preserved, so merging both sides back
        // by their position recovers the input.
        let mut li = left.iter().peekable();
        let mut ri = right.iter().peekable();
        for instance in &instances {
            let from_left = li.peek()
                .is_some_and(|l| std::ptr::eq(**l, instance));
            if from_left {
                li.next();
            } else {
                let next = ri.next();
                prop_assert!(next.is_some_and(|r| std::ptr::eq(*r, instance)));
            }
        }
    }


    #[test]
    fn split_information_vanishes_iff_one_sided(
        instances in instances(),
        threshold in -60.0f64..60.0,
    ) {
        let targets = TargetValues::new(LABELS);
        let criterion = GainRatio::new(&targets);
        let x = Attribute::continuous("x");

        let si = criterion.split_information(&instances, &x, threshold)
            .unwrap();
        let (left, right) = partition_by_threshold(&instances, &x, threshold)
            .unwrap();
        prop_assert_eq!(si == 0.0, left.is_empty() || right.is_empty());
    }


    #[test]
    fn gain_ratio_is_bounded_by_gain(
        instances in instances(),
        threshold in -60.0f64..60.0,
    ) {
        let targets = TargetValues::new(LABELS);
        let criterion = GainRatio::new(&targets);
        let x = Attribute::continuous("x");

        let si = criterion.split_information(&instances, &x, threshold)
            .unwrap();
        let gain = criterion.gain(&instances, &x, threshold).unwrap();
        let ratio = criterion.gain_ratio(&instances, &x, threshold).unwrap();

        if si == 0.0 {
            prop_assert_eq!(ratio, 0.0);
        }
        if si >= 1.0 {
            prop_assert!(ratio <= gain + 1e-12);
        }
    }


    #[test]
    fn one_candidate_per_adjacent_pair(instances in instances()) {
        let x = Attribute::continuous("x");
        let mut distinct = instances.iter()
            .map(|i| i.value(&x).unwrap() as i64)
            .collect::<Vec<_>>();
        distinct.sort_unstable();
        distinct.dedup();

        let thresholds = candidate_thresholds(&instances, &x).unwrap();
        prop_assert_eq!(thresholds.len(), distinct.len().saturating_sub(1));
        prop_assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
    }


    #[test]
    fn best_threshold_is_a_scored_candidate(instances in instances()) {
        let targets = TargetValues::new(LABELS);
        let criterion = GainRatio::new(&targets);
        let x = Attribute::continuous("x");

        let thresholds = candidate_thresholds(&instances, &x).unwrap();
        if let Some(best) = criterion.best_threshold(&instances, &x).unwrap() {
            prop_assert!(thresholds.contains(&best.threshold()));
            let score = criterion.gain_ratio(&instances, &x, best.threshold())
                .unwrap();
            prop_assert_eq!(best.score(), score);
            for t in thresholds {
                let other = criterion.gain_ratio(&instances, &x, t).unwrap();
                prop_assert!(other <= best.score());
            }
        }
    }
}
