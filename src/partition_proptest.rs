//! Property-based tests for the partitioner.
//!
//! These tests use proptest to generate random inputs and verify that the
//! grouping invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::partition::partition;
    use crate::unit::SourceUnit;
    use proptest::prelude::*;

    const MARKER: &str = ".GeneratedWrapper.";

    /// Random input sequences: each entry is (is_isolated, size).
    fn arb_units() -> impl Strategy<Value = Vec<SourceUnit>> {
        prop::collection::vec((any::<bool>(), 0u64..5000), 0..40).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (isolated, size))| {
                    let name = if isolated {
                        format!("/src/f{}.GeneratedWrapper.cpp", i)
                    } else {
                        format!("/src/f{}.cpp", i)
                    };
                    SourceUnit::with_size(name, size)
                })
                .collect()
        })
    }

    proptest! {
        /// Property: concatenating member lists in group order reproduces
        /// the input sequence exactly (no duplication, omission, reordering)
        #[test]
        fn partition_covers_input_in_order(
            units in arb_units(),
            threshold in 1u64..10_000,
            force in any::<bool>(),
        ) {
            let groups = partition(&units, threshold, force, MARKER);
            let flattened: Vec<usize> = groups.iter().flat_map(|g| g.members.clone()).collect();
            let expected: Vec<usize> = (0..units.len()).collect();
            prop_assert_eq!(flattened, expected);
        }

        /// Property: each group's total_bytes equals the sum of its members' sizes
        #[test]
        fn partition_cost_is_additive(
            units in arb_units(),
            threshold in 1u64..10_000,
            force in any::<bool>(),
        ) {
            for group in partition(&units, threshold, force, MARKER) {
                let sum: u64 = group.members.iter().map(|&i| units[i].size).sum();
                prop_assert_eq!(group.total_bytes, sum);
            }
        }

        /// Property: without force, an isolation-tagged unit never shares a
        /// group with anything
        #[test]
        fn partition_isolates_tagged_units(
            units in arb_units(),
            threshold in 1u64..10_000,
        ) {
            for group in partition(&units, threshold, false, MARKER) {
                let has_tagged = group.members.iter().any(|&i| units[i].is_isolated(MARKER));
                if has_tagged {
                    prop_assert_eq!(
                        group.members.len(),
                        1,
                        "isolated unit shares a group: {:?}",
                        group.members
                    );
                }
            }
        }

        /// Property: with force, everything lands in exactly one group
        #[test]
        fn partition_force_yields_one_group(
            units in arb_units(),
            threshold in 1u64..10_000,
        ) {
            let groups = partition(&units, threshold, true, MARKER);
            if units.is_empty() {
                prop_assert!(groups.is_empty());
            } else {
                prop_assert_eq!(groups.len(), 1);
                prop_assert_eq!(groups[0].members.len(), units.len());
            }
        }

        /// Property: without force, removing the last member of any
        /// multi-member group brings it back under the threshold
        #[test]
        fn partition_threshold_crossed_only_by_last_member(
            units in arb_units(),
            threshold in 1u64..10_000,
        ) {
            for group in partition(&units, threshold, false, MARKER) {
                if group.members.len() > 1 {
                    let last = *group.members.last().unwrap();
                    prop_assert!(group.total_bytes - units[last].size < threshold);
                }
            }
        }

        /// Property: partitioning is deterministic
        #[test]
        fn partition_is_deterministic(
            units in arb_units(),
            threshold in 1u64..10_000,
            force in any::<bool>(),
        ) {
            let first = partition(&units, threshold, force, MARKER);
            let second = partition(&units, threshold, force, MARKER);
            prop_assert_eq!(first, second);
        }
    }
}
