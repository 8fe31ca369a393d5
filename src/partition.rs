//! Greedy streaming partitioner
//!
//! Scans the input sequence in order and packs consecutive source units into
//! groups until each group's accumulated bytes reach the threshold.
//! Isolation-tagged units (mechanically generated wrappers) always close
//! their own group, unless single-unit mode is forced, in which case
//! everything lands in one group and isolation tags are ignored.
//!
//! A single grouping pass produces buffered groups; the total count needed
//! for `k_of_N` naming is just the length of the result. Keeping one
//! grouping function means unit count and unit membership can never
//! disagree.

use crate::unit::SourceUnit;

/// One planned unity file: indices into the input sequence plus the byte sum
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// Indices of member units, in input order.
    pub members: Vec<usize>,
    /// Sum of member byte sizes.
    pub total_bytes: u64,
}

/// Partition the input sequence into groups.
///
/// `threshold` is the soft byte cap per group; `force` collapses everything
/// into a single group. `marker` is the isolation-tag path substring.
///
/// Guarantees: every unit appears in exactly one group; concatenating the
/// member lists in group order reproduces `0..units.len()` exactly; each
/// group's `total_bytes` equals the sum of its members' sizes. Empty input
/// yields an empty vec.
pub fn partition(units: &[SourceUnit], threshold: u64, force: bool, marker: &str) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut index = 0;

    while index < units.len() {
        let mut group = Group::default();
        while index < units.len() && (force || group.total_bytes < threshold) {
            let isolated = units[index].is_isolated(marker);
            // An isolation-tagged unit never joins a non-empty group.
            if isolated && !force && !group.members.is_empty() {
                break;
            }
            group.total_bytes += units[index].size;
            group.members.push(index);
            index += 1;
            // ...and once added, it closes its group immediately.
            if isolated && !force {
                break;
            }
        }
        groups.push(group);
    }

    groups
}
