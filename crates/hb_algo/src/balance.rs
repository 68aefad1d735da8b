//! Randomized fill of unassigned records against an assignment plan.

use hb_core::{Group, GroupSet, Record, ShuffleRng};

use crate::plan::AssignmentPlan;
use crate::BalanceError;

/// Observational counts from one balancing run.
///
/// Per-group vectors are aligned with the group set's configuration order.
/// These numbers feed the console summary; they are not part of the
/// balancing contract itself.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceReport {
    pub total: usize,
    pub preassigned: usize,
    pub unassigned: usize,
    /// Ideal fractional group size (`total / |groups|`).
    pub target: f64,
    /// Per-group membership before balancing.
    pub before: Vec<usize>,
    /// Per-group slots handed to previously-unassigned records.
    pub needs: Vec<usize>,
    /// Per-group membership after balancing.
    pub after: Vec<usize>,
}

/// Assign every unassigned record to a group, keeping final group sizes as
/// close to equal as the pre-existing assignments allow.
///
/// Records whose label is already a member of `groups` keep it untouched.
/// Unassigned records are filled in original relative order from a shuffled
/// pool, so two runs with the same seed produce identical output; a roster
/// with nothing to assign draws no randomness at all.
///
/// Fails with [`BalanceError::EmptyGroupSet`] when `groups` is empty; no
/// record is mutated in that case.
pub fn balance(
    records: &mut [Record],
    groups: &GroupSet,
    rng: &mut ShuffleRng,
) -> Result<BalanceReport, BalanceError> {
    if groups.is_empty() {
        return Err(BalanceError::EmptyGroupSet);
    }

    let mut before = vec![0usize; groups.len()];
    let mut unassigned = 0usize;
    for record in records.iter() {
        match member_index(record, groups) {
            Some(g) => before[g] += 1,
            None => unassigned += 1,
        }
    }
    let total = records.len();
    let target = total as f64 / groups.len() as f64;

    let plan = AssignmentPlan::build(groups, &before, unassigned);

    // Flatten the plan into a pool of labels, one per unassigned record,
    // then shuffle it.
    let mut pool: Vec<&Group> = Vec::with_capacity(unassigned);
    for (g, group) in groups.iter().enumerate() {
        pool.extend(std::iter::repeat(group).take(plan.need(g)));
    }
    debug_assert_eq!(pool.len(), unassigned);
    rng.shuffle_in_place(&mut pool);

    // Fill unassigned records in original relative order.
    let mut slots = pool.into_iter();
    for record in records.iter_mut() {
        if member_index(record, groups).is_none() {
            record.group = slots.next().cloned();
        }
    }
    debug_assert!(slots.next().is_none());

    let mut after = vec![0usize; groups.len()];
    for record in records.iter() {
        if let Some(g) = member_index(record, groups) {
            after[g] += 1;
        }
    }

    Ok(BalanceReport {
        total,
        preassigned: total - unassigned,
        unassigned,
        target,
        before,
        needs: plan.needs().to_vec(),
        after,
    })
}

/// Index of the record's group within `groups`, or `None` when the record
/// counts as unassigned (no label, or a label from some other set).
fn member_index(record: &Record, groups: &GroupSet) -> Option<usize> {
    record.group.as_ref().and_then(|g| groups.index_of(g))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_groups() -> GroupSet {
        GroupSet::new(["a", "b", "c", "d"]).unwrap()
    }

    fn roster(labels: &[Option<&str>], groups: &GroupSet) -> Vec<Record> {
        labels
            .iter()
            .enumerate()
            .map(|(i, raw)| Record::from_raw(format!("s{i}"), *raw, groups))
            .collect()
    }

    #[test]
    fn skewed_preassignment_fills_to_near_equal() {
        let groups = four_groups();
        let labels = [
            Some("a"), Some("a"), Some("a"), Some("a"),
            Some("b"), Some("b"),
            Some("c"),
            Some("d"),
            None, None, None, None,
        ];
        let mut records = roster(&labels, &groups);
        let mut rng = ShuffleRng::from_seed_u64(1);

        let report = balance(&mut records, &groups, &mut rng).unwrap();
        assert_eq!(report.total, 12);
        assert_eq!(report.preassigned, 8);
        assert_eq!(report.unassigned, 4);
        assert_eq!(report.target, 3.0);
        assert_eq!(report.before, [4, 2, 1, 1]);
        assert_eq!(report.needs, [0, 1, 1, 2]);
        assert_eq!(report.after, [4, 3, 2, 3]);
        assert!(records.iter().all(Record::is_assigned));
    }

    #[test]
    fn two_group_shortfall_prefers_the_emptier_group() {
        let groups = GroupSet::new(["a", "b"]).unwrap();
        let mut records = roster(&[None; 5], &groups);
        let mut rng = ShuffleRng::from_seed_u64(9);

        let report = balance(&mut records, &groups, &mut rng).unwrap();
        assert_eq!(report.target, 2.5);
        assert_eq!(report.needs, [3, 2]);
        assert_eq!(report.after, [3, 2]);
    }

    #[test]
    fn empty_group_set_fails_without_mutation() {
        let real = four_groups();
        let empty = GroupSet::new(Vec::<&str>::new()).unwrap();
        let mut records = roster(&[Some("a"), None, Some("zzz")], &real);
        let untouched = records.clone();
        let mut rng = ShuffleRng::from_seed_u64(3);

        let err = balance(&mut records, &empty, &mut rng).unwrap_err();
        assert_eq!(err, BalanceError::EmptyGroupSet);
        assert_eq!(records, untouched);
        assert_eq!(rng.words_consumed(), 0);
    }

    #[test]
    fn fully_labeled_roster_is_untouched_and_draws_nothing() {
        let groups = four_groups();
        let mut records = roster(&[Some("a"), Some("b"), Some("c"), Some("d"), Some("a")], &groups);
        let untouched = records.clone();
        let mut rng = ShuffleRng::from_seed_u64(5);

        let report = balance(&mut records, &groups, &mut rng).unwrap();
        assert_eq!(records, untouched);
        assert_eq!(report.unassigned, 0);
        assert_eq!(rng.words_consumed(), 0);
    }

    #[test]
    fn empty_roster_is_fine() {
        let groups = four_groups();
        let mut records: Vec<Record> = Vec::new();
        let mut rng = ShuffleRng::from_seed_u64(11);

        let report = balance(&mut records, &groups, &mut rng).unwrap();
        assert_eq!(report.total, 0);
        assert_eq!(report.after, [0, 0, 0, 0]);
    }

    #[test]
    fn same_seed_same_assignment() {
        let groups = four_groups();
        let labels = [None, Some("b"), None, None, Some("d"), None, None];
        let mut first = roster(&labels, &groups);
        let mut second = roster(&labels, &groups);

        balance(&mut first, &groups, &mut ShuffleRng::from_seed_u64(77)).unwrap();
        balance(&mut second, &groups, &mut ShuffleRng::from_seed_u64(77)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn preassigned_labels_survive_balancing() {
        let groups = four_groups();
        let labels = [Some("d"), None, Some("b"), None, None, Some("d")];
        let mut records = roster(&labels, &groups);
        balance(&mut records, &groups, &mut ShuffleRng::from_seed_u64(2)).unwrap();

        assert_eq!(records[0].group.as_ref().map(Group::as_str), Some("d"));
        assert_eq!(records[2].group.as_ref().map(Group::as_str), Some("b"));
        assert_eq!(records[5].group.as_ref().map(Group::as_str), Some("d"));
    }
}
