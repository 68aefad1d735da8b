//! Per-group quota planning for the unassigned population.
//!
//! Contract:
//! - Target is the real-valued ideal size `total / |groups|`, never rounded.
//! - First pass: `need[g] = max(0, floor(target) - current[g])`; groups
//!   already at or over the floor ask for nothing.
//! - Reconciliation moves one slot at a time until `sum(need)` equals the
//!   unassigned count exactly:
//!     * shortfall → cycle groups ordered ascending by current membership
//!       (fewest members first, wrap around);
//!     * excess → cycle groups ordered descending by first-pass need
//!       (biggest askers give back first), skipping groups already at zero;
//!       the ranking is computed once, before removal starts.
//! - Ties in either ordering keep configuration order (stable sort).
//!
//! Pre-existing assignments are never revisited here, so a group that is
//! already far overfull simply ends with zero need.

use hb_core::GroupSet;

/// How many additional records each group should receive, aligned with the
/// group set's configuration order.
///
/// Invariant: `total()` equals the unassigned count the plan was built for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssignmentPlan {
    needs: Vec<usize>,
}

impl AssignmentPlan {
    /// Plan slots for `unassigned` new members given per-group current
    /// membership (`current` is aligned with `groups`).
    ///
    /// Callers guarantee `groups` is non-empty; the balancer rejects the
    /// empty set before planning.
    pub fn build(groups: &GroupSet, current: &[usize], unassigned: usize) -> Self {
        debug_assert_eq!(current.len(), groups.len());
        debug_assert!(!groups.is_empty());

        let total = current.iter().sum::<usize>() + unassigned;
        let target = total as f64 / groups.len() as f64;
        let floor = target.floor() as usize;

        let mut needs: Vec<usize> = current.iter().map(|&c| floor.saturating_sub(c)).collect();

        let planned: usize = needs.iter().sum();
        if planned < unassigned {
            distribute_shortfall(&mut needs, current, unassigned - planned);
        } else if planned > unassigned {
            trim_excess(&mut needs, planned - unassigned);
        }

        debug_assert_eq!(needs.iter().sum::<usize>(), unassigned);
        Self { needs }
    }

    /// Slots for the group at `index` in configuration order.
    pub fn need(&self, index: usize) -> usize {
        self.needs[index]
    }

    /// All needs, in configuration order.
    pub fn needs(&self) -> &[usize] {
        &self.needs
    }

    /// Total planned slots; equals the unassigned count after reconciliation.
    pub fn total(&self) -> usize {
        self.needs.iter().sum()
    }
}

/// Hand out `shortfall` extra slots one at a time, cycling through groups
/// ordered ascending by current membership.
fn distribute_shortfall(needs: &mut [usize], current: &[usize], shortfall: usize) {
    let mut order: Vec<usize> = (0..needs.len()).collect();
    order.sort_by_key(|&g| current[g]);
    for k in 0..shortfall {
        needs[order[k % order.len()]] += 1;
    }
}

/// Take back `excess` slots one at a time, cycling through groups ordered
/// descending by first-pass need and skipping groups already at zero.
fn trim_excess(needs: &mut [usize], excess: usize) {
    let mut order: Vec<usize> = (0..needs.len()).collect();
    order.sort_by(|&a, &b| needs[b].cmp(&needs[a]));

    let mut remaining = excess;
    while remaining > 0 {
        let at_start = remaining;
        for &g in &order {
            if remaining == 0 {
                break;
            }
            if needs[g] > 0 {
                needs[g] -= 1;
                remaining -= 1;
            }
        }
        // The excess is strictly smaller than the planned total, so a full
        // cycle must retire at least one slot.
        debug_assert!(remaining < at_start);
        if remaining == at_start {
            break;
        }
    }
}
