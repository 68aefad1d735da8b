//! Roster records.

use crate::groups::{Group, GroupSet};

/// One roster entry: an opaque name and an optional group label.
///
/// `group == None` means the record is unassigned and will be filled in by
/// the balancer. No record is created or destroyed during balancing; only
/// the `group` field of unassigned records mutates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// Identifier, passed through unmodified.
    pub name: String,
    pub group: Option<Group>,
}

impl Record {
    pub fn new(name: impl Into<String>, group: Option<Group>) -> Self {
        Self {
            name: name.into(),
            group,
        }
    }

    /// Classify a raw label against `groups`.
    ///
    /// Missing, blank, or unrecognized labels yield an unassigned record;
    /// recognized labels are stored in canonical form.
    pub fn from_raw(name: impl Into<String>, raw_label: Option<&str>, groups: &GroupSet) -> Self {
        let group = raw_label.and_then(|raw| groups.resolve(raw)).cloned();
        Self::new(name, group)
    }

    pub fn is_assigned(&self) -> bool {
        self.group.is_some()
    }
}
