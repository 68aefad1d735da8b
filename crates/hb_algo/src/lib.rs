//! hb_algo — the group balancer.
//!
//! Pure algorithm layer: no I/O, no ambient randomness. [`plan`] computes
//! per-group quotas for the unassigned population; [`balance`] applies a
//! randomized assignment consistent with the plan through an injected
//! [`hb_core::ShuffleRng`].

#![forbid(unsafe_code)]

use std::fmt;

pub mod balance;
pub mod plan;

pub use balance::{balance, BalanceReport};
pub use plan::AssignmentPlan;

/// Errors surfaced by the balancer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BalanceError {
    /// The configured group set is empty; there is nothing to balance into.
    /// Guarded explicitly so it never surfaces as a division fault.
    EmptyGroupSet,
}

impl fmt::Display for BalanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceError::EmptyGroupSet => write!(f, "cannot balance into an empty group set"),
        }
    }
}

impl std::error::Error for BalanceError {}
