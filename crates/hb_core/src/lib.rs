//! hb_core — Core types, group domains, and the seedable shuffle RNG.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! balancer (`hb_algo`), the roster I/O layer (`hb_io`), and the CLI
//! (`hb_cli`):
//!
//! - [`Group`] / [`GroupSet`]: canonical group identifiers and the fixed,
//!   ordered set of valid groups for one run
//! - [`Record`]: one roster entry (opaque name + optional group label)
//! - [`ShuffleRng`]: seedable ChaCha20 RNG used for randomized assignment

#![forbid(unsafe_code)]

pub mod groups;
pub mod record;
pub mod rng;

pub mod errors {
    use std::fmt;

    /// Minimal error set for core-domain validation.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum CoreError {
        /// A group name was empty after trimming.
        BlankGroupName,
        /// The same canonical name appeared twice in one group set.
        DuplicateGroup(String),
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::BlankGroupName => write!(f, "blank group name"),
                CoreError::DuplicateGroup(name) => write!(f, "duplicate group name: {name}"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub use errors::CoreError;
pub use groups::{Group, GroupSet, DEFAULT_GROUPS};
pub use record::Record;
pub use rng::ShuffleRng;
