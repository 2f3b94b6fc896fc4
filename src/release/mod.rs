//! Release pruning
//!
//! Deletes every GitHub release (and its tag) except one kept version.
//!
//! # Flow
//!
//! 1. **List** releases with `gh release list` (fatal on failure)
//! 2. **Plan** the complement of the kept tag, in listing order
//! 3. **Preview** the plan; `--dry-run` stops here
//! 4. **Confirm** interactively (literal `yes`)
//! 5. **Delete** each release, then its tag, counting outcomes
//!
//! Deletion is best-effort: one failed release never stops the batch, and a
//! tag that cannot be deleted is assumed to be gone already.

pub mod github;
pub mod plan;
pub mod prune;

pub use prune::{PruneOptions, PruneOutcome, Pruner};
