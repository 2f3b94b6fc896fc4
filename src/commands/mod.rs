//! CLI commands for release-maint
//!
//! - **prune**: delete every GitHub release and tag except the kept one
//! - **versions**: pre-flight a version bump across the npm packages

pub mod prune;
pub mod versions;

pub use prune::run_prune;
pub use versions::run_versions;
