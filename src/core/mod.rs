//! Shared plumbing for release-maint commands
//!
//! - **config**: optional release-maint.toml with prune/package defaults
//! - **error**: error types with contextual help messages and exit codes
//! - **process**: external command execution (`gh`, `git`)
//! - **prompt**: interactive confirmation

pub mod config;
pub mod error;
pub mod process;
pub mod prompt;
