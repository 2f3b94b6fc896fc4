//! npm package version propagation
//!
//! The npm distribution is one main package whose `optionalDependencies`
//! point at six per-platform packages. All seven must carry the same version
//! before publishing.

pub mod manifest;
pub mod propagate;

pub use propagate::PropagateOptions;
