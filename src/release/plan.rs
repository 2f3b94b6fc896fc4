//! Prune planning: which releases go, which one stays

use crate::release::github::Release;

/// Releases whose tag differs from `keep`, in source order
pub fn plan(releases: &[Release], keep: &str) -> Vec<Release> {
  releases.iter().filter(|r| r.tag_name != keep).cloned().collect()
}
