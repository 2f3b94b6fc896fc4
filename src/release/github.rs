//! GitHub release operations via the gh CLI
//!
//! Argument vectors here are what `gh` and `git` actually receive; keep them
//! stable, CI wrappers grep for them.

use crate::core::error::{MaintError, MaintResult};
use crate::core::process::{CommandOutput, CommandRunner};
use serde::{Deserialize, Serialize};

/// Maximum number of releases fetched in one listing
pub const LIST_LIMIT: &str = "100";

/// Remote the release tags are deleted from
pub const TAG_REMOTE: &str = "origin";

/// A release as reported by `gh release list --json tagName,name,id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
  /// Tag the release points at (unique per repository)
  #[serde(rename = "tagName")]
  pub tag_name: String,
  /// Display name, may be empty
  #[serde(default)]
  pub name: String,
  /// Opaque GitHub identifier
  #[serde(default)]
  pub id: serde_json::Value,
}

/// Parse the JSON array printed by `gh release list --json`
pub fn parse_release_list(json: &str) -> Result<Vec<Release>, serde_json::Error> {
  serde_json::from_str(json)
}

/// Fetch every release of `repo` (up to [`LIST_LIMIT`])
///
/// Any failure here is fatal to the prune run.
pub fn list_releases(runner: &dyn CommandRunner, repo: &str) -> MaintResult<Vec<Release>> {
  println!("Fetching all releases from {}...", repo);

  let result = runner.run(
    "gh",
    &[
      "release",
      "list",
      "--repo",
      repo,
      "--limit",
      LIST_LIMIT,
      "--json",
      "tagName,name,id",
    ],
  );

  if !result.success {
    return Err(MaintError::Fetch {
      repo: repo.to_string(),
      reason: result.output,
    });
  }

  parse_release_list(&result.output).map_err(|e| MaintError::Fetch {
    repo: repo.to_string(),
    reason: format!("Failed to parse release list: {}", e),
  })
}

/// Delete the release for `tag`, leaving the tag itself in place
pub fn delete_release(runner: &dyn CommandRunner, repo: &str, tag: &str) -> CommandOutput {
  runner.run("gh", &["release", "delete", tag, "--repo", repo, "--yes"])
}

/// Delete `tag` from the `origin` remote
pub fn delete_remote_tag(runner: &dyn CommandRunner, tag: &str) -> CommandOutput {
  runner.run("git", &["push", "--delete", TAG_REMOTE, tag])
}
