//! Integration tests for `release-maint prune`
//!
//! Run against fake `gh`/`git` scripts on PATH, so unix only.

#![cfg(unix)]

use crate::helpers::{FakeTools, Invocation, TestDir, stderr, stdout};
use anyhow::Result;

const LISTING: &str = r#"[
  {"id": "RE_1", "name": "v1.0.0", "tagName": "v1.0.0"},
  {"id": "RE_2", "name": "Second beta", "tagName": "v0.9.0"},
  {"id": "RE_3", "name": "First beta", "tagName": "v0.8.0"}
]"#;

const LIST_CALL: &str = "gh release list --repo o/r --limit 100 --json tagName,name,id";

#[test]
fn test_prune_dry_run_previews_only() -> Result<()> {
  let dir = TestDir::new()?;
  let tools = FakeTools::new(LISTING)?;

  let output = Invocation::new(&dir.path, &["prune", "--repo", "o/r", "--keep", "v1.0.0", "--dry-run"])
    .env("PATH", tools.path_env())
    .success()?;
  let out = stdout(&output);

  assert!(out.contains("Fetching all releases from o/r..."));
  assert!(out.contains("Found 3 releases"));
  assert!(out.contains("Releases to delete:"));
  assert!(out.contains("  - v0.9.0 (Second beta)"));
  assert!(out.contains("  - v0.8.0 (First beta)"));
  assert!(!out.contains("  - v1.0.0"));
  assert!(out.contains("Keeping: v1.0.0"));
  assert!(out.contains("[DRY RUN] No releases will be deleted."));

  assert_eq!(tools.calls()?, vec![LIST_CALL]);
  Ok(())
}

#[test]
fn test_prune_cancelled_without_yes() -> Result<()> {
  let dir = TestDir::new()?;
  let tools = FakeTools::new(LISTING)?;

  let output = Invocation::new(&dir.path, &["prune", "--repo", "o/r", "--keep", "v1.0.0"])
    .env("PATH", tools.path_env())
    .stdin("no\n")
    .success()?;

  assert!(stdout(&output).contains("Are you sure you want to delete 2 releases? (yes/no): "));
  assert!(stdout(&output).contains("Operation cancelled."));
  assert_eq!(tools.calls()?, vec![LIST_CALL]);
  Ok(())
}

#[test]
fn test_prune_closed_stdin_cancels() -> Result<()> {
  let dir = TestDir::new()?;
  let tools = FakeTools::new(LISTING)?;

  let output = Invocation::new(&dir.path, &["prune", "--repo", "o/r", "--keep", "v1.0.0"])
    .env("PATH", tools.path_env())
    .success()?;

  assert!(stdout(&output).contains("Operation cancelled."));
  assert_eq!(tools.calls()?.len(), 1);
  Ok(())
}

#[test]
fn test_prune_confirmed_deletes_releases_and_tags() -> Result<()> {
  let dir = TestDir::new()?;
  let tools = FakeTools::new(LISTING)?;

  let output = Invocation::new(&dir.path, &["prune", "--repo", "o/r", "--keep", "v1.0.0"])
    .env("PATH", tools.path_env())
    .stdin("yes\n")
    .success()?;
  let out = stdout(&output);

  assert_eq!(
    tools.calls()?,
    vec![
      LIST_CALL,
      "gh release delete v0.9.0 --repo o/r --yes",
      "git push --delete origin v0.9.0",
      "gh release delete v0.8.0 --repo o/r --yes",
      "git push --delete origin v0.8.0",
    ]
  );
  // The fake git always fails: tags count as already gone
  assert!(out.contains("(tag already deleted or doesn't exist)"));
  assert!(out.contains("  Deleted: 2"));
  assert!(out.contains("  Failed: 0"));
  assert!(out.contains("  Kept: v1.0.0"));
  Ok(())
}

#[test]
fn test_prune_failed_delete_is_summarized_not_fatal() -> Result<()> {
  let dir = TestDir::new()?;
  let tools = FakeTools::new(LISTING)?;

  let output = Invocation::new(&dir.path, &["prune", "--repo", "o/r", "--keep", "v1.0.0", "--yes"])
    .env("PATH", tools.path_env())
    .env("FAKE_GH_FAIL", "gh release delete v0.9.0 --repo o/r --yes")
    .success()?;
  let out = stdout(&output);

  assert!(out.contains("Deleting v0.9.0... ✗"));
  assert!(out.contains("Deleting v0.8.0... ✓"));
  assert!(out.contains("  Deleted: 1"));
  assert!(out.contains("  Failed: 1"));

  let calls = tools.calls()?;
  assert!(!calls.contains(&"git push --delete origin v0.9.0".to_string()));
  assert!(calls.contains(&"git push --delete origin v0.8.0".to_string()));
  Ok(())
}

#[test]
fn test_prune_listing_failure_is_fatal() -> Result<()> {
  let dir = TestDir::new()?;
  let tools = FakeTools::new(LISTING)?;

  let output = Invocation::new(&dir.path, &["prune", "--repo", "o/r", "--keep", "v1.0.0"])
    .env("PATH", tools.path_env())
    .env("FAKE_GH_FAIL", LIST_CALL)
    .stdin("yes\n")
    .output()?;

  assert_eq!(output.status.code(), Some(2));
  assert!(stderr(&output).contains("HTTP 403"));
  assert!(!stdout(&output).contains("Releases to delete"));
  assert_eq!(tools.calls()?.len(), 1);
  Ok(())
}

#[test]
fn test_prune_unparseable_listing_is_fatal() -> Result<()> {
  let dir = TestDir::new()?;
  let tools = FakeTools::new("not json")?;

  let output = Invocation::new(&dir.path, &["prune", "--repo", "o/r"])
    .env("PATH", tools.path_env())
    .output()?;

  assert!(!output.status.success());
  assert!(stderr(&output).contains("Failed to parse release list"));
  Ok(())
}

#[test]
fn test_prune_only_kept_release() -> Result<()> {
  let dir = TestDir::new()?;
  let tools = FakeTools::new(r#"[{"id": "RE_1", "name": "Stable", "tagName": "v0.2.2"}]"#)?;

  // No --keep: the built-in default tag applies
  let output = Invocation::new(&dir.path, &["prune", "--repo", "o/r"])
    .env("PATH", tools.path_env())
    .success()?;

  assert!(stdout(&output).contains("No releases to delete. Only v0.2.2 exists."));
  Ok(())
}

#[test]
fn test_prune_defaults_from_config() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file("release-maint.toml", "[prune]\nrepo = \"acme/tool\"\nkeep = \"v0.9.0\"\n")?;
  let tools = FakeTools::new(LISTING)?;

  let output = Invocation::new(&dir.path, &["prune", "--dry-run"])
    .env("PATH", tools.path_env())
    .success()?;
  let out = stdout(&output);

  assert!(out.contains("Fetching all releases from acme/tool..."));
  assert!(out.contains("  - v1.0.0 (v1.0.0)"));
  assert!(out.contains("Keeping: v0.9.0"));
  assert_eq!(
    tools.calls()?,
    vec!["gh release list --repo acme/tool --limit 100 --json tagName,name,id"]
  );
  Ok(())
}
