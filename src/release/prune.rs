//! Prune execution: preview, confirm, delete, summarize

use crate::core::error::MaintResult;
use crate::core::process::CommandRunner;
use crate::core::prompt::{Confirm, is_affirmative};
use crate::release::github::{self, Release};
use crate::release::plan::plan;
use std::io::{self, Write};

/// What to prune
#[derive(Debug, Clone)]
pub struct PruneOptions {
  /// Repository in owner/name form
  pub repo: String,
  /// Tag of the release that survives
  pub keep: String,
  /// Preview only
  pub dry_run: bool,
}

/// Tally of a completed prune
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneSummary {
  pub deleted: usize,
  pub failed: usize,
  pub kept: String,
}

/// How a prune run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneOutcome {
  /// The repository has no releases at all
  NoReleases,
  /// Only the kept release exists
  NothingToDelete,
  /// Dry run: plan printed, nothing deleted
  Previewed { planned: Vec<Release> },
  /// Operator declined the confirmation
  Cancelled { planned: Vec<Release> },
  /// Deletions attempted
  Completed(PruneSummary),
}

/// Drives one prune run against a command runner
pub struct Pruner<'a> {
  runner: &'a dyn CommandRunner,
}

impl<'a> Pruner<'a> {
  pub fn new(runner: &'a dyn CommandRunner) -> Self {
    Self { runner }
  }

  /// Delete one release and its tag; `true` when the release is gone
  ///
  /// A failed tag deletion still counts as success.
  pub fn delete_one(&self, repo: &str, tag: &str, dry_run: bool) -> bool {
    if dry_run {
      println!("  [DRY RUN] Would delete {}", tag);
      return true;
    }

    print!("Deleting {}... ", tag);
    io::stdout().flush().ok();

    if !github::delete_release(self.runner, repo, tag).success {
      println!("✗");
      return false;
    }
    println!("✓");

    print!("  Deleting tag {}... ", tag);
    io::stdout().flush().ok();
    if github::delete_remote_tag(self.runner, tag).success {
      println!("✓");
    } else {
      println!("(tag already deleted or doesn't exist)");
    }

    true
  }

  /// Run the whole prune: list, plan, preview, confirm, delete
  ///
  /// Only a failed listing is an error. Individual deletion failures end up
  /// in the returned summary.
  pub fn run(&self, opts: &PruneOptions, confirm: &mut dyn Confirm) -> MaintResult<PruneOutcome> {
    let releases = github::list_releases(self.runner, &opts.repo)?;

    if releases.is_empty() {
      println!("No releases found.");
      return Ok(PruneOutcome::NoReleases);
    }

    println!("Found {} releases\n", releases.len());

    let planned = plan(&releases, &opts.keep);
    if planned.is_empty() {
      println!("No releases to delete. Only {} exists.", opts.keep);
      return Ok(PruneOutcome::NothingToDelete);
    }

    print_plan(&planned, &opts.keep);

    if opts.dry_run {
      println!("[DRY RUN] No releases will be deleted.");
      return Ok(PruneOutcome::Previewed { planned });
    }

    let answer = confirm.ask(&format!(
      "Are you sure you want to delete {} releases? (yes/no): ",
      planned.len()
    ))?;
    if !is_affirmative(&answer) {
      println!("Operation cancelled.");
      return Ok(PruneOutcome::Cancelled { planned });
    }

    println!("\nDeleting releases...");

    let mut summary = PruneSummary {
      deleted: 0,
      failed: 0,
      kept: opts.keep.clone(),
    };
    for release in &planned {
      if self.delete_one(&opts.repo, &release.tag_name, opts.dry_run) {
        summary.deleted += 1;
      } else {
        summary.failed += 1;
      }
    }

    print_summary(&summary);
    Ok(PruneOutcome::Completed(summary))
  }
}

fn print_plan(planned: &[Release], keep: &str) {
  println!("Releases to delete:");
  for release in planned {
    println!("  - {} ({})", release.tag_name, release.name);
  }
  println!("\nKeeping: {}\n", keep);
}

fn print_summary(summary: &PruneSummary) {
  println!("\nSummary:");
  println!("  Deleted: {}", summary.deleted);
  println!("  Failed: {}", summary.failed);
  println!("  Kept: {}", summary.kept);
}
