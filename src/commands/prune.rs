//! `release-maint prune`

use crate::core::config::MaintConfig;
use crate::core::error::MaintResult;
use crate::core::process::SystemRunner;
use crate::core::prompt::{AssumeYes, Confirm, LineConfirm};
use crate::release::{PruneOptions, PruneOutcome, Pruner};
use std::env;

/// Run the prune command
///
/// Exits zero whatever happens to individual deletions; only a failed
/// release listing is an error.
pub fn run_prune(keep: Option<String>, repo: Option<String>, dry_run: bool, yes: bool) -> MaintResult<()> {
  let workspace_root = env::current_dir()?;
  let config = MaintConfig::load(&workspace_root)?;

  let opts = PruneOptions {
    repo: config.resolve_repo(repo),
    keep: config.resolve_keep(keep),
    dry_run,
  };

  let mut confirm: Box<dyn Confirm> = if yes {
    Box::new(AssumeYes)
  } else {
    Box::new(LineConfirm::stdin())
  };

  let runner = SystemRunner;
  let outcome = Pruner::new(&runner).run(&opts, confirm.as_mut())?;

  match outcome {
    PruneOutcome::Previewed { planned } => {
      println!();
      println!("Run without --dry-run to delete {} release(s)", planned.len());
    }
    PruneOutcome::Cancelled { planned } => {
      println!("{} release(s) left untouched", planned.len());
    }
    PruneOutcome::Completed(summary) if summary.failed > 0 => {
      println!();
      println!(
        "⚠️  {} release(s) could not be deleted; check `gh auth status` and rerun",
        summary.failed
      );
    }
    _ => {}
  }

  Ok(())
}
