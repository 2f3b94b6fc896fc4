mod commands;
mod core;
mod npm;
mod release;

use clap::{Parser, Subcommand};
use crate::core::error::{MaintError, print_error};
use std::path::PathBuf;

/// Release housekeeping: prune GitHub releases, pre-flight npm version bumps
#[derive(Parser)]
#[command(name = "release-maint")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Delete all GitHub releases (and their tags) except one version
  Prune {
    /// Release tag to keep [default: v0.2.2, or `prune.keep` in release-maint.toml]
    #[arg(long, value_name = "TAG")]
    keep: Option<String>,
    /// Repository [default: jihuayu/xor, or `prune.repo` in release-maint.toml]
    #[arg(long, value_name = "OWNER/NAME")]
    repo: Option<String>,
    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    dry_run: bool,
    /// Skip the interactive confirmation
    #[arg(short, long)]
    yes: bool,
  },

  /// Check that a version can be applied to the main and all platform npm packages
  Versions {
    /// Target version, without a leading "v" (e.g. 0.2.3)
    #[arg(value_name = "VERSION")]
    target: String,
    /// npm package directory [default: package/npm, or `packages.root` in release-maint.toml]
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Write the new versions instead of only validating them
    #[arg(long)]
    write: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Prune {
      keep,
      repo,
      dry_run,
      yes,
    } => commands::run_prune(keep, repo, dry_run, yes),
    Commands::Versions { target, root, write } => commands::run_versions(target, root, write),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: MaintError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
