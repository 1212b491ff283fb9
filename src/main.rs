use anyhow::Result;
use clap::Parser;

use branchsweep::cleaner::{BranchCleaner, CleanOptions};
use branchsweep::git::SystemGit;
use branchsweep::prompt::StdinConfirm;
use branchsweep::protected::protected_branches;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find and optionally delete local Git branches already merged into the trunk",
    long_about = None
)]
struct Args {
    /// Show what would be deleted without actually deleting (the default)
    #[arg(long, conflicts_with = "execute")]
    dry_run: bool,

    /// Actually delete branches
    #[arg(long)]
    execute: bool,

    /// Skip the confirmation prompt when executing
    #[arg(long)]
    no_interactive: bool,

    /// Show each git command before it runs
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let options = CleanOptions {
        dry_run: args.dry_run || !args.execute,
        interactive: !args.no_interactive,
    };

    let cleaner = BranchCleaner::new(
        SystemGit::new(args.verbose),
        options,
        protected_branches()?,
    );

    cleaner.run(&mut StdinConfirm)
}
