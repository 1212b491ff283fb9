//! Branch discovery, classification, and best-effort deletion.

use crate::git::GitRunner;
use crate::prompt::Confirm;

use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::HashSet;

/// Options controlling deletion behavior (runtime flags)
#[derive(Clone, Copy)]
pub struct CleanOptions {
    pub dry_run: bool,
    pub interactive: bool,
}

/// Point-in-time view of the repository, captured once per run.
pub struct RepoSnapshot {
    /// Checked-out branch, empty when detached or unknown.
    pub current: String,
    /// Local branch names in `git branch` listing order.
    pub local: Vec<String>,
    /// Short names of remote-tracking branches (`origin/feature` → `feature`).
    pub remote_short_names: HashSet<String>,
}

/// Outcome of classifying a snapshot.
pub struct Classification {
    /// Branches safe to delete, in local listing order.
    pub candidates: Vec<String>,
    /// Merged branches kept because they still exist on a remote.
    pub skipped_remote: Vec<String>,
}

pub struct BranchCleaner<G: GitRunner> {
    git: G,
    options: CleanOptions,
    protected: HashSet<String>,
}

impl<G: GitRunner> BranchCleaner<G> {
    pub fn new(git: G, options: CleanOptions, protected: HashSet<String>) -> Self {
        Self {
            git,
            options,
            protected,
        }
    }

    /// Currently checked-out branch. Empty when HEAD is detached (git prints
    /// nothing) or the query fails.
    fn current_branch(&self) -> String {
        match self.git.run(&["branch", "--show-current"]) {
            Ok(name) => name,
            Err(err) => {
                eprintln!("Warning: could not determine current branch: {}", err);
                String::new()
            }
        }
    }

    /// Local branch names in listing order. Strips the `* ` current-branch
    /// marker and drops non-branch entries like "(HEAD detached at 1a2b3c4)".
    fn local_branches(&self) -> Vec<String> {
        let output = match self.git.run(&["branch"]) {
            Ok(output) => output,
            Err(err) => {
                eprintln!("Warning: could not list local branches: {}", err);
                return Vec::new();
            }
        };

        output
            .lines()
            .map(str::trim)
            .map(|line| line.strip_prefix("* ").unwrap_or(line).trim())
            .filter(|branch| !branch.is_empty() && !branch.starts_with('('))
            .map(str::to_string)
            .collect()
    }

    /// Short names of remote-tracking branches. The symbolic-HEAD pointer line
    /// ("origin/HEAD -> origin/main") is not a branch and is excluded.
    fn remote_short_names(&self) -> HashSet<String> {
        let output = match self.git.run(&["branch", "-r"]) {
            Ok(output) => output,
            Err(err) => {
                eprintln!("Warning: could not list remote branches: {}", err);
                return HashSet::new();
            }
        };

        output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.contains("HEAD"))
            .filter_map(|line| line.rsplit('/').next())
            .map(str::to_string)
            .collect()
    }

    /// Capture the repository state this run will classify against. Queried
    /// once; never refreshed mid-run.
    pub fn snapshot(&self) -> RepoSnapshot {
        RepoSnapshot {
            current: self.current_branch(),
            local: self.local_branches(),
            remote_short_names: self.remote_short_names(),
        }
    }

    /// True when `branch` is fully reachable from `trunk`.
    ///
    /// Primary check is membership in `git branch --merged <trunk>`. If that
    /// query fails, fall back to comparing the merge base with the branch tip;
    /// any failure on the fallback path means "not merged".
    fn is_merged(&self, branch: &str, trunk: &str) -> bool {
        match self.git.run(&["branch", "--merged", trunk]) {
            Ok(output) => output
                .lines()
                .map(str::trim)
                .map(|line| line.strip_prefix("* ").unwrap_or(line))
                .any(|name| name == branch),
            Err(_) => {
                // A branch is merged iff the merge base is the branch tip itself.
                match (
                    self.git.run(&["merge-base", trunk, branch]),
                    self.git.run(&["rev-parse", branch]),
                ) {
                    (Ok(base), Ok(tip)) => base == tip,
                    _ => false,
                }
            }
        }
    }

    /// Trunk is `main` when present locally, `master` otherwise.
    fn trunk(&self, local: &[String]) -> &'static str {
        if local.iter().any(|branch| branch == "main") {
            "main"
        } else {
            "master"
        }
    }

    /// Apply the decision rule to every local branch, in listing order:
    /// protected names and the checked-out branch are never candidates;
    /// unmerged branches are never candidates; merged branches still visible
    /// on a remote are set aside so the caller can print a notice.
    pub fn classify(&self, snapshot: &RepoSnapshot) -> Classification {
        let trunk = self.trunk(&snapshot.local);
        let mut candidates = Vec::new();
        let mut skipped_remote = Vec::new();

        for branch in &snapshot.local {
            if self.protected.contains(branch) {
                continue;
            }
            if *branch == snapshot.current {
                continue;
            }
            if !self.is_merged(branch, trunk) {
                continue;
            }
            if snapshot.remote_short_names.contains(branch) {
                skipped_remote.push(branch.clone());
            } else {
                candidates.push(branch.clone());
            }
        }

        Classification {
            candidates,
            skipped_remote,
        }
    }

    /// Delete branches one at a time with git's safe delete. Failures are
    /// reported and skipped; there is no abort and no rollback.
    pub fn delete_branches(&self, branches: &[String]) {
        for branch in branches {
            if self.options.dry_run {
                println!("[DRY RUN] Would delete branch: {}", branch);
                continue;
            }

            match self.git.run(&["branch", "-d", branch]) {
                Ok(_) => println!("{} {}", "Deleted branch:".green(), branch),
                Err(err) => {
                    eprintln!("{} {}: {}", "Failed to delete branch".red(), branch, err)
                }
            }
        }
    }

    /// Discover, classify, report, confirm, delete.
    pub fn run(&self, confirm: &mut dyn Confirm) -> Result<()> {
        println!("Analyzing Git repository...");

        // Validity probe; the one query failure that aborts the run.
        self.git
            .run(&["status"])
            .context("not inside a Git repository")?;

        let snapshot = self.snapshot();
        let classification = self.classify(&snapshot);

        for branch in &classification.skipped_remote {
            println!("Skipping {}: exists on remote", branch);
        }

        let candidates = &classification.candidates;
        if candidates.is_empty() {
            println!("No merged branches to clean up.");
            return Ok(());
        }

        println!(
            "\n{}",
            format!("Found {} merged branches:", candidates.len()).bold()
        );
        for branch in candidates {
            println!("  - {}", branch);
        }

        if self.options.interactive && !self.options.dry_run && !confirm.confirm(candidates.len())
        {
            println!("Cancelled.");
            return Ok(());
        }

        self.delete_branches(candidates);

        if !self.options.dry_run {
            println!(
                "\n{}",
                format!("Cleaned up {} branches.", candidates.len()).green()
            );
        }

        Ok(())
    }
}
