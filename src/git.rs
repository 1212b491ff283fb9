//! Git command invocation behind a small query interface.

use anyhow::{anyhow, Context, Result};
use std::process::Command;

/// Runs a single git invocation, returning trimmed stdout on success.
///
/// Classification logic talks to git only through this trait, so tests can
/// substitute a canned fake instead of a real repository.
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> Result<String>;
}

impl<G: GitRunner + ?Sized> GitRunner for &G {
    fn run(&self, args: &[&str]) -> Result<String> {
        (**self).run(args)
    }
}

/// Shells out to the `git` binary in the current working directory.
pub struct SystemGit {
    verbose: bool,
}

impl SystemGit {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        if self.verbose {
            eprintln!("DEBUG: git {}", args.join(" "));
        }

        let output = Command::new("git")
            .args(args)
            .output()
            .with_context(|| format!("failed to invoke git {}", args.join(" ")))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(anyhow!("git {} failed: {}", args.join(" "), stderr.trim()))
        }
    }
}
