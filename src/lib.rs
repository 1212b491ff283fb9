//! BranchSweep - Merged-Branch Cleanup
//!
//! BranchSweep deletes local Git branches that are already merged into the trunk
//! branch (`main`, falling back to `master`). Unlike a bare `git branch -d` loop,
//! it is selective about what it offers: protected trunk-like names, the
//! currently checked-out branch, and branches still visible on a remote are
//! never candidates, even when fully merged.
//!
//! Runs are dry-run by default; `--execute` performs the deletions, gated by an
//! interactive confirmation unless `--no-interactive` is given. Deletions use
//! git's safe delete (`branch -d`), so git itself refuses anything it cannot
//! prove merged.

pub mod cleaner;
pub mod git;
pub mod prompt;
pub mod protected;

// Re-export commonly used items
pub use cleaner::{BranchCleaner, Classification, CleanOptions, RepoSnapshot};
pub use git::{GitRunner, SystemGit};
pub use prompt::{Confirm, StdinConfirm};
pub use protected::protected_branches;
