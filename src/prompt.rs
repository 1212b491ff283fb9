//! Interactive confirmation prompt.

use std::io::{self, BufRead, Write};

/// Blocking yes/no confirmation before a batch of deletions.
///
/// A trait so the orchestration can be driven by a scripted double in tests
/// instead of a terminal.
pub trait Confirm {
    /// Returns true only when the operator approves deleting `count` branches.
    fn confirm(&mut self, count: usize) -> bool;
}

/// Reads a single line from stdin; only a case-insensitive `y` approves.
/// Empty input, EOF, and read errors all decline.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, count: usize) -> bool {
        print!("Delete these {count} branches? (y/N): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => line.trim().eq_ignore_ascii_case("y"),
            Err(_) => false,
        }
    }
}
