pub mod command;

use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use command::SystemGit;

/// Read-only queries against the staging area.
///
/// Main implementation: [`SystemGit`], which runs the `git` executable.
/// Mockable through `mockall` for orchestration tests.
///
/// # Example
/// ```no_run
/// use claude_commit::git::{GitOperations, SystemGit};
///
/// # fn main() -> anyhow::Result<()> {
/// let git = SystemGit::new();
/// let diff = git.get_staged_diff()?;
/// println!("Staged changes:\n{}", diff);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GitOperations: Send + Sync {
    /// Diff of the staged changes, equivalent to `git diff --staged`.
    ///
    /// May be empty when nothing is staged.
    fn get_staged_diff(&self) -> Result<String>;

    /// Newline separated names of the staged files
    /// (`git diff --staged --name-only`).
    fn get_staged_files(&self) -> Result<String>;
}
