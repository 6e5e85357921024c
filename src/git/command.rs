use std::path::PathBuf;
use std::process::Command;

use which::which;

use crate::error::{AppError, Result};
use crate::git::GitOperations;

/// [`GitOperations`] backed by the `git` CLI.
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    work_dir: Option<PathBuf>,
}

impl SystemGit {
    /// Runs git in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs git in `dir` instead of the current directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(dir.into()),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let git = which("git")
            .map_err(|e| AppError::GitCommand(format!("git executable not found: {}", e)))?;

        let mut cmd = Command::new(git);
        cmd.args(args);
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!("Running git {}", args.join(" "));
        let output = cmd
            .output()
            .map_err(|e| AppError::GitCommand(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // Some git errors go to stdout
            let error_msg = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(AppError::GitCommand(error_msg));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitOperations for SystemGit {
    fn get_staged_diff(&self) -> Result<String> {
        self.run(&["diff", "--staged"])
    }

    fn get_staged_files(&self) -> Result<String> {
        self.run(&["diff", "--staged", "--name-only"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .output()
            .unwrap()
            .status;
        assert!(status.success(), "git {:?} failed", args);
    }

    fn git_available() -> bool {
        which("git").is_ok()
    }

    #[test]
    fn test_staged_diff_and_files() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        git(dir.path(), &["init", "-q"]);

        let repo = SystemGit::in_dir(dir.path());
        assert_eq!(repo.get_staged_diff().unwrap(), "");
        assert_eq!(repo.get_staged_files().unwrap(), "");

        std::fs::write(dir.path().join("hello.txt"), "hello\n").unwrap();
        git(dir.path(), &["add", "hello.txt"]);

        let diff = repo.get_staged_diff().unwrap();
        assert!(diff.contains("diff --git a/hello.txt b/hello.txt"));
        assert!(diff.contains("+hello"));
        assert_eq!(repo.get_staged_files().unwrap().trim(), "hello.txt");
    }

    #[test]
    fn test_unstaged_changes_are_ignored() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        git(dir.path(), &["init", "-q"]);
        std::fs::write(dir.path().join("untracked.txt"), "x\n").unwrap();

        let repo = SystemGit::in_dir(dir.path());
        assert!(repo.get_staged_diff().unwrap().trim().is_empty());
    }

    #[test]
    fn test_missing_work_dir_is_git_error() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let repo = SystemGit::in_dir(dir.path().join("does-not-exist"));

        assert!(matches!(
            repo.get_staged_diff().unwrap_err(),
            AppError::GitCommand(_)
        ));
    }
}
