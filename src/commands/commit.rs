use std::sync::Arc;

use crate::config::ConfigStore;
use crate::error::{AppError, Result};
use crate::git::GitOperations;
use crate::llm::InferenceClient;
use crate::llm::prompt::build_commit_prompt;
use crate::ui::{MessageKind, Printer};

/// Generates a `git commit` command for the staged changes.
pub struct CommitService {
    store: ConfigStore,
    client: Arc<dyn InferenceClient>,
    git: Arc<dyn GitOperations>,
    printer: Arc<dyn Printer>,
}

impl CommitService {
    pub fn new(
        store: ConfigStore,
        client: Arc<dyn InferenceClient>,
        git: Arc<dyn GitOperations>,
        printer: Arc<dyn Printer>,
    ) -> Self {
        Self {
            store,
            client,
            git,
            printer,
        }
    }

    /// Returns the suggested command, e.g. `git commit -m "feat: add login"`.
    ///
    /// The command is printed, never executed.
    pub async fn generate_commit_message(&self) -> Result<String> {
        let config = self.store.load()?;
        let diff = self.git.get_staged_diff()?;
        let files = self.git.get_staged_files()?;

        if diff.trim().is_empty() {
            return Err(AppError::NoStagedChanges);
        }

        let spinner = self
            .printer
            .progress("Analyzing git diff with Claude AI...");

        let prompt = build_commit_prompt(&files, &diff);
        tracing::debug!(
            "Commit prompt: {} chars for {} staged file(s)",
            prompt.len(),
            files.lines().count()
        );

        let result = self.client.generate(&config, &prompt).await;
        if let Some(s) = spinner {
            s.finish_and_clear();
        }
        let suggestion = result?;

        let command = format_commit_command(suggestion.trim());
        self.printer
            .print(MessageKind::Success, "Commit message generated");
        self.printer.print(MessageKind::Command, &command);
        Ok(command)
    }
}

fn format_commit_command(message: &str) -> String {
    format!("git commit -m \"{}\"", message)
}
