//! # claude-commit
//!
//! Suggests a conventional commit message for the staged changes using Claude.
//!
//! The pipeline is linear: load config → read the staged diff → build the
//! prompt → call the Messages API → print `git commit -m "<message>"`.
//! The command is only printed, never run.
//!
//! ## Quick start
//! ```bash
//! claude_commit config -api-key "sk-ant-..." -model "claude-sonnet-4-0"
//! git add .
//! claude_commit commit
//! ```
//!
//! ## As a library
//! ```no_run
//! use std::sync::Arc;
//! use claude_commit::cli::Command;
//! use claude_commit::commands::App;
//! use claude_commit::ui::ConsolePrinter;
//!
//! # async fn example() -> claude_commit::error::Result<()> {
//! let app = App::with_defaults(Arc::new(ConsolePrinter::detect()))?;
//! app.execute(Command::Commit).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Core modules
//! - [`cli`] - argument dispatch
//! - [`commands`] - command implementations
//! - [`config`] - config persistence (`~/.claude-commit/config.json`)
//! - [`git`] - staged diff queries
//! - [`llm`] - Messages API client and prompt
//! - [`error`] - error type
//! - [`ui`] - output formatting

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod llm;
pub mod ui;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
