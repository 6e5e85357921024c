//! Command implementations.
//!
//! # Modules
//! - `commit` - Commit message generation flow.
//! - `models` - Model listing.
//! - `help` - Help and version output.
//!
//! `config` and `view` are served directly by [`ConfigStore`].
//!
//! # Architecture
//! ```text
//! main.rs ─> cli::parse_args ─> App::execute
//!                                 ├── ConfigStore::save / view
//!                                 ├── commands/models.rs
//!                                 ├── commands/commit.rs ─> git, llm
//!                                 └── commands/help.rs
//! ```

/// Commit generation command flow.
pub mod commit;
/// Help, config help and version output.
pub mod help;
/// Model listing command.
pub mod models;

use std::sync::Arc;

use crate::cli::Command;
use crate::config::{ConfigStore, FileSystem, OsFileSystem};
use crate::error::Result;
use crate::git::{GitOperations, SystemGit};
use crate::llm::{AnthropicClient, InferenceClient};
use crate::ui::Printer;

pub use commit::CommitService;
pub use help::BuildInfo;

/// Wires the collaborators together and runs one [`Command`].
pub struct App {
    store: ConfigStore,
    commit: CommitService,
    printer: Arc<dyn Printer>,
    build: BuildInfo,
}

impl App {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        git: Arc<dyn GitOperations>,
        client: Arc<dyn InferenceClient>,
        printer: Arc<dyn Printer>,
    ) -> Self {
        let store = ConfigStore::new(fs, printer.clone());
        let commit = CommitService::new(store.clone(), client, git, printer.clone());
        Self {
            store,
            commit,
            printer,
            build: BuildInfo::current(),
        }
    }

    /// Real filesystem, `git` in the current directory and the public API.
    pub fn with_defaults(printer: Arc<dyn Printer>) -> Result<Self> {
        Ok(Self::new(
            Arc::new(OsFileSystem::new()),
            Arc::new(SystemGit::new()),
            Arc::new(AnthropicClient::new()?),
            printer,
        ))
    }

    pub fn with_build_info(mut self, build: BuildInfo) -> Self {
        self.build = build;
        self
    }

    pub async fn execute(&self, command: Command) -> Result<()> {
        if help::show(self.printer.as_ref(), &self.build, &command) {
            return Ok(());
        }

        match command {
            Command::Help | Command::Version | Command::ConfigHelp => {}
            Command::Config { api_key, model } => {
                self.store.save(&api_key, &model)?;
            }
            Command::View => {
                self.store.view()?;
            }
            Command::Models => models::run(&self.store, self.printer.as_ref())?,
            Command::Commit => {
                self.commit.generate_commit_message().await?;
            }
        }
        Ok(())
    }
}
