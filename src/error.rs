use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Required input is missing (e.g. no API key on first `config`).
    #[error("{0}")]
    Validation(String),

    #[error(
        "error reading config file {}: {source}\nPlease run 'claude_commit config -api-key <key>' first",
        path.display()
    )]
    NotConfigured {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, either the local config file or a remote response body.
    #[error("{context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("error making API call: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    RemoteApi { status: u16, body: String },

    #[error("empty response from API")]
    EmptyResponse,

    #[error("no staged changes found")]
    NoStagedChanges,

    #[error("error parsing arguments: {0}")]
    FlagParse(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("git command failed: {0}")]
    GitCommand(String),

    #[error("{0}")]
    Config(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub(crate) fn parse(context: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::Parse {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            context: context.into(),
            source,
        }
    }

    /// Hint shown under the error message, if there is a useful next step.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            AppError::NoStagedChanges => Some("Use 'git add <files>' to stage your changes first"),
            AppError::Validation(msg) if msg.contains("API key") => {
                Some("Run 'claude_commit config -api-key <key>' to set your Anthropic API key")
            }
            AppError::UnknownCommand(_) | AppError::FlagParse(_) => {
                Some("Run 'claude_commit help' to see the available commands")
            }
            AppError::Transport(_) => {
                Some("Check your network connection and proxy settings, then try again")
            }
            AppError::RemoteApi { status: 401, .. } | AppError::RemoteApi { status: 403, .. } => {
                Some("Check if your API key is valid and has not expired")
            }
            AppError::RemoteApi { status: 404, .. } => {
                Some("Check the configured model with 'claude_commit models'")
            }
            AppError::RemoteApi { status: 429, .. } => {
                Some("Rate limit exceeded. Wait a moment and try again")
            }
            AppError::RemoteApi { status, .. } if *status >= 500 => {
                Some("The API service is temporarily unavailable. Try again in a few moments")
            }
            AppError::Parse { context, .. } if context.contains("config file") => {
                Some("Fix or delete the config file, then run 'claude_commit config' again")
            }
            _ => None,
        }
    }
}
