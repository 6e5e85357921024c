//! Help and version output.

use crate::cli::Command;
use crate::ui::{MessageKind, Printer};

/// Version metadata. Build date and commit come from optional compile-time
/// env vars and fall back to `unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub build_date: String,
    pub commit_sha: String,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: format!("v{}", env!("CARGO_PKG_VERSION")),
            build_date: option_env!("CLAUDE_COMMIT_BUILD_DATE")
                .unwrap_or("unknown")
                .to_string(),
            commit_sha: option_env!("CLAUDE_COMMIT_GIT_SHA")
                .unwrap_or("unknown")
                .to_string(),
        }
    }
}

/// Serves the commands that only print static text.
///
/// Returns `false` for every other command.
pub fn show(printer: &dyn Printer, build: &BuildInfo, command: &Command) -> bool {
    match command {
        Command::Help => show_help(printer),
        Command::Version => show_version(printer, build),
        Command::ConfigHelp => show_config_help(printer),
        _ => return false,
    }
    true
}

pub fn show_version(printer: &dyn Printer, build: &BuildInfo) {
    printer.print(
        MessageKind::Title,
        &format!("Claude Commit {}", build.version),
    );
    printer.print(
        MessageKind::Info,
        &format!("Build date: {}", build.build_date),
    );
    if build.commit_sha != "unknown" {
        printer.print(MessageKind::Info, &format!("Commit: {}", build.commit_sha));
    }
}

pub fn show_help(printer: &dyn Printer) {
    printer.print(MessageKind::Title, "Claude Commit");
    printer.print(
        MessageKind::Subtitle,
        "Generate conventional commit messages with Claude AI",
    );

    printer.print(
        MessageKind::Plain,
        "Usage:\n  claude_commit <command> [flags]\n\n\
         Commands:\n  \
         config    Configure API key and model\n  \
         view      Show current configuration\n  \
         models    List available models\n  \
         commit    Generate a commit message for staged changes\n  \
         help      Show this help\n\n\
         Flags:\n  \
         -v, --version    Show version information\n  \
         -h, --help       Show this help",
    );

    printer.print(
        MessageKind::Boxed,
        "Examples:\n  \
         claude_commit config -api-key \"sk-ant-...\"\n  \
         claude_commit models\n  \
         git add . && claude_commit commit",
    );

    printer.print(
        MessageKind::Plain,
        "Commit Types:\n  \
         feat, fix, docs, style, refactor, perf, test, build, ci, chore, revert",
    );
}

pub fn show_config_help(printer: &dyn Printer) {
    printer.print(MessageKind::Title, "Claude Commit Config");
    printer.print(
        MessageKind::Subtitle,
        "Configure API key and model settings",
    );

    printer.print(
        MessageKind::Plain,
        "Usage:\n  claude_commit config [flags]\n\n\
         Flags:\n  \
         -api-key string    Anthropic API key\n  \
         -model string      Anthropic model to use (default keeps the current one)",
    );

    printer.print(
        MessageKind::Boxed,
        "Examples:\n  \
         # Initial setup\n  \
         claude_commit config -api-key \"sk-ant-...\" -model \"claude-sonnet-4-0\"\n\n  \
         # Update only API key\n  \
         claude_commit config -api-key \"sk-ant-new...\"\n\n  \
         # Update only model\n  \
         claude_commit config -model \"claude-3-5-haiku-latest\"",
    );

    printer.print(
        MessageKind::Info,
        "Run 'claude_commit view' to see the current configuration and \
         'claude_commit models' to list available models",
    );
}
