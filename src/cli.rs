//! Command-line dispatch.
//!
//! The first argument selects the command. Flags follow Go's `flag` package
//! conventions, so `-api-key K`, `--api-key K` and `-api-key=K` are all accepted.

use clap::{Parser, builder::styling};

use crate::error::{AppError, Result};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// One invocation's worth of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    /// `config` without flags
    ConfigHelp,
    /// Empty values keep the stored setting.
    Config { api_key: String, model: String },
    View,
    Models,
    Commit,
}

/// Flags of the `config` command.
#[derive(Parser, Debug)]
#[command(name = "claude_commit config")]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
#[command(styles = STYLES)]
struct ConfigArgs {
    /// Anthropic API key
    #[arg(
        long = "api-key",
        value_name = "string",
        default_value = "",
        allow_hyphen_values = true
    )]
    api_key: String,

    /// Anthropic model to use
    #[arg(
        long,
        value_name = "string",
        default_value = "",
        allow_hyphen_values = true
    )]
    model: String,
}

/// Parses the arguments after the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let Some((verb, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    let command = match verb.as_str() {
        "help" | "--help" | "-h" => Command::Help,
        "--version" | "-v" => Command::Version,
        "config" => parse_config(rest)?,
        "view" => no_flags(Command::View, rest)?,
        "models" => no_flags(Command::Models, rest)?,
        "commit" => no_flags(Command::Commit, rest)?,
        other => return Err(AppError::UnknownCommand(other.to_string())),
    };

    tracing::debug!("Parsed command: {:?}", command);
    Ok(command)
}

fn parse_config(rest: &[String]) -> Result<Command> {
    if rest.is_empty() {
        return Ok(Command::ConfigHelp);
    }

    let args = normalize_config_args(rest);
    let mut after_value_flag = false;
    for arg in &args {
        if !after_value_flag && is_help_flag(arg) {
            return Ok(Command::ConfigHelp);
        }
        after_value_flag = !after_value_flag && takes_value(arg);
    }

    let parsed = ConfigArgs::try_parse_from(args)
        .map_err(|e| AppError::FlagParse(e.to_string().trim().to_string()))?;

    Ok(Command::Config {
        api_key: parsed.api_key,
        model: parsed.model,
    })
}

/// Commands without flags accept `-h` and positional arguments, nothing else.
fn no_flags(command: Command, rest: &[String]) -> Result<Command> {
    if rest.iter().any(|a| is_help_flag(a)) {
        return Ok(Command::Help);
    }
    if let Some(flag) = rest.iter().find(|a| a.starts_with('-') && a.as_str() != "-") {
        return Err(AppError::FlagParse(format!(
            "flag provided but not defined: {}",
            flag
        )));
    }
    if !rest.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", rest);
    }
    Ok(command)
}

fn is_help_flag(arg: &str) -> bool {
    matches!(arg, "-h" | "--help" | "-help")
}

/// Normalizes flags in flag position; the token after `-api-key`/`-model`
/// is a value and passes through untouched, as Go's `flag` package reads it.
fn normalize_config_args(rest: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(rest.len());
    let mut expect_value = false;
    for arg in rest {
        if expect_value {
            out.push(arg.clone());
            expect_value = false;
            continue;
        }
        let flag = normalize_flag(arg);
        expect_value = takes_value(&flag);
        out.push(flag);
    }
    out
}

fn takes_value(flag: &str) -> bool {
    matches!(flag, "--api-key" | "--model")
}

/// `-api-key` -> `--api-key`; short flags, `--` flags and values are left alone.
fn normalize_flag(arg: &str) -> String {
    if arg.len() > 2 && arg.starts_with('-') && !arg.starts_with("--") {
        let name = arg[1..].split('=').next().unwrap_or_default();
        if name.len() > 1 && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return format!("-{}", arg);
        }
    }
    arg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(args.iter().copied())
    }

    #[test]
    fn test_no_args_is_help() {
        assert_eq!(parse(&[]).unwrap(), Command::Help);
    }

    #[test]
    fn test_help_and_version_flags() {
        for arg in ["help", "--help", "-h"] {
            assert_eq!(parse(&[arg]).unwrap(), Command::Help);
        }
        for arg in ["--version", "-v"] {
            assert_eq!(parse(&[arg]).unwrap(), Command::Version);
        }
    }

    #[test]
    fn test_simple_verbs() {
        assert_eq!(parse(&["view"]).unwrap(), Command::View);
        assert_eq!(parse(&["models"]).unwrap(), Command::Models);
        assert_eq!(parse(&["commit"]).unwrap(), Command::Commit);
    }

    #[test]
    fn test_config_without_flags_is_config_help() {
        assert_eq!(parse(&["config"]).unwrap(), Command::ConfigHelp);
        assert_eq!(parse(&["config", "-h"]).unwrap(), Command::ConfigHelp);
        assert_eq!(parse(&["config", "--help"]).unwrap(), Command::ConfigHelp);
    }

    #[test]
    fn test_config_go_style_flags() {
        assert_eq!(
            parse(&["config", "-api-key", "sk-1", "-model", "claude-opus-4-0"]).unwrap(),
            Command::Config {
                api_key: "sk-1".to_string(),
                model: "claude-opus-4-0".to_string(),
            }
        );
    }

    #[test]
    fn test_config_double_dash_and_equals() {
        assert_eq!(
            parse(&["config", "--api-key=sk-2", "-model=claude-3-opus-latest"]).unwrap(),
            Command::Config {
                api_key: "sk-2".to_string(),
                model: "claude-3-opus-latest".to_string(),
            }
        );
    }

    #[test]
    fn test_config_single_flag_leaves_other_empty() {
        assert_eq!(
            parse(&["config", "-model", "claude-3-5-haiku-latest"]).unwrap(),
            Command::Config {
                api_key: String::new(),
                model: "claude-3-5-haiku-latest".to_string(),
            }
        );
    }

    #[test]
    fn test_config_value_starting_with_dash_is_kept() {
        assert_eq!(
            parse(&["config", "-api-key=-weird-key"]).unwrap(),
            Command::Config {
                api_key: "-weird-key".to_string(),
                model: String::new(),
            }
        );
    }

    #[test]
    fn test_config_separate_value_starting_with_dash_is_kept() {
        assert_eq!(
            parse(&["config", "-api-key", "-abc123456789"]).unwrap(),
            Command::Config {
                api_key: "-abc123456789".to_string(),
                model: String::new(),
            }
        );
        assert_eq!(
            parse(&["config", "-model", "-custom", "--api-key", "--key"]).unwrap(),
            Command::Config {
                api_key: "--key".to_string(),
                model: "-custom".to_string(),
            }
        );
    }

    #[test]
    fn test_config_help_flag_as_value_is_kept() {
        assert_eq!(
            parse(&["config", "-api-key", "-h"]).unwrap(),
            Command::Config {
                api_key: "-h".to_string(),
                model: String::new(),
            }
        );
        assert_eq!(
            parse(&["config", "-api-key", "k", "-help"]).unwrap(),
            Command::ConfigHelp
        );
    }

    #[test]
    fn test_normalize_config_args_skips_values() {
        let args: Vec<String> = ["-api-key", "-abc", "-model=m", "-model", "-x"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            normalize_config_args(&args),
            vec!["--api-key", "-abc", "--model=m", "--model", "-x"]
        );
    }

    #[test]
    fn test_config_unknown_flag_is_flag_parse_error() {
        let err = parse(&["config", "-token", "x"]).unwrap_err();
        assert!(matches!(err, AppError::FlagParse(_)));
    }

    #[test]
    fn test_config_missing_value_is_flag_parse_error() {
        let err = parse(&["config", "-api-key"]).unwrap_err();
        assert!(matches!(err, AppError::FlagParse(_)));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse(&["deploy"]).unwrap_err();
        assert!(matches!(err, AppError::UnknownCommand(ref v) if v == "deploy"));
        assert_eq!(err.to_string(), "unknown command 'deploy'");
    }

    #[test]
    fn test_verb_with_unknown_flag() {
        let err = parse(&["commit", "--amend"]).unwrap_err();
        assert!(matches!(err, AppError::FlagParse(_)));
        assert!(err.to_string().contains("--amend"));
    }

    #[test]
    fn test_verb_with_help_flag() {
        assert_eq!(parse(&["commit", "-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_normalize_flag() {
        assert_eq!(normalize_flag("-api-key"), "--api-key");
        assert_eq!(normalize_flag("-model=x"), "--model=x");
        assert_eq!(normalize_flag("--model"), "--model");
        assert_eq!(normalize_flag("-m"), "-m");
        assert_eq!(normalize_flag("sk-ant-123"), "sk-ant-123");
        assert_eq!(normalize_flag("-"), "-");
    }
}
