use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use claude_commit::ui::{ConsolePrinter, MessageKind, Printer};
use claude_commit::commands::{App, BuildInfo, help};
use claude_commit::{cli, error::AppError};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    // Logs go to stderr so stdout only carries user-facing output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // reqwest is built with rustls-no-provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let printer: Arc<dyn Printer> = Arc::new(ConsolePrinter::detect());

    match run(printer.clone()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(printer.as_ref(), &e);
            ExitCode::FAILURE
        }
    }
}

fn run(printer: Arc<dyn Printer>) -> Result<()> {
    let command = cli::parse_args(std::env::args().skip(1))?;
    // Help and version never touch the config, git or the network
    if help::show(printer.as_ref(), &BuildInfo::current(), &command) {
        return Ok(());
    }

    let app = App::with_defaults(printer)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(app.execute(command))?;
    Ok(())
}

fn report_error(printer: &dyn Printer, err: &anyhow::Error) {
    printer.print(MessageKind::Error, &format!("Error: {}", err));
    if let Some(suggestion) = err
        .downcast_ref::<AppError>()
        .and_then(AppError::suggestion)
    {
        printer.print(MessageKind::Info, suggestion);
    }
}
