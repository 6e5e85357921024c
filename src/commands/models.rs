use crate::config::ConfigStore;
use crate::error::Result;
use crate::llm::models::{AVAILABLE_MODELS, DEFAULT_MODEL, is_known_model};
use crate::ui::{MessageKind, Printer};

/// Lists the supported models, marking the configured and default ones.
pub fn run(store: &ConfigStore, printer: &dyn Printer) -> Result<()> {
    let config = store.load()?;

    printer.print(MessageKind::Title, "Available Models:");
    for line in model_lines(&config.model) {
        printer.print(MessageKind::Plain, &line);
    }

    if !is_known_model(&config.model) {
        printer.print(
            MessageKind::Warning,
            &format!("Currently using custom model: {}", config.model),
        );
    }
    printer.print(
        MessageKind::Info,
        "Change model with: claude_commit config -model <model>",
    );
    Ok(())
}

fn model_lines(current: &str) -> Vec<String> {
    AVAILABLE_MODELS
        .iter()
        .map(|model| {
            let mut line = format!("  • {}", model);
            if *model == current {
                line.push_str(" [CURRENT]");
            }
            if *model == DEFAULT_MODEL {
                line.push_str(" [DEFAULT]");
            }
            line
        })
        .collect()
}
