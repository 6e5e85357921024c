use std::io::IsTerminal;

use colored::{Color, Colorize};

use super::Spinner;

const PURPLE: Color = Color::TrueColor {
    r: 0x7D,
    g: 0x56,
    b: 0xF4,
};
const LIGHT_PURPLE: Color = Color::TrueColor {
    r: 0x9E,
    g: 0x83,
    b: 0xF5,
};

/// What a line of output means; the printer decides how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Title,
    Subtitle,
    Plain,
    Info,
    Success,
    Warning,
    Error,
    /// A shell command the user may copy
    Command,
    /// A framed block of one or more lines
    Boxed,
}

/// Output capability injected into every service.
///
/// Services only describe *what* they report; styling lives in the implementation.
pub trait Printer: Send + Sync {
    fn print(&self, kind: MessageKind, text: &str);

    /// Starts an advisory progress notice. The returned spinner (if any) is
    /// cleared when dropped.
    fn progress(&self, message: &str) -> Option<Spinner> {
        self.print(MessageKind::Info, message);
        None
    }
}

/// Terminal printer (colors via `colored`, errors on stderr)
pub struct ConsolePrinter {
    colored: bool,
    interactive: bool,
}

impl ConsolePrinter {
    pub fn new(colored: bool) -> Self {
        Self {
            colored,
            interactive: false,
        }
    }

    /// Colors and spinners only when stdout is a terminal.
    pub fn detect() -> Self {
        let interactive = std::io::stdout().is_terminal();
        Self {
            colored: interactive,
            interactive,
        }
    }

    fn render(&self, kind: MessageKind, text: &str) -> String {
        if !self.colored {
            return match kind {
                MessageKind::Success => format!("✓ {}", text),
                MessageKind::Error => format!("✗ {}", text),
                MessageKind::Warning => format!("⚠ {}", text),
                MessageKind::Info => format!("ℹ {}", text),
                MessageKind::Boxed => frame(text),
                _ => text.to_string(),
            };
        }

        match kind {
            MessageKind::Title => text.color(PURPLE).bold().to_string(),
            MessageKind::Subtitle => text.color(LIGHT_PURPLE).to_string(),
            MessageKind::Plain => text.to_string(),
            MessageKind::Info => format!("{} {}", "ℹ".blue().bold(), text.bright_black()),
            MessageKind::Success => format!("{} {}", "✓".green().bold(), text.green()),
            MessageKind::Warning => format!("{} {}", "⚠".yellow().bold(), text.yellow()),
            MessageKind::Error => format!("{} {}", "✗".red().bold(), text.red()),
            MessageKind::Command => text.green().bold().to_string(),
            MessageKind::Boxed => frame(text).color(PURPLE).to_string(),
        }
    }
}

impl Printer for ConsolePrinter {
    fn print(&self, kind: MessageKind, text: &str) {
        let rendered = self.render(kind, text);
        if kind == MessageKind::Error {
            eprintln!("{}", rendered);
        } else {
            println!("{}", rendered);
        }
    }

    fn progress(&self, message: &str) -> Option<Spinner> {
        if self.interactive {
            Some(Spinner::new(message))
        } else {
            self.print(MessageKind::Info, message);
            None
        }
    }
}

/// Draws a rounded frame around `text`.
fn frame(text: &str) -> String {
    let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = format!("╭{}╮\n", "─".repeat(width + 4));
    for line in text.lines() {
        let pad = width - line.chars().count();
        out.push_str(&format!("│  {}{}  │\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("╰{}╯", "─".repeat(width + 4)));
    out
}
