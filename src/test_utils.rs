//! Test utilities
//!
//! Shared helpers for unit and integration tests: a printer that records
//! output, config fixtures, and TLS setup for `reqwest`.

use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::ui::{MessageKind, Printer};

/// Install the rustls crypto provider in tests.
///
/// reqwest 0.13 + rustls-no-provider needs an explicit provider; the binary
/// installs it in main.rs. Calling this more than once is harmless.
pub fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// A `Config` for tests.
pub fn test_config(api_key: &str, model: &str) -> Config {
    Config {
        api_key: api_key.to_string(),
        model: model.to_string(),
    }
}

/// Serialized form of [`test_config`], as it would be read from disk.
pub fn test_config_json(api_key: &str, model: &str) -> String {
    serde_json::to_string(&test_config(api_key, model)).unwrap()
}

/// Printer that keeps every message instead of writing to the terminal.
#[derive(Default)]
pub struct RecordingPrinter {
    messages: Mutex<Vec<(MessageKind, String)>>,
}

impl RecordingPrinter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<(MessageKind, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Texts printed with the given kind, in order.
    pub fn texts(&self, kind: MessageKind) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, text)| text)
            .collect()
    }

    /// `true` if any printed text contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages()
            .iter()
            .any(|(_, text)| text.contains(needle))
    }

    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl Printer for RecordingPrinter {
    fn print(&self, kind: MessageKind, text: &str) {
        self.messages.lock().unwrap().push((kind, text.to_string()));
    }
}
