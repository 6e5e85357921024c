//! Supported Claude models

/// Model used when none has been configured
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-0";

/// Supported model identifiers, in display order
pub const AVAILABLE_MODELS: &[&str] = &[
    "claude-opus-4-0",
    "claude-sonnet-4-0",
    "claude-3-7-sonnet-latest",
    "claude-3-5-sonnet-latest",
    "claude-3-5-haiku-latest",
    "claude-3-opus-latest",
];

/// Returns `true` if `model` is one of [`AVAILABLE_MODELS`].
pub fn is_known_model(model: &str) -> bool {
    AVAILABLE_MODELS.contains(&model)
}
