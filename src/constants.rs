//! Global constants

/// Remote API constants
pub mod llm {
    /// Anthropic Messages API endpoint
    pub const API_URL: &str = "https://api.anthropic.com/v1/messages";

    /// Value sent in the `anthropic-version` header
    pub const API_VERSION: &str = "2023-06-01";

    /// Output cap for a single-line commit message
    pub const MAX_TOKENS: u32 = 100;
}

/// Config file location, relative to the user's home directory
pub mod config {
    pub const DIR_NAME: &str = ".claude-commit";
    pub const FILE_NAME: &str = "config.json";
}

/// UI constants
pub mod ui {
    /// Replaces the middle of a long API key
    pub const KEY_MASK: &str = "****";

    /// Replaces the whole of a short API key
    pub const FULL_KEY_MASK: &str = "********";

    /// Keys up to this many characters are fully masked
    pub const MIN_UNMASKED_KEY_LEN: usize = 8;
}
