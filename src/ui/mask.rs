use crate::constants::ui::{FULL_KEY_MASK, KEY_MASK, MIN_UNMASKED_KEY_LEN};

/// Masks most of an API key for display.
///
/// Keys of 8 characters or fewer are replaced entirely; longer keys keep
/// their first and last 4 characters. Works on chars, so multibyte input is safe.
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= MIN_UNMASKED_KEY_LEN {
        return FULL_KEY_MASK.to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, KEY_MASK, tail)
}
