use rand::{Rng, distr::Alphanumeric};

pub const PERSON_URN_PREFIX: &str = "urn:li:person:";

const STATE_LENGTH: usize = 32;
const REDACTED_PREFIX_LENGTH: usize = 8;

/// Random opaque value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

/// Keeps the first few characters of a token and masks the rest.
pub fn redact_token(token: &str) -> String {
    let visible: String = token.chars().take(REDACTED_PREFIX_LENGTH).collect();
    if visible.len() == token.len() {
        return "***".to_string();
    }
    format!("{visible}...")
}

/// Actor URN for a member subject id.
pub fn person_urn(subject: &str) -> String {
    format!("{PERSON_URN_PREFIX}{subject}")
}
