//! Log Redaction Layer
//!
//! Scrubs API keys, bearer tokens, request signatures and phone numbers from
//! strings prior to logging.

use once_cell::sync::Lazy;
use regex::Regex;

static TELEPHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3,4}[-.\s]?\d{4}").unwrap()
});
static API_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(sk-[a-zA-Z0-9]{16,})|(Bearer\s+[a-zA-Z0-9\-\._~+/]+=*)").unwrap()
});
static SIGN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)("?\bsign\b"?\s*[:=]\s*"?)[0-9a-f]{32}"#).unwrap());

/// Redacts API keys, bearer tokens and request signatures.
pub fn redact_secrets(input: &str) -> String {
    let redacted = API_KEY_RE.replace_all(input, "[REDACTED_TOKEN]");
    SIGN_RE
        .replace_all(&redacted, "${1}[REDACTED_SIGN]")
        .into_owned()
}

/// Redacts secrets and phone numbers. Meant for error text, not question text.
pub fn redact_sensitive_data(input: &str) -> String {
    TELEPHONE_RE
        .replace_all(&redact_secrets(input), "[REDACTED_PHONE]")
        .into_owned()
}

/// First `max_chars` characters of `text` with secrets redacted, for debug
/// previews. Digit runs are kept so arithmetic questions stay readable.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut clipped: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        clipped.push('…');
    }
    redact_secrets(&clipped)
}
