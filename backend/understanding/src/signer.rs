//! Request signing for the OCR gateway.
//!
//! The gateway authenticates each call with four headers: `app_id`,
//! `timestamp` (epoch millis), `salt` (8 random letters) and `sign`, the
//! lowercase hex MD5 of `app_id + app_secret + salt + timestamp` in UTF-8.
//! The byte layout is fixed by the provider.

use md5::{Digest, Md5};
use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue};

const SALT_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SALT_LEN: usize = 8;

/// Compute the request signature.
pub fn sign(app_id: &str, app_secret: &str, timestamp_millis: &str, salt: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(app_id.as_bytes());
    hasher.update(app_secret.as_bytes());
    hasher.update(salt.as_bytes());
    hasher.update(timestamp_millis.as_bytes());
    hex::encode(hasher.finalize())
}

/// Eight distinct ASCII letters, freshly sampled per request.
pub fn generate_salt() -> String {
    let mut rng = rand::thread_rng();
    SALT_ALPHABET
        .choose_multiple(&mut rng, SALT_LEN)
        .map(|b| *b as char)
        .collect()
}

/// Current wall-clock time in epoch milliseconds, as sent on the wire.
pub fn timestamp_millis() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// The four authentication headers for one OCR request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub app_id: String,
    pub timestamp: String,
    pub salt: String,
    pub sign: String,
}

impl SignedHeaders {
    /// Sign with the current time and a fresh salt.
    pub fn new(app_id: &str, app_secret: &str) -> Self {
        Self::with(app_id, app_secret, timestamp_millis(), generate_salt())
    }

    /// Sign with a caller-supplied timestamp and salt.
    pub fn with(
        app_id: &str,
        app_secret: &str,
        timestamp: impl Into<String>,
        salt: impl Into<String>,
    ) -> Self {
        let timestamp = timestamp.into();
        let salt = salt.into();
        let sign = sign(app_id, app_secret, &timestamp, &salt);
        Self {
            app_id: app_id.to_string(),
            timestamp,
            salt,
            sign,
        }
    }

    pub fn to_header_map(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert("app_id", HeaderValue::from_str(&self.app_id)?);
        headers.insert("timestamp", HeaderValue::from_str(&self.timestamp)?);
        headers.insert("salt", HeaderValue::from_str(&self.salt)?);
        headers.insert("sign", HeaderValue::from_str(&self.sign)?);
        Ok(headers)
    }
}
