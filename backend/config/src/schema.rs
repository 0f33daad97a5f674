//! TutorForge configuration schema.
//!
//! Every field is optional in the YAML file; [`crate::defaults`] fills the
//! gaps after environment substitution. The accessor methods fall back to the
//! same defaults, so a config that skipped the defaults pass is still usable.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::defaults::{
    DEFAULT_CHAT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_LOG_LEVEL, DEFAULT_MAX_TOKENS,
    DEFAULT_OCR_ACTION, DEFAULT_OCR_BASE_URL, DEFAULT_OCR_SERVICE, DEFAULT_OCR_VERSION,
    DEFAULT_TEMPERATURE,
};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorConfig {
    /// OCR provider endpoint and credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr: Option<OcrConfig>,

    /// Chat-completion endpoint and sampling parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat: Option<ChatConfig>,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    /// Record save/print settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<RecordsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// File holding `appId:appSecret`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_file: Option<PathBuf>,
    /// Inline app id; takes precedence over the credential file when both
    /// `app_id` and `app_secret` are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_secret: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// File holding the bearer API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_file: Option<PathBuf>,
    /// Inline API key; takes precedence over `api_key_file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Minimum level (trace, debug, info, warn, error)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Directory for daily-rolling JSON log files; console only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsConfig {
    /// Where the temporary print file is written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_dir: Option<PathBuf>,
}

impl TutorConfig {
    pub fn ocr_base_url(&self) -> &str {
        self.ocr
            .as_ref()
            .and_then(|o| o.base_url.as_deref())
            .unwrap_or(DEFAULT_OCR_BASE_URL)
    }

    /// `(service, action, version)` segments of the OCR route.
    pub fn ocr_route(&self) -> (&str, &str, &str) {
        let ocr = self.ocr.as_ref();
        (
            ocr.and_then(|o| o.service.as_deref()).unwrap_or(DEFAULT_OCR_SERVICE),
            ocr.and_then(|o| o.action.as_deref()).unwrap_or(DEFAULT_OCR_ACTION),
            ocr.and_then(|o| o.version.as_deref()).unwrap_or(DEFAULT_OCR_VERSION),
        )
    }

    pub fn chat_base_url(&self) -> &str {
        self.chat
            .as_ref()
            .and_then(|c| c.base_url.as_deref())
            .unwrap_or(DEFAULT_CHAT_BASE_URL)
    }

    pub fn chat_model(&self) -> &str {
        self.chat
            .as_ref()
            .and_then(|c| c.model.as_deref())
            .unwrap_or(DEFAULT_CHAT_MODEL)
    }

    pub fn temperature(&self) -> f32 {
        self.chat
            .as_ref()
            .and_then(|c| c.temperature)
            .unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn max_tokens(&self) -> u32 {
        self.chat
            .as_ref()
            .and_then(|c| c.max_tokens)
            .unwrap_or(DEFAULT_MAX_TOKENS)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_dir(&self) -> Option<&PathBuf> {
        self.logging.as_ref().and_then(|l| l.dir.as_ref())
    }

    pub fn print_dir(&self) -> PathBuf {
        self.records
            .as_ref()
            .and_then(|r| r.print_dir.clone())
            .unwrap_or_else(std::env::temp_dir)
    }
}
