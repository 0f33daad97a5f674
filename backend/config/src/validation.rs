//! Config validation: field checks with user-friendly error messages.

use crate::schema::TutorConfig;
use std::path::Path;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &TutorConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_ocr(config, &mut report);
    validate_chat(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_url(report: &mut ValidationReport, path: &str, url: &str) {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        report.error(path, format!("'{}' is not an http(s) URL", url));
    }
}

fn warn_missing_file(report: &mut ValidationReport, path: &str, file: Option<&Path>) {
    if let Some(file) = file {
        if !file.exists() {
            report.warn(path, format!("credential file {} does not exist", file.display()));
        }
    }
}

fn validate_ocr(config: &TutorConfig, report: &mut ValidationReport) {
    validate_url(report, "ocr.baseUrl", config.ocr_base_url());
    let (service, action, version) = config.ocr_route();
    for (path, segment) in [
        ("ocr.service", service),
        ("ocr.action", action),
        ("ocr.version", version),
    ] {
        if segment.trim().is_empty() || segment.contains('/') {
            report.error(path, "route segment must be non-empty and contain no '/'");
        }
    }

    let Some(ocr) = &config.ocr else { return };
    match (&ocr.app_id, &ocr.app_secret) {
        (Some(app_id), Some(app_secret)) => {
            if app_id.trim().is_empty() || app_secret.trim().is_empty() {
                report.error("ocr.appId", "appId and appSecret must both be non-empty");
            }
        }
        (None, None) => warn_missing_file(
            report,
            "ocr.credentialFile",
            ocr.credential_file.as_deref(),
        ),
        _ => report.error("ocr.appId", "appId and appSecret must be set together"),
    }
}

fn validate_chat(config: &TutorConfig, report: &mut ValidationReport) {
    validate_url(report, "chat.baseUrl", config.chat_base_url());
    if config.chat_model().trim().is_empty() {
        report.error("chat.model", "model must not be empty");
    }
    let temperature = config.temperature();
    if !(0.0..=2.0).contains(&temperature) {
        report.error(
            "chat.temperature",
            format!("temperature {} is outside 0.0..=2.0", temperature),
        );
    }
    if config.max_tokens() == 0 {
        report.error("chat.maxTokens", "maxTokens must be greater than zero");
    }

    let Some(chat) = &config.chat else { return };
    if chat.api_key.is_none() {
        warn_missing_file(report, "chat.apiKeyFile", chat.api_key_file.as_deref());
    }
}

fn validate_logging(config: &TutorConfig, report: &mut ValidationReport) {
    let level = config.log_level().to_ascii_lowercase();
    if !["trace", "debug", "info", "warn", "error"].contains(&level.as_str()) {
        report.warn(
            "logging.level",
            format!("'{}' is not a plain level; treated as a filter directive", level),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ChatConfig, OcrConfig};

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&TutorConfig::default()).is_valid());
    }

    #[test]
    fn rejects_out_of_range_temperature_and_zero_tokens() {
        let cfg = TutorConfig {
            chat: Some(ChatConfig {
                temperature: Some(3.5),
                max_tokens: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = validate(&cfg);
        let paths: Vec<_> = report.errors.iter().map(|e| e.path.as_str()).collect();
        assert!(paths.contains(&"chat.temperature"));
        assert!(paths.contains(&"chat.maxTokens"));
    }

    #[test]
    fn rejects_non_http_url() {
        let cfg = TutorConfig {
            ocr: Some(OcrConfig {
                base_url: Some("ftp://gate".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(!validate(&cfg).is_valid());
    }

    #[test]
    fn half_inline_ocr_credentials_are_an_error() {
        let cfg = TutorConfig {
            ocr: Some(OcrConfig {
                app_id: Some("id".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = validate(&cfg);
        assert!(report.errors.iter().any(|e| e.path == "ocr.appId"));
    }

    #[test]
    fn warns_on_missing_credential_file() {
        let cfg = TutorConfig {
            chat: Some(ChatConfig {
                api_key_file: Some("/definitely/not/here/api.key".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = validate(&cfg);
        assert!(report.is_valid());
        assert!(report.warnings.iter().any(|w| w.path == "chat.apiKeyFile"));
    }

    #[test]
    fn blank_inline_ocr_credentials_are_an_error() {
        let cfg = TutorConfig {
            ocr: Some(OcrConfig {
                app_id: Some("  ".into()),
                app_secret: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = validate(&cfg);
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|e| e.path == "ocr.appId"));
    }
}
