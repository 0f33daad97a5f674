//! `tutorforge-config`: TutorForge configuration management.
//!
//! Provides:
//! - Typed config schema (OCR endpoint, chat endpoint, logging, records)
//! - YAML read/write
//! - `${ENV_VAR}` substitution
//! - Default value application
//! - Validation and redaction for safe display
//! - Credential file loading

pub mod credentials;
pub mod defaults;
pub mod env;
pub mod io;
pub mod redact;
pub mod schema;
pub mod validation;

pub use credentials::{
    api_key_path, ocr_key_path, parse_ocr_credentials, read_api_key, read_ocr_credentials,
    resolve_api_key, resolve_ocr_credentials,
};
pub use defaults::apply_all_defaults;
pub use env::{collect_referenced_vars, resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config, write_config};
pub use redact::redact;
pub use schema::TutorConfig;
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::Path;

/// Load, apply env substitution, apply defaults and validate the config in `config_dir`.
///
/// This is the main entry point for loading a config at runtime. Validation
/// warnings are logged; validation errors fail the load.
pub async fn load_and_prepare(config_dir: &Path) -> Result<TutorConfig> {
    let raw_config = load_config(&config_file_path(config_dir)).await?;

    let value: Value =
        serde_json::to_value(&raw_config).context("Failed to serialize config for processing")?;
    let value = resolve_env_vars(&value).context("Failed to resolve env vars in config")?;
    let config: TutorConfig =
        serde_json::from_value(value).context("Failed to deserialize config after processing")?;

    let config = apply_all_defaults(config, config_dir);

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    if !report.is_valid() {
        for error in &report.errors {
            tracing::error!(path = %error.path, message = %error.message, "Config error");
        }
        bail!("{} (and {} more)", report.errors[0], report.errors.len() - 1);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prepares_defaults_for_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_and_prepare(dir.path()).await.unwrap();
        assert_eq!(cfg.chat_model(), "deepseek-chat");
        assert_eq!(api_key_path(&cfg, Path::new("/elsewhere")), dir.path().join("api.key"));
    }

    #[tokio::test]
    async fn invalid_values_fail_the_load() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(
            config_file_path(dir.path()),
            "chat:\n  temperature: 9.0\n",
        )
        .await
        .unwrap();
        let err = load_and_prepare(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("chat.temperature"));
    }
}
