//! Secret inputs: the OCR `appId:appSecret` pair and the chat API key.
//!
//! Credentials are read at call time, never cached, so edits to the key files
//! take effect on the next request.

use std::path::{Path, PathBuf};

use tokio::fs;
use tutorforge_core::{OcrCredentials, TutorError};

use crate::defaults::{API_KEY_FILE, OCR_KEY_FILE};
use crate::io::config_file_path;
use crate::schema::TutorConfig;

fn read_error(path: &Path, reason: impl Into<String>) -> TutorError {
    TutorError::CredentialRead {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Parse the contents of an OCR key file. Splits at the first `:`.
pub fn parse_ocr_credentials(raw: &str, path: &Path) -> Result<OcrCredentials, TutorError> {
    let (app_id, app_secret) = raw
        .trim()
        .split_once(':')
        .ok_or_else(|| read_error(path, "expected the form appId:appSecret"))?;
    let (app_id, app_secret) = (app_id.trim(), app_secret.trim());
    if app_id.is_empty() || app_secret.is_empty() {
        return Err(read_error(path, "appId and appSecret must both be non-empty"));
    }
    Ok(OcrCredentials {
        app_id: app_id.to_string(),
        app_secret: app_secret.to_string(),
    })
}

pub async fn read_ocr_credentials(path: &Path) -> Result<OcrCredentials, TutorError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| read_error(path, e.to_string()))?;
    parse_ocr_credentials(&raw, path)
}

pub async fn read_api_key(path: &Path) -> Result<String, TutorError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| read_error(path, e.to_string()))?;
    let key = raw.trim();
    if key.is_empty() {
        return Err(read_error(path, "API key file is empty"));
    }
    Ok(key.to_string())
}

/// Path of the OCR key file for this config, relative to `config_dir` when unset.
pub fn ocr_key_path(config: &TutorConfig, config_dir: &Path) -> PathBuf {
    config
        .ocr
        .as_ref()
        .and_then(|o| o.credential_file.clone())
        .unwrap_or_else(|| config_dir.join(OCR_KEY_FILE))
}

pub fn api_key_path(config: &TutorConfig, config_dir: &Path) -> PathBuf {
    config
        .chat
        .as_ref()
        .and_then(|c| c.api_key_file.clone())
        .unwrap_or_else(|| config_dir.join(API_KEY_FILE))
}

/// OCR credentials: inline config values first, then the key file.
pub async fn resolve_ocr_credentials(
    config: &TutorConfig,
    config_dir: &Path,
) -> Result<OcrCredentials, TutorError> {
    if let Some(ocr) = &config.ocr {
        if let (Some(app_id), Some(app_secret)) = (&ocr.app_id, &ocr.app_secret) {
            let (app_id, app_secret) = (app_id.trim(), app_secret.trim());
            if app_id.is_empty() || app_secret.is_empty() {
                return Err(read_error(
                    &config_file_path(config_dir),
                    "ocr.appId and ocr.appSecret must both be non-empty",
                ));
            }
            return Ok(OcrCredentials {
                app_id: app_id.to_string(),
                app_secret: app_secret.to_string(),
            });
        }
    }
    read_ocr_credentials(&ocr_key_path(config, config_dir)).await
}

/// Chat API key: inline config value first, then the key file.
pub async fn resolve_api_key(
    config: &TutorConfig,
    config_dir: &Path,
) -> Result<String, TutorError> {
    if let Some(key) = config.chat.as_ref().and_then(|c| c.api_key.as_deref()) {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }
    read_api_key(&api_key_path(config, config_dir)).await
}
