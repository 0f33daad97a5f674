//! Config file read/write.

use crate::schema::TutorConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the TutorForge config directory.
/// Priority: `TUTORFORGE_CONFIG_DIR` env > `~/.tutorforge/`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TUTORFORGE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".tutorforge"),
        None => PathBuf::from(".tutorforge"),
    }
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist (first run).
pub async fn load_config(path: &Path) -> Result<TutorConfig> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(TutorConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if raw.trim().is_empty() {
        return Ok(TutorConfig::default());
    }

    let config: TutorConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Write config to disk atomically (write to temp file, rename).
pub async fn write_config(config: &TutorConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    let tmp_path = path.with_extension("yaml.tmp");
    fs::write(&tmp_path, yaml.as_bytes())
        .await
        .with_context(|| format!("Failed to write temp config: {}", tmp_path.display()))?;

    fs::rename(&tmp_path, path)
        .await
        .with_context(|| format!("Failed to rename temp config to: {}", path.display()))?;

    info!(path = %path.display(), "Wrote config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ChatConfig;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("config.yaml")).await.unwrap();
        assert_eq!(cfg, TutorConfig::default());
    }

    #[tokio::test]
    async fn write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(&dir.path().join("nested"));
        let mut cfg = TutorConfig::default();
        cfg.chat = Some(ChatConfig {
            model: Some("deepseek-chat".into()),
            max_tokens: Some(300),
            ..Default::default()
        });
        write_config(&cfg, &path).await.unwrap();
        assert_eq!(load_config(&path).await.unwrap(), cfg);
        assert!(!path.with_extension("yaml.tmp").exists());
    }

    #[tokio::test]
    async fn invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        tokio::fs::write(&path, "chat: [unclosed").await.unwrap();
        let err = load_config(&path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config YAML"));
    }
}
