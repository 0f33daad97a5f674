//! CLI Doctor Command
//!
//! Checks that the config loads and both credential sources are usable.

use std::path::Path;

use anyhow::{bail, Result};

use tutorforge_config::{
    collect_referenced_vars, config_file_path, load_config, resolve_api_key,
    resolve_ocr_credentials, validate, TutorConfig,
};

use crate::terminal_output::{heading, note_error, note_success, note_warn};

/// Executes the full diagnosis. Fails when any check fails.
pub async fn run(config_dir: &Path, loaded: &Result<TutorConfig>) -> Result<()> {
    heading("TutorForge doctor");
    println!();

    // An unreadable file is reported by the config check below.
    for (var, is_set) in referenced_env_vars(config_dir).await.unwrap_or_default() {
        if is_set {
            note_success(&format!("${{{var}}} is set"));
        } else {
            note_error(&format!("${{{var}}} is referenced in the config but not set"));
        }
    }

    let config = match loaded {
        Ok(config) => {
            note_success(&format!(
                "Config loaded from {}",
                config_file_path(config_dir).display()
            ));
            config
        }
        Err(e) => {
            note_error(&format!("Config: {e:#}"));
            bail!("doctor found problems");
        }
    };

    let mut healthy = true;

    for warning in validate(config).warnings {
        note_warn(&warning.to_string());
    }

    match resolve_ocr_credentials(config, config_dir).await {
        Ok(creds) => note_success(&format!("OCR credentials found (appId {})", creds.app_id)),
        Err(e) => {
            note_error(&e.to_string());
            healthy = false;
        }
    }

    match resolve_api_key(config, config_dir).await {
        Ok(_) => note_success("Chat API key found"),
        Err(e) => {
            note_error(&e.to_string());
            healthy = false;
        }
    }

    println!();
    if healthy {
        note_success("All checks passed.");
        Ok(())
    } else {
        bail!("doctor found problems")
    }
}

/// Env vars the raw config file references, with whether each is set.
async fn referenced_env_vars(config_dir: &Path) -> Result<Vec<(String, bool)>> {
    let raw = load_config(&config_file_path(config_dir)).await?;
    let value = serde_json::to_value(&raw)?;
    Ok(collect_referenced_vars(&value)
        .into_iter()
        .map(|var| {
            let is_set = std::env::var_os(&var).is_some();
            (var, is_set)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorforge_config::load_and_prepare;

    #[tokio::test]
    async fn passes_with_both_key_files() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("ocr.key"), "app:secret").await.unwrap();
        tokio::fs::write(dir.path().join("api.key"), "sk-key").await.unwrap();
        let loaded = load_and_prepare(dir.path()).await;
        assert!(run(dir.path(), &loaded).await.is_ok());
    }

    #[tokio::test]
    async fn fails_without_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_and_prepare(dir.path()).await;
        assert!(run(dir.path(), &loaded).await.is_err());
    }

    #[tokio::test]
    async fn fails_on_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(config_file_path(dir.path()), "chat:\n  maxTokens: 0\n")
            .await
            .unwrap();
        let loaded = load_and_prepare(dir.path()).await;
        assert!(run(dir.path(), &loaded).await.is_err());
    }

    #[tokio::test]
    async fn lists_referenced_env_vars() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(
            config_file_path(dir.path()),
            "chat:\n  apiKey: ${TUTORFORGE_UNSET_DOCTOR_KEY}\n  baseUrl: https://x/${PATH}\n",
        )
        .await
        .unwrap();
        let vars = referenced_env_vars(dir.path()).await.unwrap();
        assert_eq!(
            vars,
            vec![
                ("PATH".to_string(), true),
                ("TUTORFORGE_UNSET_DOCTOR_KEY".to_string(), false),
            ]
        );

        let loaded = load_and_prepare(dir.path()).await;
        assert!(run(dir.path(), &loaded).await.is_err());
    }
}
