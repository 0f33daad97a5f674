//! `config`: show the effective configuration, or write a starter file.

use std::path::Path;

use anyhow::{bail, Context, Result};

use tutorforge_config::{apply_all_defaults, config_file_path, redact, write_config, TutorConfig};

use crate::context::AppContext;
use crate::terminal_output::{dim, note_success};

/// Effective config as YAML with secrets masked.
pub fn render_redacted(config: &TutorConfig) -> Result<String> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;
    serde_yaml::to_string(&redact(&value)).context("Failed to render config as YAML")
}

pub fn run_show(ctx: &AppContext) -> Result<()> {
    println!("{}", dim(&format!("# {}", config_file_path(&ctx.config_dir).display())));
    print!("{}", render_redacted(&ctx.config)?);
    Ok(())
}

/// Defaults with the credential paths left implicit, so the file stays portable.
fn starter_config(config_dir: &Path) -> TutorConfig {
    let mut config = apply_all_defaults(TutorConfig::default(), config_dir);
    if let Some(ocr) = config.ocr.as_mut() {
        ocr.credential_file = None;
    }
    if let Some(chat) = config.chat.as_mut() {
        chat.api_key_file = None;
    }
    config
}

pub async fn run_init(config_dir: &Path) -> Result<()> {
    let path = config_file_path(config_dir);
    if tokio::fs::try_exists(&path).await.unwrap_or(false) {
        bail!("{} already exists", path.display());
    }
    write_config(&starter_config(config_dir), &path).await?;
    note_success(&format!("Wrote {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorforge_config::load_and_prepare;
    use tutorforge_config::schema::ChatConfig;

    #[test]
    fn secrets_are_masked() {
        let config = TutorConfig {
            chat: Some(ChatConfig {
                api_key: Some("sk-0123456789abcdef".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let yaml = render_redacted(&config).unwrap();
        assert!(yaml.contains("apiKey"));
        assert!(!yaml.contains("sk-0123456789abcdef"));
    }

    #[tokio::test]
    async fn init_writes_loadable_file_once() {
        let dir = tempfile::tempdir().unwrap();
        run_init(dir.path()).await.unwrap();

        let raw = tokio::fs::read_to_string(config_file_path(dir.path())).await.unwrap();
        assert!(raw.contains("deepseek-chat"));
        assert!(!raw.contains("credentialFile"));

        let loaded = load_and_prepare(dir.path()).await.unwrap();
        assert_eq!(loaded.max_tokens(), 600);

        assert!(run_init(dir.path()).await.is_err());
    }
}
