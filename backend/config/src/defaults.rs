//! Config defaults: applies sensible default values to parsed config.

use std::path::Path;

use crate::schema::{ChatConfig, LoggingConfig, OcrConfig, TutorConfig};

pub const DEFAULT_OCR_BASE_URL: &str = "https://gate.ai.xdf.cn";
pub const DEFAULT_OCR_SERVICE: &str = "general";
pub const DEFAULT_OCR_ACTION: &str = "ocr_general";
pub const DEFAULT_OCR_VERSION: &str = "v2";

pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_CHAT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_MAX_TOKENS: u32 = 600;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Credential file names, resolved inside the config directory.
pub const OCR_KEY_FILE: &str = "ocr.key";
pub const API_KEY_FILE: &str = "api.key";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: TutorConfig, config_dir: &Path) -> TutorConfig {
    let config = apply_ocr_defaults(config, config_dir);
    let config = apply_chat_defaults(config, config_dir);
    apply_logging_defaults(config)
}

fn apply_ocr_defaults(mut config: TutorConfig, config_dir: &Path) -> TutorConfig {
    let ocr = config.ocr.get_or_insert_with(OcrConfig::default);
    ocr.base_url.get_or_insert_with(|| DEFAULT_OCR_BASE_URL.to_string());
    ocr.service.get_or_insert_with(|| DEFAULT_OCR_SERVICE.to_string());
    ocr.action.get_or_insert_with(|| DEFAULT_OCR_ACTION.to_string());
    ocr.version.get_or_insert_with(|| DEFAULT_OCR_VERSION.to_string());
    ocr.credential_file
        .get_or_insert_with(|| config_dir.join(OCR_KEY_FILE));
    config
}

fn apply_chat_defaults(mut config: TutorConfig, config_dir: &Path) -> TutorConfig {
    let chat = config.chat.get_or_insert_with(ChatConfig::default);
    chat.base_url.get_or_insert_with(|| DEFAULT_CHAT_BASE_URL.to_string());
    chat.model.get_or_insert_with(|| DEFAULT_CHAT_MODEL.to_string());
    chat.temperature.get_or_insert(DEFAULT_TEMPERATURE);
    chat.max_tokens.get_or_insert(DEFAULT_MAX_TOKENS);
    chat.api_key_file
        .get_or_insert_with(|| config_dir.join(API_KEY_FILE));
    config
}

fn apply_logging_defaults(mut config: TutorConfig) -> TutorConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    logging.level.get_or_insert_with(|| DEFAULT_LOG_LEVEL.to_string());
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn fills_credential_paths_from_config_dir() {
        let cfg = apply_all_defaults(TutorConfig::default(), Path::new("/home/kid/.tutorforge"));
        assert_eq!(
            cfg.ocr.as_ref().unwrap().credential_file,
            Some(PathBuf::from("/home/kid/.tutorforge/ocr.key"))
        );
        assert_eq!(
            cfg.chat.as_ref().unwrap().api_key_file,
            Some(PathBuf::from("/home/kid/.tutorforge/api.key"))
        );
    }

    #[test]
    fn does_not_override_user_values() {
        let mut cfg = TutorConfig::default();
        cfg.chat = Some(ChatConfig {
            temperature: Some(0.2),
            model: Some("deepseek-reasoner".into()),
            ..Default::default()
        });
        let cfg = apply_all_defaults(cfg, Path::new("."));
        assert_eq!(cfg.temperature(), 0.2);
        assert_eq!(cfg.chat_model(), "deepseek-reasoner");
        assert_eq!(cfg.max_tokens(), DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn applies_log_level() {
        let cfg = apply_all_defaults(TutorConfig::default(), Path::new("."));
        assert_eq!(
            cfg.logging.unwrap().level.as_deref(),
            Some(DEFAULT_LOG_LEVEL)
        );
    }
}
