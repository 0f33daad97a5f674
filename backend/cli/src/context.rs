//! Runtime context shared by the commands: the config directory, the loaded
//! config and builders for the remote clients.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use tutorforge_config::{resolve_api_key, resolve_ocr_credentials, TutorConfig};
use tutorforge_planner::providers::DeepSeekProvider;
use tutorforge_planner::{ChatSettings, QaSession};
use tutorforge_understanding::{OcrClient, OcrEndpoint};

pub struct AppContext {
    pub config_dir: PathBuf,
    pub config: TutorConfig,
}

impl AppContext {
    pub fn new(config_dir: PathBuf, config: TutorConfig) -> Self {
        Self { config_dir, config }
    }

    pub fn ocr_endpoint(&self) -> OcrEndpoint {
        let (service, action, version) = self.config.ocr_route();
        OcrEndpoint {
            base_url: self.config.ocr_base_url().to_string(),
            service: service.to_string(),
            action: action.to_string(),
            version: version.to_string(),
        }
    }

    pub fn chat_settings(&self) -> ChatSettings {
        ChatSettings {
            model: self.config.chat_model().to_string(),
            temperature: self.config.temperature(),
            max_tokens: self.config.max_tokens(),
        }
    }

    /// Build an OCR client. Credentials are read now, not at startup.
    pub async fn ocr_client(&self) -> Result<OcrClient> {
        let credentials = resolve_ocr_credentials(&self.config, &self.config_dir).await?;
        Ok(OcrClient::new(credentials).with_endpoint(self.ocr_endpoint()))
    }

    pub async fn qa_session(&self) -> Result<QaSession> {
        let api_key = resolve_api_key(&self.config, &self.config_dir).await?;
        let provider =
            DeepSeekProvider::new(api_key).with_base_url(self.config.chat_base_url());
        Ok(QaSession::new(Arc::new(provider), self.chat_settings()))
    }

    pub fn print_dir(&self) -> PathBuf {
        self.config.print_dir()
    }
}
