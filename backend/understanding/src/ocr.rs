//! Optical Character Recognition (OCR)
//!
//! Sends base64-encoded images to the signed OCR gateway and flattens the
//! `result.words_result` list into newline-separated text.

use std::path::Path;
use std::time::Instant;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use tutorforge_core::{OcrCredentials, OcrEngine, TutorError};

use crate::signer::SignedHeaders;

/// Gateway address and the `{service}/{action}/{version}` route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrEndpoint {
    pub base_url: String,
    pub service: String,
    pub action: String,
    pub version: String,
}

impl Default for OcrEndpoint {
    fn default() -> Self {
        Self {
            base_url: "https://gate.ai.xdf.cn".to_string(),
            service: "general".to_string(),
            action: "ocr_general".to_string(),
            version: "v2".to_string(),
        }
    }
}

impl OcrEndpoint {
    pub fn url(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.service,
            self.action,
            self.version
        )
    }
}

#[derive(Serialize)]
struct OcrRequest<'a> {
    img_base64: &'a str,
}

/// OCR gateway client.
pub struct OcrClient {
    client: Client,
    credentials: OcrCredentials,
    endpoint: OcrEndpoint,
}

impl OcrClient {
    pub fn new(credentials: OcrCredentials) -> Self {
        Self {
            client: Client::new(),
            credentials,
            endpoint: OcrEndpoint::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: OcrEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Read an image file and recognize it.
    pub async fn recognize_file(&self, path: &Path) -> Result<String, TutorError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| TutorError::Ocr(format!("cannot read image {}: {}", path.display(), e)))?;
        self.recognize_bytes(&bytes).await
    }

    pub async fn recognize_bytes(&self, image: &[u8]) -> Result<String, TutorError> {
        let start = Instant::now();
        let encoded = STANDARD.encode(image);
        let signed = SignedHeaders::new(&self.credentials.app_id, &self.credentials.app_secret);
        let headers = signed
            .to_header_map()
            .map_err(|e| TutorError::Ocr(format!("invalid credential characters: {}", e)))?;

        let url = self.endpoint.url();
        debug!(url = %url, image_bytes = image.len(), "Sending OCR request");

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&OcrRequest {
                img_base64: &encoded,
            })
            .send()
            .await
            .map_err(|e| TutorError::Ocr(format!("OCR HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TutorError::Ocr(format!("failed to read OCR response: {}", e)))?;
        if !status.is_success() {
            return Err(TutorError::Ocr(format!(
                "OCR service returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let text = parse_ocr_response(&body)?;
        info!(
            chars = text.chars().count(),
            latency_ms = start.elapsed().as_millis() as u64,
            "OCR recognized text"
        );
        Ok(text)
    }
}

#[async_trait]
impl OcrEngine for OcrClient {
    async fn recognize(&self, image: &[u8]) -> Result<String, TutorError> {
        self.recognize_bytes(image).await
    }
}

/// Extract `result.words_result[*].words`, joined with newlines in array order.
///
/// Entries without a string `words` field are skipped; a missing or
/// non-array `words_result` is an error.
pub fn parse_ocr_response(body: &str) -> Result<String, TutorError> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| TutorError::Ocr(format!("OCR response is not JSON: {}", e)))?;

    let entries = json
        .pointer("/result/words_result")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            TutorError::Ocr(format!(
                "OCR response has no result.words_result list: {}",
                clip(body, 200)
            ))
        })?;

    let lines: Vec<&str> = entries
        .iter()
        .filter_map(|entry| entry.get("words").and_then(Value::as_str))
        .collect();
    Ok(lines.join("\n"))
}

fn clip(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use tokio::net::TcpListener;

    use crate::signer::sign;

    fn creds() -> OcrCredentials {
        OcrCredentials {
            app_id: "tutor-app".into(),
            app_secret: "tutor-secret".into(),
        }
    }

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn endpoint(base_url: String) -> OcrEndpoint {
        OcrEndpoint {
            base_url,
            ..OcrEndpoint::default()
        }
    }

    #[test]
    fn builds_route_url() {
        assert_eq!(
            OcrEndpoint::default().url(),
            "https://gate.ai.xdf.cn/general/ocr_general/v2"
        );
        let trailing = endpoint("http://localhost:9/".into());
        assert_eq!(trailing.url(), "http://localhost:9/general/ocr_general/v2");
    }

    #[test]
    fn joins_words_in_order() {
        let body = r#"{"result":{"words_result":[{"words":"小明有5个苹果"},{"location":{}},{"words":"还剩几个？"}]}}"#;
        assert_eq!(parse_ocr_response(body).unwrap(), "小明有5个苹果\n还剩几个？");
    }

    #[test]
    fn empty_list_yields_empty_text() {
        let body = r#"{"result":{"words_result":[]}}"#;
        assert_eq!(parse_ocr_response(body).unwrap(), "");
    }

    #[test]
    fn missing_words_result_is_an_error() {
        for body in [
            r#"{"result":{}}"#,
            r#"{"code":401,"msg":"sign error"}"#,
            r#"{"result":{"words_result":"oops"}}"#,
            "<html>bad gateway</html>",
        ] {
            assert!(matches!(parse_ocr_response(body), Err(TutorError::Ocr(_))), "{body}");
        }
    }

    #[tokio::test]
    async fn sends_signed_request_and_parses_reply() {
        let router = Router::new().route(
            "/general/ocr_general/v2",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let get = |name: &str| headers[name].to_str().unwrap().to_string();
                let expected =
                    sign(&get("app_id"), "tutor-secret", &get("timestamp"), &get("salt"));
                if get("sign") != expected || get("app_id") != "tutor-app" {
                    return (StatusCode::UNAUTHORIZED, "bad sign".to_string());
                }
                let image = STANDARD.decode(body["img_base64"].as_str().unwrap()).unwrap();
                let reply = serde_json::json!({
                    "result": {"words_result": [
                        {"words": String::from_utf8(image).unwrap()},
                        {"words": "第二行"}
                    ]}
                });
                (StatusCode::OK, reply.to_string())
            }),
        );
        let base = serve(router).await;

        let client = OcrClient::new(creds()).with_endpoint(endpoint(base));
        let text = client.recognize(b"first line").await.unwrap();
        assert_eq!(text, "first line\n第二行");
    }

    #[tokio::test]
    async fn non_success_status_is_ocr_error() {
        let router = Router::new().route(
            "/general/ocr_general/v2",
            post(|| async { (StatusCode::BAD_GATEWAY, "gateway down") }),
        );
        let base = serve(router).await;

        let client = OcrClient::new(creds()).with_endpoint(endpoint(base));
        match client.recognize(b"img").await {
            Err(TutorError::Ocr(msg)) => {
                assert!(msg.contains("502"));
                assert!(msg.contains("gateway down"));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_gateway_is_ocr_error() {
        // Bind then drop to get a loopback port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = OcrClient::new(creds()).with_endpoint(endpoint(format!("http://{}", addr)));
        match client.recognize(b"img").await {
            Err(TutorError::Ocr(msg)) => assert!(msg.contains("request failed"), "{msg}"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_image_file_is_ocr_error() {
        let client = OcrClient::new(creds());
        let err = client
            .recognize_file(Path::new("/no/such/question.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, TutorError::Ocr(_)));
    }
}
