//! Config redaction: produce safe-to-display config snapshots by masking secrets.

use serde_json::Value;

/// Keys whose string values are secrets.
static SENSITIVE_KEYS: &[&str] = &[
    "apiKey",
    "api_key",
    "appSecret",
    "app_secret",
    "token",
    "secret",
    "password",
];

/// Redact a config JSON value, replacing all sensitive fields with a short hint.
pub fn redact(value: &Value) -> Value {
    redact_recursive(value, "")
}

fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

fn redact_string(s: &str, key: &str) -> Value {
    if !is_sensitive_key(key) || s.is_empty() {
        return Value::String(s.to_string());
    }
    // Show at most the first 4 chars, and only for secrets long enough to stay hidden.
    let hint = if s.chars().count() > 8 {
        format!("{}***", s.chars().take(4).collect::<String>())
    } else {
        "***".to_string()
    };
    Value::String(hint)
}

fn redact_recursive(value: &Value, key: &str) -> Value {
    match value {
        Value::String(s) => redact_string(s, key),
        Value::Array(arr) => Value::Array(arr.iter().map(|v| redact_recursive(v, key)).collect()),
        Value::Object(map) => {
            let mut result = serde_json::Map::new();
            for (k, v) in map {
                result.insert(k.clone(), redact_recursive(v, k));
            }
            Value::Object(result)
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn redacts_api_key() {
        let v = json!({ "chat": { "apiKey": "sk-abcdef1234567890" } });
        let redacted = redact(&v);
        let key = redacted["chat"]["apiKey"].as_str().unwrap();
        assert_eq!(key, "sk-a***");
    }

    #[test]
    fn short_secrets_are_fully_masked() {
        let v = json!({ "ocr": { "appSecret": "abc123" } });
        assert_eq!(redact(&v)["ocr"]["appSecret"], "***");
    }

    #[test]
    fn passthrough_non_sensitive() {
        let v = json!({ "ocr": { "appId": "tutor-app", "baseUrl": "https://gate.ai.xdf.cn" } });
        assert_eq!(redact(&v), v);
    }
}
