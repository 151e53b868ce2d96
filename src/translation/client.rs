use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::TranslationRequest;
use crate::error::WidgetError;

/// Public MyMemory endpoint used when no other is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Anything that can turn a request into translated text.
///
/// The session never talks HTTP itself; it hands requests to a `Translator`
/// and applies whatever comes back.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, WidgetError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: Option<ResponseData>,
    // Sent as a number on success and sometimes as a string on errors.
    #[serde(default)]
    response_status: Option<serde_json::Value>,
    #[serde(default)]
    response_details: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    translated_text: Option<String>,
}

/// HTTP client for the MyMemory `get` endpoint.
pub struct MyMemoryClient {
    client: Client,
    endpoint: String,
    email: Option<String>,
}

impl MyMemoryClient {
    pub fn new(endpoint: String, email: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            email,
        }
    }

    /// Builds the full GET URL for a request.
    ///
    /// `q` is encoded like `encodeURIComponent`, so spaces become `%20`
    /// rather than `+`.
    pub fn request_url(&self, request: &TranslationRequest) -> String {
        let mut url = format!(
            "{}?q={}&langpair={}",
            self.endpoint,
            urlencoding::encode(&request.text),
            request.langpair()
        );
        if let Some(email) = &self.email {
            url.push_str("&de=");
            url.push_str(&urlencoding::encode(email));
        }
        url
    }
}

#[async_trait]
impl Translator for MyMemoryClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, WidgetError> {
        if request.text.is_empty() {
            return Ok(String::new());
        }

        let url = self.request_url(request);
        debug!(seq = request.seq, langpair = %request.langpair(), "sending translation request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WidgetError::from_http(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WidgetError::ServiceError(format!(
                "request failed with status {status}: {}",
                body.trim()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WidgetError::NetworkFailure(e.to_string()))?;

        parse_response(&body)
    }
}

/// Extracts the translated text from a MyMemory response body.
pub fn parse_response(body: &str) -> Result<String, WidgetError> {
    let parsed: MyMemoryResponse = serde_json::from_str(body)
        .map_err(|e| WidgetError::ServiceError(format!("malformed response: {e}")))?;

    if let Some(status) = parsed.response_status.as_ref().and_then(status_code)
        && status != 200
    {
        let details = parsed
            .response_details
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|d| !d.is_empty())
            .unwrap_or("no details");
        return Err(WidgetError::ServiceError(format!(
            "service returned status {status}: {details}"
        )));
    }

    parsed
        .response_data
        .and_then(|data| data.translated_text)
        .ok_or_else(|| {
            WidgetError::ServiceError("malformed response: missing translated text".to_string())
        })
}

fn status_code(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::Language;

    fn request(text: &str) -> TranslationRequest {
        TranslationRequest {
            seq: 1,
            text: text.to_string(),
            source_language: Language::English,
            target_language: Language::French,
        }
    }

    #[test]
    fn test_request_url_encodes_like_uri_component() {
        let client = MyMemoryClient::new(DEFAULT_ENDPOINT.to_string(), None);
        let url = client.request_url(&request("Hello, how are you?"));
        assert_eq!(
            url,
            "https://api.mymemory.translated.net/get?q=Hello%2C%20how%20are%20you%3F&langpair=en|fr"
        );
    }

    #[test]
    fn test_request_url_appends_email() {
        let client = MyMemoryClient::new(
            "http://localhost:9999/get".to_string(),
            Some("me@example.com".to_string()),
        );
        let url = client.request_url(&request("Hi"));
        assert_eq!(
            url,
            "http://localhost:9999/get?q=Hi&langpair=en|fr&de=me%40example.com"
        );
    }

    #[test]
    fn test_parse_success() {
        let body = r#"{
            "responseData": {"translatedText": "Bonjour, comment ça va ?", "match": 1},
            "responseStatus": 200,
            "responseDetails": ""
        }"#;
        assert_eq!(parse_response(body).unwrap(), "Bonjour, comment ça va ?");
    }

    #[test]
    fn test_parse_service_status_as_string() {
        let body = r#"{
            "responseData": {"translatedText": "INVALID LANGUAGE PAIR"},
            "responseStatus": "403",
            "responseDetails": "INVALID LANGUAGE PAIR SPECIFIED"
        }"#;
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, WidgetError::ServiceError(_)));
        assert!(err.to_string().contains("INVALID LANGUAGE PAIR SPECIFIED"));
    }

    #[test]
    fn test_parse_missing_translated_text() {
        let err = parse_response(r#"{"responseData": {}}"#).unwrap_err();
        assert!(err.to_string().contains("missing translated text"));
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_response("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, WidgetError::ServiceError(_)));
    }

    #[tokio::test]
    async fn test_empty_text_skips_network() {
        // Unroutable endpoint: any network use would fail.
        let client = MyMemoryClient::new("http://127.0.0.1:1/get".to_string(), None);
        let translated = client.translate(&request("")).await.unwrap();
        assert!(translated.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() {
        let client = MyMemoryClient::new("http://127.0.0.1:1/get".to_string(), None);
        let err = client.translate(&request("Hello")).await.unwrap_err();
        assert!(matches!(err, WidgetError::NetworkFailure(_)));
    }
}
