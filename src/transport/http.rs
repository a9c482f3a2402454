use super::{DispatchResponse, Dispatcher, TransportError};
use crate::batch::RequestDescriptor;
use crate::config::BillbeeConfig;
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, RETRY_AFTER};
use reqwest::Proxy;
use serde_json::Value;
use std::env;
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

const API_KEY_HEADER: &str = "x-billbee-api-key";
const REQUEST_ID_HEADER: &str = "x-billbee-rs-request-id";

/// reqwest-backed [`Dispatcher`] with basic auth and the API key header
/// attached to every call.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    username: String,
    api_password: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &BillbeeConfig) -> Result<Self> {
        config.validate()?;

        let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            Error::configuration_with_context(
                "API key contains characters that are not valid in an HTTP header",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_source("transport"),
            )
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, api_key);

        // Pool sizing is env-overridable.
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(
                env::var("BILLBEE_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(32),
            )
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("Invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path("proxy_url")
                        .with_source("transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            api_password: config.api_password.clone(),
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Transport(TransportError::Timeout(self.timeout))
        } else {
            Error::Transport(TransportError::Http(err))
        }
    }

    async fn error_from_response(response: reqwest::Response) -> Error {
        let status = response.status();
        match status.as_u16() {
            401 => Error::Authentication,
            403 => Error::Forbidden,
            429 => Error::RateLimited {
                retry_after: header_value(response.headers(), RETRY_AFTER.as_str()),
            },
            code => {
                let body = response.text().await.unwrap_or_default();
                let message = error_message_from_body(&body)
                    .or_else(|| status.canonical_reason().map(str::to_string))
                    .unwrap_or_else(|| format!("HTTP {}", code));
                Error::Remote {
                    status: code,
                    message,
                }
            }
        }
    }
}

#[async_trait]
impl Dispatcher for HttpTransport {
    async fn dispatch(&self, request: &RequestDescriptor) -> Result<DispatchResponse> {
        let url = self.url_for(request.path());
        let request_id = Uuid::new_v4().to_string();

        let mut builder = self
            .client
            .request(request.method().to_reqwest(), &url)
            .basic_auth(&self.username, Some(&self.api_password))
            .header(REQUEST_ID_HEADER, request_id.as_str());
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let start = Instant::now();
        let response = match builder.send().await {
            Ok(r) => r,
            Err(e) => {
                debug!(
                    request_id = %request_id,
                    method = %request.method(),
                    path = request.path(),
                    error = %e,
                    "Billbee API call failed without response"
                );
                return Err(self.transport_error(e));
            }
        };

        let status = response.status();
        debug!(
            request_id = %request_id,
            method = %request.method(),
            path = request.path(),
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Billbee API call"
        );

        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        Ok(DispatchResponse::new(status.as_u16(), decode_body(&text)))
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let v = headers.get(name)?.to_str().ok()?.trim();
    if v.is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}

/// Billbee reports failures as `{"ErrorMessage": ...}`; ASP.NET errors use `Message`.
fn error_message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(json) => ["ErrorMessage", "Message", "message"]
            .iter()
            .filter_map(|key| json.get(*key).and_then(|v| v.as_str()))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string),
        Err(_) => Some(trimmed.chars().take(200).collect()),
    }
}

fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_decodes_to_null() {
        assert_eq!(decode_body(""), Value::Null);
        assert_eq!(decode_body("  \n"), Value::Null);
    }

    #[test]
    fn non_json_body_is_kept_as_string() {
        assert_eq!(decode_body("OK"), Value::String("OK".into()));
        assert_eq!(decode_body(r#"{"Data":[]}"#), json!({"Data": []}));
    }

    #[test]
    fn error_message_prefers_billbee_envelope() {
        assert_eq!(
            error_message_from_body(r#"{"ErrorMessage":"Order not found","ErrorCode":1}"#),
            Some("Order not found".to_string())
        );
        assert_eq!(
            error_message_from_body(r#"{"Message":"The request is invalid."}"#),
            Some("The request is invalid.".to_string())
        );
        assert_eq!(error_message_from_body(r#"{"ErrorMessage":""}"#), None);
        assert_eq!(
            error_message_from_body("Bad Gateway"),
            Some("Bad Gateway".to_string())
        );
        assert_eq!(error_message_from_body(""), None);
    }

    #[test]
    fn url_joins_base_and_path() {
        let config = BillbeeConfig::new("user", "secret", "key").with_base_url("http://localhost:1234/api/v1/");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:1234/api/v1");
        assert_eq!(
            transport.url_for("/products?page=1"),
            "http://localhost:1234/api/v1/products?page=1"
        );
        assert_eq!(
            transport.url_for("layouts"),
            "http://localhost:1234/api/v1/layouts"
        );
    }
}
