use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// 网络或解析失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Value,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 响应信封中的 data
    pub fn data(&self) -> Value {
        self.body.get("data").cloned().unwrap_or(Value::Null)
    }

    /// 服务端提示文案：依次尝试 `message` 与 `error` 字段
    pub fn message(&self) -> Option<String> {
        ["message", "error"]
            .iter()
            .find_map(|key| self.body.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    }

    pub fn error_message(&self) -> String {
        self.message()
            .unwrap_or_else(|| format!("Request failed with status {}", self.status))
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<TransportResponse, TransportError>;
}

/// 基于 reqwest 的 HTTP 实现
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<TransportResponse, TransportError> {
        let url = self.url(path);
        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        debug!("{:?} {}", method, url);
        let response = request
            .send()
            .await
            .map_err(|e| TransportError(format!("Request to {url} failed: {e}")))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read response body: {e}")))?;

        // 非 JSON 响应体按原文保留
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_falls_back_to_error_field() {
        let resp = TransportResponse {
            status: 409,
            body: json!({ "error": "Email already used" }),
        };
        assert_eq!(resp.error_message(), "Email already used");

        let resp = TransportResponse {
            status: 500,
            body: Value::Null,
        };
        assert_eq!(resp.error_message(), "Request failed with status 500");
    }

    #[test]
    fn test_url_join() {
        let transport = HttpTransport::new("http://localhost:8080/");
        assert_eq!(
            transport.url("/api/v1/teachers"),
            "http://localhost:8080/api/v1/teachers"
        );
    }
}
