//! Raw access to the remote API.
//!
//! `ApiTransport` is the seam between the cached resource clients and the
//! network. `HttpTransport` is the reqwest implementation used in
//! production; tests substitute an in-memory transport.

use async_trait::async_trait;
use notify_admin_core::remote::RemoteError;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::error::{ClientError, Result};

/// Query parameters for a GET request.
pub type Params<'a> = &'a [(&'a str, String)];

/// JSON-over-HTTP access to the remote API.
///
/// Every method returns the decoded JSON body, `Value::Null` for an empty
/// body, or `ClientError::Remote` for a non-2xx response.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, path: &str, params: Params<'_>) -> Result<Value>;

    async fn post(&self, path: &str, data: Value) -> Result<Value>;

    async fn put(&self, path: &str, data: Value) -> Result<Value>;

    /// DELETE with a JSON body.
    async fn delete(&self, path: &str, data: Value) -> Result<Value>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpTransport {
    /// Create a transport for the API rooted at `base_url`.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // `Url::join` replaces the last segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            token,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let builder = self.client.request(method, self.url(path)?);
        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Value> {
        tracing::debug!(method = %method, path = %path, "Remote API request");

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::debug!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                message = %message,
                "Remote API error"
            );
            return Err(RemoteError::new(status.as_u16(), message).into());
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|err| {
            ClientError::InvalidResponse(format!("{} {}: {}", method, path, err))
        })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str, params: Params<'_>) -> Result<Value> {
        let request = self.request(Method::GET, path)?.query(params);
        self.send(Method::GET, path, request).await
    }

    async fn post(&self, path: &str, data: Value) -> Result<Value> {
        let request = self.request(Method::POST, path)?.json(&data);
        self.send(Method::POST, path, request).await
    }

    async fn put(&self, path: &str, data: Value) -> Result<Value> {
        let request = self.request(Method::PUT, path)?.json(&data);
        self.send(Method::PUT, path, request).await
    }

    async fn delete(&self, path: &str, data: Value) -> Result<Value> {
        let request = self.request(Method::DELETE, path)?.json(&data);
        self.send(Method::DELETE, path, request).await
    }
}

/// Extracts a readable message from an error response body.
///
/// The API answers `{"message": "..."}` or, for validation failures,
/// `{"message": {"field": ["problem", ...]}}`. Anything else is returned
/// as the raw body.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(Value::Object(object)) = serde_json::from_str::<Value>(body) else {
        return fallback_message(body);
    };

    match object.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Object(fields)) => fields
            .iter()
            .map(|(field, problems)| format!("{}: {}", field, join_problems(problems)))
            .collect::<Vec<_>>()
            .join("; "),
        Some(problems @ Value::Array(_)) => join_problems(problems),
        _ => fallback_message(body),
    }
}

fn join_problems(problems: &Value) -> String {
    match problems {
        Value::String(problem) => problem.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(problem) => problem.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn fallback_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        "Unknown error".to_string()
    } else {
        body.to_string()
    }
}
