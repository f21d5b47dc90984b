//! Blocking reqwest transport for the Utho API

use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde_json::Value;
use tracing::{debug, trace};

use crate::infrastructure::traits::{ApiRequest, HttpMethod, HttpTransport, TransportFactory};
use crate::infrastructure::{InfraError, InfraResult, TransportError};

/// HTTP transport authenticated with a bearer token.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a client for `base_url` sending `Authorization: Bearer <token>`.
    ///
    /// No request is made here.
    pub fn new(base_url: &str, token: &str) -> InfraResult<Self> {
        Url::parse(base_url).map_err(|e| InfraError::InvalidApiUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
            InfraError::InvalidToken {
                reason: e.to_string(),
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(concat!("uthoctl/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|source| TransportError::Request {
                context: "build http client".to_string(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let context = format!("{} {}", request.method, request.path);
        debug!("api request: {}", context);

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        };
        let mut builder = self.client.request(method, self.url(&request.path));
        if let Some(body) = &request.body {
            trace!("request body: {}", body);
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|source| TransportError::Request {
            context: context.clone(),
            source,
        })?;
        let status = response.status();
        let text = response.text().map_err(|source| TransportError::Request {
            context: context.clone(),
            source,
        })?;
        debug!("api response: {} -> {}", context, status.as_u16());
        trace!("response body: {}", text);

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|source| TransportError::Decode { context, source })
    }
}

/// The API's `message` when the error body is the JSON envelope, else the raw body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

/// Creates [`ReqwestTransport`]s.
#[derive(Debug, Default)]
pub struct ReqwestTransportFactory;

impl TransportFactory for ReqwestTransportFactory {
    fn connect(&self, base_url: &str, token: &str) -> InfraResult<Arc<dyn HttpTransport>> {
        Ok(Arc::new(ReqwestTransport::new(base_url, token)?))
    }
}
