//! I/O boundary traits for testability
//!
//! These traits abstract the network and the terminal, allowing commands
//! to be tested with mock implementations.

use std::fmt;
use std::io;
use std::sync::Arc;

use serde_json::Value;

use crate::infrastructure::{InfraResult, TransportError};

/// HTTP verbs used by the Utho API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// One API call, path relative to the API base url.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Authenticated HTTP transport.
pub trait HttpTransport: Send + Sync {
    /// Send the request and return the decoded JSON body.
    ///
    /// An empty body decodes to `Value::Null`.
    fn execute(&self, request: ApiRequest) -> Result<Value, TransportError>;
}

/// Builds transports bound to a base url and bearer token.
///
/// Must not touch the network.
pub trait TransportFactory: Send + Sync {
    fn connect(&self, base_url: &str, token: &str) -> InfraResult<Arc<dyn HttpTransport>>;
}

/// Interactive terminal abstraction.
pub trait Prompter: Send + Sync {
    /// Ask a yes/no question. Only an explicit `y` counts as yes.
    fn confirm(&self, question: &str) -> io::Result<bool>;

    /// Read a line without echoing it where the terminal allows.
    fn read_secret(&self, prompt: &str) -> io::Result<String>;
}
