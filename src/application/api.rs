//! Request plumbing shared by all resource services
//!
//! Every response carries a `{"status", "message"}` envelope; a status of
//! `error` is a failure even when the HTTP exchange succeeded.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Created, DomainError, Scalar, StatusReply};
use crate::infrastructure::traits::{ApiRequest, HttpMethod, HttpTransport};

/// Thin wrapper over the transport that enforces the response envelope.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    pub fn get(&self, path: impl Into<String>) -> ApplicationResult<Value> {
        self.send(ApiRequest::new(HttpMethod::Get, path))
    }

    pub fn post<B: Serialize>(&self, path: impl Into<String>, body: &B) -> ApplicationResult<Value> {
        let path = path.into();
        let body = to_body(body, &path)?;
        self.send(ApiRequest::new(HttpMethod::Post, path).with_body(body))
    }

    /// POST without a request body.
    pub fn post_empty(&self, path: impl Into<String>) -> ApplicationResult<Value> {
        self.send(ApiRequest::new(HttpMethod::Post, path))
    }

    pub fn delete(&self, path: impl Into<String>) -> ApplicationResult<Value> {
        self.send(ApiRequest::new(HttpMethod::Delete, path))
    }

    pub fn delete_with<B: Serialize>(
        &self,
        path: impl Into<String>,
        body: &B,
    ) -> ApplicationResult<Value> {
        let path = path.into();
        let body = to_body(body, &path)?;
        self.send(ApiRequest::new(HttpMethod::Delete, path).with_body(body))
    }

    fn send(&self, request: ApiRequest) -> ApplicationResult<Value> {
        let value = self.transport.execute(request)?;
        check_envelope(&value)?;
        Ok(value)
    }
}

fn to_body<B: Serialize>(body: &B, path: &str) -> ApplicationResult<Value> {
    serde_json::to_value(body).map_err(|source| ApplicationError::Decode {
        context: format!("request body for {}", path),
        source,
    })
}

/// Turn an in-band `"status": "error"` into [`ApplicationError::Api`].
pub fn check_envelope(value: &Value) -> ApplicationResult<()> {
    let Ok(reply) = StatusReply::deserialize(value) else {
        return Ok(());
    };
    if reply.is_error() {
        let message = if reply.message.is_empty() {
            "the API reported an error".to_string()
        } else {
            reply.message.to_string()
        };
        return Err(ApplicationError::Api { message });
    }
    Ok(())
}

/// Decode `value[key]`; a missing or null key yields the default.
pub fn field<T>(value: &Value, key: &str) -> ApplicationResult<T>
where
    T: DeserializeOwned + Default,
{
    match value.get(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(inner) => T::deserialize(inner).map_err(|source| ApplicationError::Decode {
            context: format!("field '{}'", key),
            source,
        }),
    }
}

/// Decode the whole response body.
pub fn decode<T: DeserializeOwned>(value: Value, context: &str) -> ApplicationResult<T> {
    serde_json::from_value(value).map_err(|source| ApplicationError::Decode {
        context: context.to_string(),
        source,
    })
}

/// Envelope status of a plain action response.
pub fn status(value: &Value) -> ApplicationResult<StatusReply> {
    if value.is_null() {
        return Ok(StatusReply::default());
    }
    StatusReply::deserialize(value).map_err(|source| ApplicationError::Decode {
        context: "status".to_string(),
        source,
    })
}

/// Status plus the new resource id, read from the first non-empty `id_keys` entry.
pub fn created(value: &Value, id_keys: &[&str]) -> ApplicationResult<Created> {
    let reply = status(value)?;
    let id = id_keys
        .iter()
        .filter_map(|key| value.get(*key))
        .filter_map(|v| Scalar::deserialize(v).ok())
        .find(|s| !s.is_empty())
        .unwrap_or_default();
    Ok(Created {
        id,
        status: reply.status,
        message: reply.message,
    })
}

/// The single resource a read-by-id returned, wrapped in a list.
pub fn first<T>(items: Vec<T>, kind: &'static str, id: &str) -> ApplicationResult<T> {
    items
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::not_found(kind, id).into())
}

/// Select an embedded child resource by id.
pub fn find_by<T, F>(items: Vec<T>, kind: &'static str, id: &str, key: F) -> ApplicationResult<T>
where
    F: Fn(&T) -> &Scalar,
{
    items
        .into_iter()
        .find(|item| key(item).as_str() == id)
        .ok_or_else(|| DomainError::not_found(kind, id).into())
}
