//! The HTTP contract shared by the router and its clients.
//!
//! Every endpoint is described once here (method + path) and the router is
//! built from these descriptions, so paths cannot drift between the server and
//! anything that calls it. Request bodies are checked at the boundary through
//! [`Contract`] before any handler logic runs.

pub mod contact;

use axum::http::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub use contact::ContactSubmission;

#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
}

pub const PROFILE_GET: Endpoint = Endpoint {
    method: Method::GET,
    path: "/api/profile",
};

pub const SKILLS_LIST: Endpoint = Endpoint {
    method: Method::GET,
    path: "/api/skills",
};

pub const EXPERIENCE_LIST: Endpoint = Endpoint {
    method: Method::GET,
    path: "/api/experience",
};

pub const PROJECTS_LIST: Endpoint = Endpoint {
    method: Method::GET,
    path: "/api/projects",
};

pub const EDUCATION_LIST: Endpoint = Endpoint {
    method: Method::GET,
    path: "/api/education",
};

pub const CONTACT_SUBMIT: Endpoint = Endpoint {
    method: Method::POST,
    path: "/api/contact",
};

/// First failing rule of a request body, reported as `{ message, field }`.
///
/// `field` is the dotted path to the offending value; it is empty when the
/// body as a whole is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub message: String,
    pub field: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}

/// A request shape checked at the system boundary.
///
/// Implementors read a JSON value field by field in declaration order and
/// return the first violation, whether it is a missing field, a wrong type
/// or a failed content rule.
pub trait Contract: Sized {
    fn from_json(value: &Value) -> Result<Self, ValidationError>;

    /// Parses a raw request body. An empty body reads as `{}`.
    fn from_body(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(body)
                .map_err(|e| ValidationError::new("", format!("Invalid JSON body: {e}")))?
        };
        Self::from_json(&value)
    }
}

/// Reads a required string field.
pub(crate) fn read_string(obj: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    match obj.get(field) {
        None => Err(ValidationError::new(field, "Required")),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::new(
            field,
            format!("Expected string, received {}", json_type(other)),
        )),
    }
}

/// Reads the body as an object, failing with an empty field path otherwise.
pub(crate) fn expect_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| {
        ValidationError::new(
            "",
            format!("Expected object, received {}", json_type(value)),
        )
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Acknowledgement returned by write endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Substitutes `:name` placeholders in a path template.
///
/// Only the first occurrence of each placeholder is replaced; keys that do
/// not appear in the template are ignored. None of the current endpoints take
/// path parameters.
#[allow(dead_code)]
pub fn build_url<K, V>(path: &str, params: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: ToString,
{
    let mut url = path.to_string();
    for (key, value) in params {
        let placeholder = format!(":{}", key.as_ref());
        if url.contains(&placeholder) {
            url = url.replacen(&placeholder, &value.to_string(), 1);
        }
    }
    url
}
