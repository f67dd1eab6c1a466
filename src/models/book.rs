//! Book model and related types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// ISBN, compared as an opaque string
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Review as submitted, usually text. Absent when none has been written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub reviews: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Book {
    /// A review counts only when it holds a non-empty value:
    /// not `false`, `0` or `""`
    pub fn has_review(&self) -> bool {
        match &self.reviews {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }
}

/// Add/modify review request. The value is stored as sent.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReviewRequest {
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub review: Option<Value>,
}
