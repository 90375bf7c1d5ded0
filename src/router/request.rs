//! Request and response shapes for the routine router.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP-like request description handed to [`crate::router::RequestRouter`].
///
/// Mirrors an API-gateway proxy event: a method name, an optional `{id}`
/// path parameter, and an optional JSON-encoded body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineRequest {
    pub method: String,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Status code plus the JSON-encoded [`Envelope`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterResponse {
    pub status_code: u16,
    pub body: String,
}

/// Uniform response wrapper carried by every [`RouterResponse`].
///
/// `message` always embeds the resolved route for traceability; `data` is
/// null on every error, not-found and delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub message: String,
    pub data: Option<Value>,
}

/// Supported methods, closed over a catch-all the router rejects with 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Unsupported,
}

impl Method {
    /// Maps a raw method name onto the closed set. Method names are
    /// case-sensitive, as in HTTP.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            _ => Self::Unsupported,
        }
    }
}
