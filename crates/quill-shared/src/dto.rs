//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of a create or update request.
///
/// Fields are optional on the wire so that a missing field is reported as a
/// validation failure naming it, not as a generic parse error. Unknown fields
/// are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Comma separated tag list, e.g. `"go, web"`.
    #[serde(default)]
    pub tags: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Query string of `GET /api/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}
