//! Data Transfer Objects - response payloads outside the GraphQL schema.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Backend serving this process (`memory` or `postgres`).
    pub storage: String,
    pub version: String,
    pub timestamp: String,
}
