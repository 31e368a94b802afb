use serde::{Deserialize, Serialize};

/// Structured error body returned by every JSON error response.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of `GET /health`.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthDto {
    pub ok: bool,
}
