//! DTO for the greeting endpoint.

use serde::Serialize;

/// Greeting payload returned by `GET /api/hello`.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub greeting: String,
}
