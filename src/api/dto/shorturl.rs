//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};

/// Form body for the create endpoint: a single `url` field.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: String,
}

/// Response for a successful create.
///
/// Wire names are part of the public contract: `original_url` echoes the
/// submitted string unchanged, `short_url` carries the generated decimal
/// code.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
}
