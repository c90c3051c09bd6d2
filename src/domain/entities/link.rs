//! Link entity representing a stored short URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a generated short code and a submitted URL.
///
/// `long_url` holds the candidate exactly as it was received; `code` is
/// the decimal short code it was filed under. On the wire these surface
/// as `original_url` and `short_url`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}
