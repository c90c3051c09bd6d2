//! Handler for short URL creation.

use axum::{Form, Json, extract::State};

use crate::api::dto::shorturl::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL from a form-posted candidate.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// URL-encoded form with a single field:
///
/// ```text
/// url=https://www.example.com/some/page
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.example.com/some/page", "short_url": "12345" }
/// ```
///
/// `original_url` echoes the submitted string byte for byte; no
/// normalization is applied before or after storage.
///
/// # Errors
///
/// A candidate failing the syntax or DNS check produces
/// `200 {"error":"invalid url"}`. A datastore failure on the write path
/// produces a generic 500.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = state.link_service.shorten(&form.url).await?;

    Ok(Json(ShortenResponse {
        original_url: link.long_url,
        short_url: link.code,
    }))
}
