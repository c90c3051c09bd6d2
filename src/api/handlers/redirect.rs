//! Handler for short URL resolution.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Response
///
/// `302 Found` with the original URL in the `Location` header. An unknown
/// code, and any read-path datastore failure, produce
/// `200 {"error":"No short URL found for the given input"}`.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&short_url).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, link.long_url)]).into_response())
}
