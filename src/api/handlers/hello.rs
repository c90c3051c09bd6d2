//! Handler for the API greeting endpoint.

use axum::Json;

use crate::api::dto::hello::Greeting;

/// Returns a fixed greeting.
///
/// # Endpoint
///
/// `GET /api/hello`
///
/// # Response
///
/// ```json
/// { "greeting": "hello API" }
/// ```
pub async fn hello_handler() -> Json<Greeting> {
    Json(Greeting {
        greeting: "hello API".to_string(),
    })
}
