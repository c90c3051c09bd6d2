//! Link creation and resolution service.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::codegen::generate_code;
use crate::utils::url_check::check_url;

/// Maximum insert attempts before giving up on finding a free code.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving short links.
///
/// Owns the shorten flow (URL validation, code generation, and the
/// collision retry loop around the repository insert) and the resolve
/// lookup.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    dns_timeout: Duration,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkRepository>, dns_timeout: Duration) -> Self {
        Self { links, dns_timeout }
    }

    /// Validates `candidate` and stores a new mapping under a fresh code.
    ///
    /// The stored record keeps the submitted string unchanged, so callers
    /// can echo `long_url` back verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the candidate fails the syntax
    /// or DNS existence check, and [`AppError::Internal`] if every
    /// generated code collided with an existing row.
    pub async fn shorten(&self, candidate: &str) -> Result<Link, AppError> {
        check_url(candidate, self.dns_timeout).await.map_err(|e| {
            tracing::debug!(candidate, reason = %e, "rejected candidate URL");
            AppError::InvalidUrl
        })?;

        for _ in 0..MAX_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(),
                long_url: candidate.to_string(),
            };

            match self.links.insert(new_link).await {
                Ok(link) => return Ok(link),
                // Code already taken, draw again.
                Err(AppError::CodeConflict) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::Internal(format!(
            "no free short code after {MAX_ATTEMPTS} attempts"
        )))
    }

    /// Resolves a short code to its stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes. Read-path
    /// datastore failures are logged and reported as not found as well.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        match self.links.find_by_code(code).await {
            Ok(Some(link)) => Ok(link),
            Ok(None) => Err(AppError::NotFound),
            Err(e) => {
                tracing::error!(code, error = %e, "lookup failed, reporting not found");
                Err(AppError::NotFound)
            }
        }
    }
}
