//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short link records.
///
/// The service layer reaches the document store only through this trait:
/// one insert and one lookup by short code. Records are never updated or
/// deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code is already taken,
    /// and [`AppError::Database`] on any other datastore failure.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds the link stored under `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if no row matches; an absent code is not an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on datastore failure.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;
}
