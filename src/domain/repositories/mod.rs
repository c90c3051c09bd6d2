//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; the concrete implementation lives
//! in `crate::infrastructure::persistence`, and mock implementations are
//! auto-generated via `mockall` for service tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
