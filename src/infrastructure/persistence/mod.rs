//! PostgreSQL repository implementations.
//!
//! Queries are bound at runtime with SQLx; the schema is managed through
//! the `migrations/` directory applied at startup.

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
