//! Core domain entities for the URL shortening service.
//!
//! Entities are plain data structures without business logic. Creation
//! input uses a separate struct (`NewLink`) mirroring the stored form.

pub mod link;

pub use link::{Link, NewLink};
