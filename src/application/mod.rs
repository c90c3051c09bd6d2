//! Application layer services implementing the use-cases.
//!
//! Services coordinate validation, code generation, and repository calls,
//! and give HTTP handlers a narrow API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
