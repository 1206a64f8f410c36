//! # Blog Core
//!
//! The domain layer of the blog service.
//! Pure business logic: the post entity, slug derivation and the repository port.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
