//! # Newsroom Core
//!
//! The domain layer of the Newsroom backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, repository ports, CRUD services and the shared pagination helper.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod services;

pub use error::{DomainError, DomainResult};
