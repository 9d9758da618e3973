//! # Newsroom Shared
//!
//! Wire types shared between the HTTP layer and the domain services:
//! transfer objects, their validation rules, and response envelopes.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, PageLinks, PageMetadata, PagedResponse};
