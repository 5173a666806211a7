//! # Bloglist Core
//!
//! The domain layer of the bloglist service.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod stats;

pub use error::DomainError;
