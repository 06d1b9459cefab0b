//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the post rules and the storage port, with no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
