//! # Blog Shared
//!
//! Wire types exchanged between the API and its clients.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, MessageResponse};
