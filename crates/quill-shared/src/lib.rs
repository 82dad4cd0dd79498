//! # Quill Shared
//!
//! Wire types shared between the HTTP server and its clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
