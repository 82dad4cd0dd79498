//! # Quill Core
//!
//! The domain layer of the Quill blog service.
//! This crate contains the post model, tag normalization, search matching and
//! the repository contract, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod repository;

pub use error::{DomainError, RepoError};
pub use repository::PostRepository;
