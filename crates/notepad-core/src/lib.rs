//! Core types and trait definitions for the notepad service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod error;
pub mod note;
pub mod repository;

pub use error::{Error, Result};
