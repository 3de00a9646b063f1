//! Error types for `notepad-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("note not found: {0}")]
  NotFound(i64),

  /// Any data store fault: connectivity, constraint violation, bad query.
  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend-specific error as [`Error::Storage`].
  pub fn storage(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Error::Storage(Box::new(e))
  }

  pub fn is_not_found(&self) -> bool { matches!(self, Error::NotFound(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
