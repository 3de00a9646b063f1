//! Error type for `notepad-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// The row written by an insert could not be read back.
  #[error("inserted note {0} could not be re-read")]
  MissingAfterInsert(i64),
}

impl From<Error> for notepad_core::Error {
  fn from(e: Error) -> Self { notepad_core::Error::storage(e) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
