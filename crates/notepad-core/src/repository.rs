//! The `NoteRepository` trait.
//!
//! The trait is implemented by storage backends (e.g. `notepad-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend,
//! so an in-memory or failing double can stand in for tests.

use std::future::Future;

use crate::{
  Result,
  note::{NewNote, Note, NoteUpdate},
};

/// Abstraction over the persistence of [`Note`]s.
///
/// Every operation is a single statement against the store (`create` also
/// re-fetches the inserted row). Faults are never recovered locally; they
/// surface as [`Error::Storage`](crate::Error::Storage).
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait NoteRepository: Send + Sync {
  /// All notes, newest first. An empty store yields an empty vec.
  fn find_all(&self) -> impl Future<Output = Result<Vec<Note>>> + Send + '_;

  /// The note with `id`, or [`Error::NotFound`](crate::Error::NotFound).
  fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Note>> + Send + '_;

  /// Insert a note and return the full stored record, including the
  /// store-assigned `id` and `created_at`.
  fn create(&self, note: NewNote) -> impl Future<Output = Result<Note>> + Send + '_;

  /// Overwrite `title` and `content` of the note with `note.id`.
  ///
  /// Succeeds even when no row matches.
  fn update(&self, note: NoteUpdate) -> impl Future<Output = Result<()>> + Send + '_;

  /// Hard-delete the note with `id`. Succeeds even when no row matches.
  fn delete(&self, id: i64) -> impl Future<Output = Result<()>> + Send + '_;
}
