//! JSON REST API for notepad.
//!
//! Exposes an axum [`Router`] backed by any
//! [`notepad_core::repository::NoteRepository`]. TLS and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = notepad_api::notes_router(Arc::new(repo));
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod notes;

use std::sync::Arc;

use axum::{Router, routing::get};
use notepad_core::repository::NoteRepository;

pub use error::ApiError;

/// Build the note API router for `repo`.
///
/// Every error, including unknown paths and unsupported methods, carries a
/// JSON `{"error": ...}` body.
pub fn notes_router<R>(repo: Arc<R>) -> Router<()>
where
  R: NoteRepository + 'static,
{
  Router::new()
    .route(
      "/notes",
      get(notes::list::<R>)
        .post(notes::create::<R>)
        .fallback(notes::method_not_allowed),
    )
    .route(
      "/notes/{id}",
      get(notes::get_one::<R>)
        .put(notes::update_one::<R>)
        .delete(notes::delete_one::<R>)
        .fallback(notes::item_method_not_allowed),
    )
    .fallback(notes::unmatched)
    .with_state(repo)
}

// ─── Integration tests ────────────────────────────────────────────────────────
