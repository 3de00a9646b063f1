//! Handlers for `/notes` endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `GET`    | `/notes`      | Newest first |
//! | `POST`   | `/notes`      | Body: `{"title":"...","content":"..."}`; returns 201 + stored note |
//! | `GET`    | `/notes/{id}` | 404 if not found |
//! | `PUT`    | `/notes/{id}` | Body as for `POST`; `id` always comes from the path |
//! | `DELETE` | `/notes/{id}` | 204, empty body |
//!
//! Bodies are decoded as JSON whatever their `Content-Type`. Under `/notes/`
//! the id is checked before the method, so a bad id is always a 400.

use std::sync::Arc;

use axum::{
  Json,
  body::Bytes,
  extract::{
    Path, State,
    rejection::{BytesRejection, PathRejection},
  },
  http::{StatusCode, Uri},
  response::IntoResponse,
};
use notepad_core::{
  note::{Note, NotePayload},
  repository::NoteRepository,
};

use crate::error::ApiError;

type IdParam = Result<Path<i64>, PathRejection>;
type RawBody = Result<Bytes, BytesRejection>;

fn decode(body: RawBody) -> Result<NotePayload, ApiError> {
  let bytes = body?;
  Ok(serde_json::from_slice(&bytes)?)
}

// ─── Collection ───────────────────────────────────────────────────────────────

/// `GET /notes`
pub async fn list<R>(State(repo): State<Arc<R>>) -> Result<Json<Vec<Note>>, ApiError>
where
  R: NoteRepository,
{
  let notes = repo.find_all().await?;
  Ok(Json(notes))
}

/// `POST /notes`
pub async fn create<R>(
  State(repo): State<Arc<R>>,
  body: RawBody,
) -> Result<impl IntoResponse, ApiError>
where
  R: NoteRepository,
{
  let input = decode(body)?.into_new_note();
  let note = repo.create(input).await?;
  tracing::info!(id = note.id, "note created");
  Ok((StatusCode::CREATED, Json(note)))
}

// ─── Item ─────────────────────────────────────────────────────────────────────

/// `GET /notes/{id}`
pub async fn get_one<R>(
  State(repo): State<Arc<R>>,
  id: IdParam,
) -> Result<Json<Note>, ApiError>
where
  R: NoteRepository,
{
  let Path(id) = id?;
  let note = repo.find_by_id(id).await?;
  Ok(Json(note))
}

/// `PUT /notes/{id}` — responds with the note as sent, not as re-read, with
/// `id` replaced by the path id.
pub async fn update_one<R>(
  State(repo): State<Arc<R>>,
  id: IdParam,
  body: RawBody,
) -> Result<Json<Note>, ApiError>
where
  R: NoteRepository,
{
  let Path(id) = id?;
  let payload = decode(body)?;
  repo.update(payload.to_update(id)).await?;
  Ok(Json(payload.into_note(id)))
}

/// `DELETE /notes/{id}`
pub async fn delete_one<R>(
  State(repo): State<Arc<R>>,
  id: IdParam,
) -> Result<StatusCode, ApiError>
where
  R: NoteRepository,
{
  let Path(id) = id?;
  repo.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Fallbacks ────────────────────────────────────────────────────────────────

/// Unsupported method on `/notes`.
pub async fn method_not_allowed() -> ApiError { ApiError::MethodNotAllowed }

/// Unsupported method on `/notes/{id}`; a bad id still wins.
pub async fn item_method_not_allowed(id: IdParam) -> ApiError {
  match id {
    Ok(_) => ApiError::MethodNotAllowed,
    Err(e) => e.into(),
  }
}

/// Any path no route matches. Under `/notes/` the remainder is an id that
/// failed to match a single segment (`/notes/`, `/notes/1/x`).
pub async fn unmatched(uri: Uri) -> ApiError {
  match uri.path().strip_prefix("/notes/") {
    Some(rest) => ApiError::InvalidId(format!("{rest:?}")),
    None => ApiError::UnknownRoute(uri.path().to_string()),
  }
}
