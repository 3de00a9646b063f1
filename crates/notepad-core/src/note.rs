//! The note entity and the input shapes used to create and update it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted note.
///
/// `id` and `created_at` are assigned by the store on insertion and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
  pub id:         i64,
  pub title:      String,
  pub content:    String,
  pub created_at: DateTime<Utc>,
}

/// Input for [`NoteRepository::create`](crate::repository::NoteRepository::create).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
  #[serde(default)]
  pub title:   String,
  #[serde(default)]
  pub content: String,
}

/// Input for [`NoteRepository::update`](crate::repository::NoteRepository::update).
///
/// Only `title` and `content` are written; `id` selects the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUpdate {
  pub id:      i64,
  pub title:   String,
  pub content: String,
}

impl NoteUpdate {
  /// Pair a decoded body with the id taken from the request path.
  pub fn new(id: i64, body: NewNote) -> Self {
    Self { id, title: body.title, content: body.content }
  }
}

/// A note object as sent by a client in a request body.
///
/// Every field is optional. `id` and `created_at` must still have the right
/// type when present, but their values are never written to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotePayload {
  pub id:         Option<i64>,
  #[serde(default)]
  pub title:      String,
  #[serde(default)]
  pub content:    String,
  pub created_at: Option<DateTime<Utc>>,
}

impl NotePayload {
  pub fn into_new_note(self) -> NewNote {
    NewNote { title: self.title, content: self.content }
  }

  pub fn to_update(&self, id: i64) -> NoteUpdate {
    NoteUpdate { id, title: self.title.clone(), content: self.content.clone() }
  }

  /// The payload as a [`Note`] carrying `id`.
  ///
  /// A missing `created_at` becomes [`unset_created_at`].
  pub fn into_note(self, id: i64) -> Note {
    Note {
      id,
      title: self.title,
      content: self.content,
      created_at: self.created_at.unwrap_or_else(unset_created_at),
    }
  }
}

/// Placeholder timestamp for a note whose creation time is not known:
/// `0001-01-01T00:00:00Z`.
pub fn unset_created_at() -> DateTime<Utc> {
  DateTime::from_timestamp(-62_135_596_800, 0).unwrap_or_default()
}
