//! Decoding helpers between SQLite rows and [`Note`].

use chrono::{DateTime, Utc};
use notepad_core::note::Note;

use crate::{Error, Result};

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

/// Column list shared by every `SELECT` against `notes`, in [`RawNote`] order.
pub const NOTE_COLUMNS: &str = "id, title, content, created_at";

/// Raw values read directly from a `notes` row.
pub struct RawNote {
  pub id:         i64,
  pub title:      String,
  pub content:    String,
  pub created_at: String,
}

impl RawNote {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawNote {
      id:         row.get(0)?,
      title:      row.get(1)?,
      content:    row.get(2)?,
      created_at: row.get(3)?,
    })
  }

  pub fn into_note(self) -> Result<Note> {
    Ok(Note {
      id:         self.id,
      title:      self.title,
      content:    self.content,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
