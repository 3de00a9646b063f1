//! [`SqliteRepository`] — the SQLite implementation of [`NoteRepository`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use notepad_core::{
  note::{NewNote, Note, NoteUpdate},
  repository::NoteRepository,
};

use crate::{
  Error, Result,
  encode::{NOTE_COLUMNS, RawNote},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A note repository backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteRepository {
  conn: tokio_rusqlite::Connection,
}

impl SqliteRepository {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn select_all(&self) -> Result<Vec<Note>> {
    let sql = format!(
      "SELECT {NOTE_COLUMNS} FROM notes ORDER BY created_at DESC, id DESC"
    );

    let raws: Vec<RawNote> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawNote::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawNote::into_note).collect()
  }

  async fn select_one(&self, id: i64) -> Result<Option<Note>> {
    let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1");

    let raw: Option<RawNote> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], RawNote::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawNote::into_note).transpose()
  }

  /// Insert title and content; return the rowid the store assigned.
  async fn insert(&self, note: NewNote) -> Result<i64> {
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO notes (title, content) VALUES (?1, ?2)",
          rusqlite::params![note.title, note.content],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }

  /// Run a single write statement and return the affected row count.
  async fn execute(
    &self,
    sql: &'static str,
    params: impl rusqlite::Params + Send + 'static,
  ) -> Result<usize> {
    let affected = self
      .conn
      .call(move |conn| Ok(conn.execute(sql, params)?))
      .await?;
    Ok(affected)
  }
}

// ─── NoteRepository impl ─────────────────────────────────────────────────────

impl NoteRepository for SqliteRepository {
  async fn find_all(&self) -> notepad_core::Result<Vec<Note>> {
    Ok(self.select_all().await?)
  }

  async fn find_by_id(&self, id: i64) -> notepad_core::Result<Note> {
    self
      .select_one(id)
      .await?
      .ok_or(notepad_core::Error::NotFound(id))
  }

  async fn create(&self, note: NewNote) -> notepad_core::Result<Note> {
    // The insert does not return `created_at`; read the row back by id.
    let id = self.insert(note).await?;
    let created = self
      .select_one(id)
      .await?
      .ok_or(Error::MissingAfterInsert(id))?;
    tracing::debug!(id, "created note");
    Ok(created)
  }

  async fn update(&self, note: NoteUpdate) -> notepad_core::Result<()> {
    let NoteUpdate { id, title, content } = note;
    let affected = self
      .execute(
        "UPDATE notes SET title = ?1, content = ?2 WHERE id = ?3",
        (title, content, id),
      )
      .await?;
    tracing::debug!(id, affected, "updated note");
    Ok(())
  }

  async fn delete(&self, id: i64) -> notepad_core::Result<()> {
    let affected = self
      .execute("DELETE FROM notes WHERE id = ?1", (id,))
      .await?;
    tracing::debug!(id, affected, "deleted note");
    Ok(())
  }
}
