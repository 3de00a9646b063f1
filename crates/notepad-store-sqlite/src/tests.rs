//! Integration tests for `SqliteRepository` against an in-memory database.

use chrono::{SubsecRound as _, Utc};
use notepad_core::{
  Error,
  note::{NewNote, NoteUpdate},
  repository::NoteRepository,
};

use crate::SqliteRepository;

async fn store() -> SqliteRepository {
  SqliteRepository::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_note(title: &str, content: &str) -> NewNote {
  NewNote { title: title.into(), content: content.into() }
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_id_and_timestamp() {
  let s = store().await;
  // Stored timestamps have millisecond precision.
  let before = Utc::now().trunc_subsecs(3);

  let note = s.create(new_note("A", "B")).await.unwrap();

  assert_ne!(note.id, 0);
  assert_eq!(note.title, "A");
  assert_eq!(note.content, "B");
  assert!(note.created_at >= before);
}

#[tokio::test]
async fn create_assigns_distinct_ids() {
  let s = store().await;
  let first = s.create(new_note("one", "1")).await.unwrap();
  let second = s.create(new_note("two", "2")).await.unwrap();
  assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn find_by_id_returns_created_note() {
  let s = store().await;
  let created = s.create(new_note("title", "content")).await.unwrap();

  let fetched = s.find_by_id(created.id).await.unwrap();
  assert_eq!(fetched, created);
}

// ─── Read ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn find_by_id_missing_is_not_found() {
  let s = store().await;
  let err = s.find_by_id(999).await.unwrap_err();
  assert!(matches!(err, Error::NotFound(999)));
}

#[tokio::test]
async fn find_all_on_empty_store_is_empty() {
  let s = store().await;
  let notes = s.find_all().await.unwrap();
  assert!(notes.is_empty());
}

#[tokio::test]
async fn find_all_lists_newest_first() {
  let s = store().await;
  let older = s.create(new_note("older", "")).await.unwrap();
  tokio::time::sleep(std::time::Duration::from_millis(5)).await;
  let newer = s.create(new_note("newer", "")).await.unwrap();
  assert!(newer.created_at > older.created_at);

  let notes = s.find_all().await.unwrap();
  let ids: Vec<i64> = notes.iter().map(|n| n.id).collect();
  assert_eq!(ids, vec![newer.id, older.id]);
}

#[tokio::test]
async fn find_all_same_millisecond_follows_insertion_order() {
  let s = store().await;
  let mut created = Vec::new();
  for i in 0..5 {
    created.push(s.create(new_note(&format!("n{i}"), "")).await.unwrap().id);
  }

  let listed: Vec<i64> = s.find_all().await.unwrap().iter().map(|n| n.id).collect();
  created.reverse();
  assert_eq!(listed, created);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_changes_only_title_and_content() {
  let s = store().await;
  let created = s.create(new_note("before", "old body")).await.unwrap();

  s.update(NoteUpdate {
    id:      created.id,
    title:   "after".into(),
    content: "new body".into(),
  })
  .await
  .unwrap();

  let fetched = s.find_by_id(created.id).await.unwrap();
  assert_eq!(fetched.id, created.id);
  assert_eq!(fetched.created_at, created.created_at);
  assert_eq!(fetched.title, "after");
  assert_eq!(fetched.content, "new body");
}

#[tokio::test]
async fn update_leaves_other_notes_untouched() {
  let s = store().await;
  let target = s.create(new_note("target", "x")).await.unwrap();
  let other = s.create(new_note("other", "y")).await.unwrap();

  s.update(NoteUpdate::new(target.id, new_note("changed", "z")))
    .await
    .unwrap();

  assert_eq!(s.find_by_id(other.id).await.unwrap(), other);
}

// Unlike `find_by_id`, update and delete do not verify the row exists.
#[tokio::test]
async fn update_missing_note_succeeds_silently() {
  let s = store().await;
  s.update(NoteUpdate::new(42, new_note("ghost", "")))
    .await
    .unwrap();
  assert!(s.find_all().await.unwrap().is_empty());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_find_is_not_found() {
  let s = store().await;
  let created = s.create(new_note("doomed", "")).await.unwrap();

  s.delete(created.id).await.unwrap();

  let err = s.find_by_id(created.id).await.unwrap_err();
  assert!(err.is_not_found());
  assert!(s.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_note_succeeds_silently() {
  let s = store().await;
  s.delete(42).await.unwrap();
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_a_file_store_keeps_notes() {
  let stamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
  let path = std::env::temp_dir()
    .join(format!("notepad-test-{}-{stamp}.db", std::process::id()));

  let id = {
    let s = SqliteRepository::open(&path).await.unwrap();
    s.create(new_note("kept", "on disk")).await.unwrap().id
  };

  let s = SqliteRepository::open(&path).await.unwrap();
  let fetched = s.find_by_id(id).await.unwrap();
  assert_eq!(fetched.title, "kept");

  drop(s);
  for suffix in ["", "-wal", "-shm"] {
    let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
  }
}
