//! Server wiring for notepad: configuration and the top-level router.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use notepad_core::repository::NoteRepository;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `NOTEPAD_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:          String,
  #[serde(default = "default_port")]
  pub port:          u16,
  #[serde(default = "default_database_path")]
  pub database_path: PathBuf,
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_port() -> u16 { 8080 }

fn default_database_path() -> PathBuf { PathBuf::from("notes.db") }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          default_host(),
      port:          default_port(),
      database_path: default_database_path(),
    }
  }
}

impl ServerConfig {
  /// Load from an optional TOML file, overridden by `NOTEPAD_*` env vars.
  pub fn load(file: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(file.as_ref()).required(false))
      .add_source(config::Environment::with_prefix("NOTEPAD"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `database_path` with a leading `~` expanded.
  pub fn resolved_database_path(&self) -> PathBuf {
    expand_tilde(&self.database_path)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The note API with request tracing applied.
pub fn app<R>(repo: Arc<R>) -> Router
where
  R: NoteRepository + 'static,
{
  notepad_api::notes_router(repo).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir()
      .join(format!("notepad-{}-{name}.toml", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
  }

  #[test]
  fn missing_file_yields_defaults() {
    let cfg = ServerConfig::load("/nonexistent/notepad-config.toml").unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.address(), "0.0.0.0:8080");
  }

  #[test]
  fn file_values_override_defaults() {
    let path = temp_config(
      "override",
      "host = \"127.0.0.1\"\nport = 9000\ndatabase_path = \"/tmp/n.db\"\n",
    );
    let cfg = ServerConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.address(), "127.0.0.1:9000");
    assert_eq!(cfg.database_path, PathBuf::from("/tmp/n.db"));
  }

  #[test]
  fn partial_file_keeps_remaining_defaults() {
    let path = temp_config("partial", "port = 3000\n");
    let cfg = ServerConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.database_path, PathBuf::from("notes.db"));
  }

  #[test]
  fn tilde_is_expanded_against_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    let cfg = ServerConfig {
      database_path: PathBuf::from("~/notes/notes.db"),
      ..ServerConfig::default()
    };
    assert_eq!(
      cfg.resolved_database_path(),
      PathBuf::from(home).join("notes/notes.db"),
    );
  }

  #[test]
  fn plain_path_is_unchanged() {
    assert_eq!(expand_tilde(Path::new("data/notes.db")), PathBuf::from("data/notes.db"));
  }

  #[tokio::test]
  async fn app_serves_the_note_api() {
    use axum::{
      body::Body,
      http::{Request, StatusCode},
    };
    use notepad_store_sqlite::SqliteRepository;
    use tower::ServiceExt as _;

    let repo = SqliteRepository::open_in_memory().await.unwrap();
    let resp = app(Arc::new(repo))
      .oneshot(Request::get("/notes").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!([]));
  }
}
