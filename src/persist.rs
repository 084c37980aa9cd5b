//! Layout persistence collaborators.
//!
//! Persisting a layout is fire-and-forget: the layout pass hands the
//! snapshot off and moves on. Nothing awaits the request, failures are
//! logged and never retried here, and an in-flight request is not cancelled
//! when a newer snapshot supersedes it. Each snapshot is a complete
//! replacement of all widget positions, so the worst case of that race is a
//! stale or duplicate write, never a corrupt layout.
//!
//! The wire format is a single JSON line over a Unix domain socket:
//! `{"version":1,"cmd":"LAYOUT","placements":[{"Id":1,...}]}\n`.
//! No response body is consumed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::net::UnixStream;

use crate::config::schema::PersistenceConfig;
use crate::layout::WidgetPlacement;

/// Wire protocol version, included in every request.
pub const WIRE_VERSION: u32 = 1;

/// Sink for resolved layout snapshots.
pub trait PersistLayout: Send + Sync {
    /// Hands a snapshot off for persistence. Must not block; implementations
    /// perform any I/O on a background task.
    fn persist(&self, placements: Vec<WidgetPlacement>);
}

/// Errors from the socket persistence transport.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Could not connect to the persistence socket.
    #[error("Failed to connect to persistence socket: {path}")]
    Connect {
        /// Socket path that refused the connection.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The request could not be written to the socket.
    #[error("Failed to write layout request")]
    Write(#[source] std::io::Error),

    /// The request could not be serialized.
    #[error("Failed to serialize layout request: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single layout save request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// Protocol version (must be [`WIRE_VERSION`]).
    pub version: u32,
    /// Command name; always `LAYOUT` for a save.
    pub cmd: String,
    /// Complete replacement set of widget placements.
    pub placements: Vec<WidgetPlacement>,
}

impl LayoutRequest {
    /// Wraps a placement set in the request envelope.
    pub fn new(placements: Vec<WidgetPlacement>) -> Self {
        Self {
            version: WIRE_VERSION,
            cmd: "LAYOUT".to_string(),
            placements,
        }
    }

    /// Serializes to a JSON line (with trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(format!("{}\n", json))
    }
}

/// Persists snapshots as JSON lines over a Unix domain socket.
#[derive(Debug, Clone)]
pub struct SocketPersistence {
    socket_path: PathBuf,
}

impl SocketPersistence {
    /// Creates a persistence client for the given socket path.
    ///
    /// No connection is made until a snapshot is persisted.
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    /// The configured socket path.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Connects, writes one request line, and closes. No response is read.
    async fn send(path: &Path, placements: Vec<WidgetPlacement>) -> Result<(), PersistError> {
        let line = LayoutRequest::new(placements).to_json_line()?;
        let mut stream = UnixStream::connect(path)
            .await
            .map_err(|source| PersistError::Connect {
                path: path.to_path_buf(),
                source,
            })?;
        stream
            .write_all(line.as_bytes())
            .await
            .map_err(PersistError::Write)?;
        stream.shutdown().await.map_err(PersistError::Write)?;
        Ok(())
    }
}

impl PersistLayout for SocketPersistence {
    fn persist(&self, placements: Vec<WidgetPlacement>) {
        let path = self.socket_path.clone();
        let count = placements.len();
        tokio::spawn(async move {
            match Self::send(&path, placements).await {
                Ok(()) => {
                    tracing::debug!("Persisted layout of {} widgets", count);
                }
                Err(e) => {
                    // Best effort by design; the next changed snapshot will
                    // carry the full layout again.
                    tracing::warn!("Layout persistence failed: {}", e);
                }
            }
        });
    }
}

/// Builds the persistence collaborator described by the configuration:
/// the socket client when enabled, the null sink otherwise.
pub fn from_config(config: &PersistenceConfig) -> Arc<dyn PersistLayout> {
    if config.enabled {
        Arc::new(SocketPersistence::new(config.socket.as_str()))
    } else {
        Arc::new(NullPersistence)
    }
}

/// Discards snapshots; for headless and one-shot use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPersistence;

impl PersistLayout for NullPersistence {
    fn persist(&self, placements: Vec<WidgetPlacement>) {
        tracing::trace!("Discarding layout snapshot of {} widgets", placements.len());
    }
}
