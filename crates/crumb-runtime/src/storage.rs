#![forbid(unsafe_code)]

//! Persisted key-value storage for mounted components.
//!
//! Components remember one thing across mounts: whether the dialog was
//! dismissed. That flag lives in a [`StorageBackend`], an abstraction over
//! the host's durable key-value store (browser `localStorage`, a state file,
//! an in-memory map under test).
//!
//! # Design Invariants
//!
//! 1. **Graceful degradation**: storage failures never panic; operations
//!    return `Result` and the runtime treats a failed read as an absent
//!    value.
//! 2. **Atomic writes**: file storage uses the write-then-rename pattern so
//!    a crash never leaves a half-written document behind.
//! 3. **Version tolerance**: a persisted document with an unknown schema
//!    version is treated as empty rather than rejected.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `StorageError::Io` | File I/O failure | Returned to caller |
//! | `StorageError::Serialization` | JSON encode/decode | Returned to caller |
//! | `StorageError::Corruption` | Poisoned lock, invalid document | Returned to caller |
//! | Missing key | First visit, cleared storage | `Ok(None)` |
//!
//! # Feature Gates
//!
//! - `state-persistence`: enables [`FileStorage`] with JSON serialization.
//!   Without it, only [`MemoryStorage`] is available.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error during file operations.
    Io(std::io::Error),
    /// Serialization or deserialization error.
    #[cfg(feature = "state-persistence")]
    Serialization(String),
    /// Storage is corrupted or otherwise unreadable.
    Corruption(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "state-persistence")]
            StorageError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            StorageError::Corruption(msg) => write!(f, "storage corruption: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            #[cfg(feature = "state-persistence")]
            StorageError::Serialization(_) => None,
            StorageError::Corruption(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// ─────────────────────────────────────────────────────────────────────────────
// Storage Backend Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Trait for pluggable key-value storage backends.
///
/// Implementations must be thread-safe (`Send + Sync`) so one backend can
/// outlive several mounts and be inspected from tests.
pub trait StorageBackend: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Check if the backend is available and functional.
    fn is_available(&self) -> bool {
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory Storage
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory storage backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// A new, empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().map(|g| g.len()).unwrap_or(0)
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryStorage {
    fn name(&self) -> &str {
        "MemoryStorage"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let guard = self
            .entries
            .read()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        guard.remove(key);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Storage (feature-gated)
// ─────────────────────────────────────────────────────────────────────────────

/// Current schema version of the persisted document.
#[cfg(feature = "state-persistence")]
const DOCUMENT_VERSION: u32 = 1;

/// On-disk document wrapping the key-value entries.
#[cfg(feature = "state-persistence")]
#[derive(serde::Serialize, serde::Deserialize)]
struct StoredDocument {
    version: u32,
    entries: HashMap<String, String>,
}

/// JSON file storage backend.
///
/// The whole document is re-read on every `get` and rewritten on every
/// `set`; the workload is one key touched a handful of times per session,
/// so there is no cache to invalidate.
#[cfg(feature = "state-persistence")]
pub struct FileStorage {
    path: std::path::PathBuf,
}

#[cfg(feature = "state-persistence")]
impl FileStorage {
    /// Create a backend persisting to `path`.
    ///
    /// The file is created lazily on the first write.
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn load(&self) -> StorageResult<HashMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HashMap::new());
            }
            Err(e) => return Err(e.into()),
        };
        let doc: StoredDocument = serde_json::from_str(&raw)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        if doc.version != DOCUMENT_VERSION {
            // Unknown schema: start over rather than guess.
            return Ok(HashMap::new());
        }
        Ok(doc.entries)
    }

    fn store(&self, entries: HashMap<String, String>) -> StorageResult<()> {
        let doc = StoredDocument {
            version: DOCUMENT_VERSION,
            entries,
        };
        let raw = serde_json::to_string_pretty(&doc)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(feature = "state-persistence")]
impl StorageBackend for FileStorage {
    fn name(&self) -> &str {
        "FileStorage"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.store(entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.store(entries)?;
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.path
            .parent()
            .map(std::path::Path::exists)
            .unwrap_or(false)
    }
}
