// crates/boom-core/src/backend.rs - Persistence port and its two implementations
//
// A backend knows HOW to load and store a whole Store, never WHEN. The
// session decides when to save (once, and only after a mutation), so neither
// implementation keeps a dirty flag.
//
// CONTRACT:
// - fetch on missing state yields an empty Store, not an error
// - fetch on unparsable state is a PersistenceRead error
// - save replaces the persisted state wholesale

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{BoomError, Result};
use crate::store::Store;

/// Capability to fetch and save the complete store
pub trait Backend {
    /// Load the persisted store, or an empty one if nothing was saved yet
    fn fetch(&self) -> Result<Store>;

    /// Replace the persisted store with `store`
    fn save(&mut self, store: &Store) -> Result<()>;

    /// Human-readable name, shown by `boom storage`
    fn describe(&self) -> String;

    /// File backing this store, if there is one
    fn location(&self) -> Option<&Path> {
        None
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn fetch(&self) -> Result<Store> {
        (**self).fetch()
    }

    fn save(&mut self, store: &Store) -> Result<()> {
        (**self).save(store)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn location(&self) -> Option<&Path> {
        (**self).location()
    }
}

/// Durable backend: one JSON document at a fixed path
///
/// ```text
/// {
///   "urls": { "gh": "https://github.com" },
///   "snippets": {}
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBackend {
    path: PathBuf,
}

impl JsonBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend at `~/.boom.json`
    ///
    /// Falls back to the current directory when no home directory is known.
    pub fn default_location() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".boom.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> BoomError {
        BoomError::PersistenceRead {
            path: self.path.clone(),
            source: source.into(),
        }
    }

    fn write_error(&self, source: io::Error) -> BoomError {
        BoomError::PersistenceWrite {
            path: self.path.clone(),
            source,
        }
    }

    /// Write to a temp file beside the target, then rename over it
    ///
    /// A symlinked store file is followed, so the rename lands on the file
    /// the link points at and the link itself survives. An existing file
    /// keeps its permissions.
    fn atomic_write(&self, data: &[u8]) -> Result<()> {
        let target = if self.path.exists() {
            fs::canonicalize(&self.path).map_err(|e| self.write_error(e))?
        } else {
            self.path.clone()
        };
        let permissions = match fs::metadata(&target) {
            Ok(meta) => Some(meta.permissions()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(self.write_error(e)),
        };

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| self.write_error(e))?;
        }

        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        temp.write_all(data).map_err(|e| self.write_error(e))?;
        temp.flush().map_err(|e| self.write_error(e))?;
        if let Some(permissions) = permissions {
            temp.as_file()
                .set_permissions(permissions)
                .map_err(|e| self.write_error(e))?;
        }
        temp.persist(&target)
            .map_err(|e| self.write_error(e.error))?;
        Ok(())
    }
}

impl Backend for JsonBackend {
    fn fetch(&self) -> Result<Store> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no store file yet, starting empty");
                return Ok(Store::new());
            }
            Err(e) => return Err(self.read_error(e)),
        };

        // An empty file counts as "nothing saved yet"
        if content.trim().is_empty() {
            return Ok(Store::new());
        }

        let store: Option<Store> =
            serde_json::from_str(&content).map_err(|e| self.read_error(e))?;
        let store = store.unwrap_or_default();
        debug!(path = %self.path.display(), lists = store.len(), "fetched store");
        Ok(store)
    }

    fn save(&mut self, store: &Store) -> Result<()> {
        let json = serde_json::to_string_pretty(store)?;
        self.atomic_write(json.as_bytes())?;
        debug!(path = %self.path.display(), lists = store.len(), "saved store");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("JSON ({})", self.path.display())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Ephemeral backend holding the store in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    snapshot: Store,
    saves: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot
    pub fn with_store(store: Store) -> Self {
        Self {
            snapshot: store,
            saves: 0,
        }
    }

    /// The last saved (or seeded) store
    pub fn snapshot(&self) -> &Store {
        &self.snapshot
    }

    /// How many times `save` has been called
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl Backend for MemoryBackend {
    fn fetch(&self) -> Result<Store> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, store: &Store) -> Result<()> {
        self.snapshot = store.clone();
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
