//! Persistence of the last accepted color.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const STATE_SUBDIR: &str = ".local/state/swatchpad";
const STATE_FILE: &str = "last_color.toml";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed state file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to encode state: {0}")]
    Encode(#[from] toml::ser::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Key-value slot holding the last selected hex color.
pub trait ColorStore {
    fn load(&self) -> StoreResult<Option<String>>;
    fn save(&mut self, hex: &str) -> StoreResult<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredState {
    last_selected_color: Option<String>,
}

/// TOML file holding `last_selected_color = "#rrggbb"`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.local/state/swatchpad/last_color.toml`, or the working
    /// directory when `HOME` is unset.
    pub fn default_path() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(STATE_SUBDIR).join(STATE_FILE),
            None => PathBuf::from(STATE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ColorStore for FileStore {
    fn load(&self) -> StoreResult<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let state: StoredState = toml::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(state.last_selected_color)
    }

    fn save(&mut self, hex: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let state = StoredState {
            last_selected_color: Some(hex.to_string()),
        };
        let content = toml::to_string(&state)?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

/// In-memory slot, for tests and for running without persistence.
///
/// Clones share the same slot.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slot: Rc<RefCell<MemorySlot>>,
}

#[derive(Debug, Default)]
struct MemorySlot {
    value: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        let store = Self::default();
        store.slot.borrow_mut().value = Some(value.to_string());
        store
    }

    pub fn value(&self) -> Option<String> {
        self.slot.borrow().value.clone()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.slot.borrow().saves
    }
}

impl ColorStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<String>> {
        Ok(self.value())
    }

    fn save(&mut self, hex: &str) -> StoreResult<()> {
        let mut slot = self.slot.borrow_mut();
        slot.value = Some(hex.to_string());
        slot.saves += 1;
        Ok(())
    }
}
