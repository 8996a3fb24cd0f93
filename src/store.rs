//! File-backed named string entries — the project's local storage.
//!
//! Four entries matter to the playground: the three source buffers and
//! the selected editor theme. They live in one JSON object file inside
//! the project directory; an absent file or key means "use the default".

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::buffers::{EditorKind, SourceBuffers};
use crate::error::{PadError, Result};
use crate::theme::Theme;

pub const STORE_FILE: &str = "webpad.json";
pub const KEY_THEME: &str = "theme";

/// Get/set named string values for one project directory.
#[derive(Clone, Debug)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(STORE_FILE),
        }
    }

    /// Path of the backing file (also what the dev server watches).
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    /// Remove entries; absent keys are a no-op.
    pub fn remove(&self, keys: &[&str]) -> Result<()> {
        let mut map = self.read_map()?;
        for key in keys {
            map.remove(*key);
        }
        self.write_map(&map)
    }

    // ── Playground-shaped accessors ───────────────────────────────────

    pub fn load_buffers(&self) -> Result<SourceBuffers> {
        let mut map = self.read_map()?;
        let mut buffers = SourceBuffers::default();
        for kind in EditorKind::ALL {
            if let Some(text) = map.remove(kind.key()) {
                buffers.set(kind, text);
            }
        }
        Ok(buffers)
    }

    pub fn save_buffers(&self, buffers: &SourceBuffers) -> Result<()> {
        let mut map = self.read_map()?;
        for kind in EditorKind::ALL {
            map.insert(kind.key().to_string(), buffers.get(kind).to_string());
        }
        self.write_map(&map)
    }

    /// Remove the three persisted buffers, restoring the default (empty)
    /// state on the next load. The theme entry is untouched.
    pub fn clear_buffers(&self) -> Result<()> {
        self.remove(&[
            EditorKind::Markup.key(),
            EditorKind::Style.key(),
            EditorKind::Script.key(),
        ])
    }

    pub fn load_theme(&self) -> Result<Theme> {
        Ok(self
            .get(KEY_THEME)?
            .map(|id| Theme::from_id(&id))
            .unwrap_or_default())
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.set(KEY_THEME, theme.id())
    }

    // ── Backing file ──────────────────────────────────────────────────

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(PadError::store(&self.path, e)),
        };
        serde_json::from_str(&raw).map_err(|e| PadError::store_format(&self.path, e))
    }

    /// Write-through via a temp file + rename so a crash mid-write never
    /// leaves a truncated store behind.
    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| PadError::store(&self.path, e))?;
            }
        }
        let json = serde_json::to_string_pretty(map)
            .map_err(|e| PadError::store_format(&self.path, e))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| PadError::store(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| PadError::store(&self.path, e))
    }
}
