//! Persistence of named collections as flat text files.
//!
//! A collection is one `<name>.txt` file inside the collections directory,
//! holding one image path per line in list order. The directory is created
//! lazily on first save; the application never deletes a collection.

use crate::config::{COLLECTION_EXTENSION, COLLECTIONS_DIR};
use crate::error::{AppError, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes collection files under a fixed root directory.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    root: PathBuf,
}

impl CollectionStore {
    /// Creates a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Lists the names of all saved collections (file stem of every `.txt`
    /// entry), sorted. Returns an empty list when the directory does not
    /// exist yet.
    pub fn list(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            debug!("Collections directory {:?} not present", self.root);
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .map(|ext| ext.eq_ignore_ascii_case(COLLECTION_EXTENSION))
                        .unwrap_or(false)
            })
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();

        names.sort();
        names
    }

    /// Saves a collection, overwriting any existing file of the same name.
    ///
    /// Rejects an empty path list and an empty (after trimming) name before
    /// touching the filesystem. The collections directory is created if
    /// missing. A failed write is reported as-is; partial writes are not
    /// rolled back.
    pub fn save(&self, name: &str, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Err(AppError::Validation(
                "There are no images to save.".to_string(),
            ));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Collection name must not be empty.".to_string(),
            ));
        }

        fs::create_dir_all(&self.root)?;

        let contents = paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        let file = self.file_for(name);
        fs::write(&file, contents)?;

        info!("Saved collection {:?} ({} paths)", name, paths.len());
        Ok(())
    }

    /// Loads a collection by name, returning its lines verbatim: no path
    /// validation, no de-duplication and no blank-line filtering. Callers
    /// must tolerate blank entries left by trailing newlines.
    pub fn load(&self, name: &str) -> Result<Vec<String>> {
        let file = self.file_for(name.trim());
        let contents = fs::read_to_string(&file)?;

        let lines: Vec<String> = contents.split('\n').map(str::to_string).collect();
        info!("Loaded collection {:?} ({} lines)", name, lines.len());
        Ok(lines)
    }

    fn file_for(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", name, COLLECTION_EXTENSION))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::new(COLLECTIONS_DIR)
    }
}
