use crate::core::errors::{Error, Result};
use crate::models::EntryDescriptor;
use crate::services::fs::{listing, paths, roots};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod columns;
mod entries;
pub mod types;

pub use columns::{Column, Row, COLUMNS};
pub use types::{SortDirection, SortKey};

/// Navigation and sort state of the single directory table.
#[derive(Debug)]
pub struct DirectoryView {
    current_path: PathBuf,
    entries: Vec<EntryDescriptor>,
    root_options: Vec<PathBuf>,
    sort_key: SortKey,
    sort_direction: SortDirection,
}

impl DirectoryView {
    /// View with no listing loaded yet. Roots are discovered here, once.
    pub fn new() -> Self {
        Self::with_roots(roots::discover_roots())
    }

    pub fn with_roots(root_options: Vec<PathBuf>) -> Self {
        Self {
            current_path: PathBuf::new(),
            entries: Vec::new(),
            root_options,
            sort_key: SortKey::Kind,
            sort_direction: SortDirection::Ascending,
        }
    }

    /// Discovers roots and lists `start`. The view is returned even when the first
    /// listing fails so the caller can surface the error and keep navigating.
    pub fn initialize(start: &Path) -> (Self, Result<()>) {
        let mut view = Self::new();
        let loaded = view.list(start);
        (view, loaded)
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn entries(&self) -> &[EntryDescriptor] {
        &self.entries
    }

    pub fn root_options(&self) -> &[PathBuf] {
        &self.root_options
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn columns(&self) -> &'static [Column] {
        &COLUMNS
    }

    pub fn rows(&self) -> Vec<Row> {
        self.entries.iter().map(Row::from).collect()
    }

    /// Replaces the listing with the children of `path`.
    ///
    /// `current_path` is updated before enumeration, so after a failure it names
    /// the directory that could not be listed and `entries` is empty.
    pub fn list(&mut self, path: &Path) -> Result<()> {
        self.entries.clear();
        self.set_attempted_path(path, paths::normalize(path))?;

        let mut entries = listing::list_dir(&self.current_path)?;
        entries::sort_entries(&mut entries, self.sort_key, self.sort_direction);
        self.entries = entries;
        info!(path = %self.current_path.display(), count = self.entries.len(), "listing loaded");
        Ok(())
    }

    /// Records the path being listed; without a working directory to resolve against,
    /// the lexical form is shown instead.
    fn set_attempted_path(&mut self, path: &Path, normalized: Result<PathBuf>) -> Result<()> {
        match normalized {
            Ok(p) => {
                self.current_path = p;
                Ok(())
            }
            Err(e) => {
                self.current_path = paths::normalize_lexically(path);
                Err(Error::listing_failed(path, e))
            }
        }
    }

    pub fn refresh(&mut self) -> Result<()> {
        let path = self.current_path.clone();
        self.list(&path)
    }

    /// Lists `name` under the current path if it is a directory. Returns whether
    /// navigation happened.
    pub fn navigate_into(&mut self, name: &str) -> Result<bool> {
        let target = self.current_path.join(name);
        if !target.is_dir() {
            return Ok(false);
        }
        self.list(&target)?;
        Ok(true)
    }

    /// Lists the parent directory; a no-op at a root.
    pub fn navigate_up(&mut self) -> Result<bool> {
        let Some(parent) = self.current_path.parent().map(Path::to_path_buf) else {
            return Ok(false);
        };
        self.list(&parent)?;
        Ok(true)
    }

    pub fn select_root(&mut self, root: &Path) -> Result<()> {
        self.list(root)
    }

    /// Header-click semantics: the active key flips direction, another key
    /// becomes active ascending.
    pub fn sort_by(&mut self, key: SortKey) {
        let direction = if self.sort_key == key {
            self.sort_direction.toggled()
        } else {
            SortDirection::Ascending
        };
        self.set_sort(key, direction);
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
        entries::sort_entries(&mut self.entries, key, direction);
    }
}

impl Default for DirectoryView {
    fn default() -> Self {
        Self::new()
    }
}
