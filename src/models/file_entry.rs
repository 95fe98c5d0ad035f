use crate::core::errors::{Error, Result};
use std::fs;
use std::path::Path;
use time::OffsetDateTime;

/// Size reported for directories by [`EntryDescriptor::size`].
pub const DIR_SIZE_SENTINEL: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File { size: u64 },
    Directory,
}

impl EntryKind {
    /// Single-letter label shown in the kind column.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File { .. } => "F",
            EntryKind::Directory => "D",
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// Metadata snapshot of one directory entry, taken when the listing was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDescriptor {
    name: String,
    kind: EntryKind,
    last_modified: OffsetDateTime,
}

impl EntryDescriptor {
    /// Stats `path` (following symlinks). Any metadata failure yields
    /// [`Error::EntryUnavailable`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let unavailable = |source| Error::EntryUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let md = fs::metadata(path).map_err(unavailable)?;
        let modified = md.modified().map_err(unavailable)?;

        let kind = if md.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File { size: md.len() }
        };

        Ok(Self {
            name: file_name(path),
            kind,
            last_modified: OffsetDateTime::from(modified).to_offset(time::UtcOffset::UTC),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Byte count for files, [`DIR_SIZE_SENTINEL`] for directories.
    pub fn size(&self) -> i64 {
        match self.kind {
            EntryKind::File { size } => i64::try_from(size).unwrap_or(i64::MAX),
            EntryKind::Directory => DIR_SIZE_SENTINEL,
        }
    }

    pub fn last_modified(&self) -> OffsetDateTime {
        self.last_modified
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
