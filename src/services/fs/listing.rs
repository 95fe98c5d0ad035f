use crate::core::errors::{Error, Result};
use crate::models::EntryDescriptor;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Builds one descriptor per immediate child of `dir`, in enumeration order.
///
/// All or nothing: the first enumeration or metadata failure aborts the whole
/// listing with [`Error::ListingFailed`].
pub fn list_dir(dir: &Path) -> Result<Vec<EntryDescriptor>> {
    list_dir_impl(dir).map_err(|e| Error::listing_failed(dir, e))
}

fn list_dir_impl(dir: &Path) -> Result<Vec<EntryDescriptor>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push(EntryDescriptor::from_path(&entry.path())?);
    }
    debug!(path = %dir.display(), count = entries.len(), "listed directory");
    Ok(entries)
}
