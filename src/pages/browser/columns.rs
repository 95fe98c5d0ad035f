use super::types::SortKey;
use crate::models::{EntryDescriptor, EntryKind};
use serde::Serialize;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const MODIFIED_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

pub const DIR_SIZE_LABEL: &str = "[DIR]";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: SortKey,
    pub title: &'static str,
    /// Preferred width in pixels
    pub width: u16,
}

pub const COLUMNS: [Column; 4] = [
    Column {
        key: SortKey::Kind,
        title: "",
        width: 24,
    },
    Column {
        key: SortKey::Name,
        title: "Name",
        width: 200,
    },
    Column {
        key: SortKey::Size,
        title: "Size",
        width: 100,
    },
    Column {
        key: SortKey::Modified,
        title: "Modified",
        width: 150,
    },
];

/// Display strings for one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub kind_label: String,
    pub name: String,
    pub size_label: String,
    pub modified_label: String,
}

impl Row {
    pub fn cell(&self, key: SortKey) -> &str {
        match key {
            SortKey::Kind => &self.kind_label,
            SortKey::Name => &self.name,
            SortKey::Size => &self.size_label,
            SortKey::Modified => &self.modified_label,
        }
    }
}

impl From<&EntryDescriptor> for Row {
    fn from(entry: &EntryDescriptor) -> Self {
        Self {
            kind_label: entry.kind().label().to_string(),
            name: entry.name().to_string(),
            size_label: format_size(entry.kind()),
            modified_label: format_modified(entry.last_modified()),
        }
    }
}

pub fn format_size(kind: EntryKind) -> String {
    match kind {
        EntryKind::Directory => DIR_SIZE_LABEL.to_string(),
        EntryKind::File { size } => format!("{} bytes ", group_thousands(size)),
    }
}

pub fn format_modified(ts: OffsetDateTime) -> String {
    ts.to_offset(time::UtcOffset::UTC)
        .format(MODIFIED_FORMAT)
        .unwrap_or_else(|_| "-".to_string())
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
