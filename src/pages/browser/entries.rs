use super::types::{SortDirection, SortKey};
use crate::models::{EntryDescriptor, EntryKind};
use std::cmp::Ordering;

/// Stable sort by a single column; ties keep their listing order.
pub fn sort_entries(entries: &mut [EntryDescriptor], key: SortKey, direction: SortDirection) {
    entries.sort_by(|a, b| {
        let order = compare(a, b, key);
        match direction {
            SortDirection::Ascending => order,
            SortDirection::Descending => order.reverse(),
        }
    });
}

fn compare(a: &EntryDescriptor, b: &EntryDescriptor, key: SortKey) -> Ordering {
    match key {
        // "D" < "F": directories group ahead of files
        SortKey::Kind => a.kind().label().cmp(b.kind().label()),
        SortKey::Name => a.name().cmp(b.name()),
        SortKey::Size => size_rank(a).cmp(&size_rank(b)),
        // whole seconds, the resolution of the modified column
        SortKey::Modified => a
            .last_modified()
            .unix_timestamp()
            .cmp(&b.last_modified().unix_timestamp()),
    }
}

/// Directories rank below every file, including empty ones.
fn size_rank(entry: &EntryDescriptor) -> Option<u64> {
    match entry.kind() {
        EntryKind::File { size } => Some(size),
        EntryKind::Directory => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    fn names(entries: &[EntryDescriptor]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    fn fixture(root: &Path) -> Vec<EntryDescriptor> {
        fs::write(root.join("b.txt"), vec![0u8; 10]).unwrap();
        fs::create_dir(root.join("zdir")).unwrap();
        fs::write(root.join("a.txt"), vec![0u8; 0]).unwrap();
        fs::create_dir(root.join("adir")).unwrap();
        ["b.txt", "zdir", "a.txt", "adir"]
            .iter()
            .map(|n| EntryDescriptor::from_path(&root.join(n)).unwrap())
            .collect()
    }

    #[test]
    fn kind_groups_directories_first_and_keeps_order() {
        let dir = tempdir().unwrap();
        let mut entries = fixture(dir.path());

        sort_entries(&mut entries, SortKey::Kind, SortDirection::Ascending);
        assert_eq!(names(&entries), vec!["zdir", "adir", "b.txt", "a.txt"]);

        sort_entries(&mut entries, SortKey::Kind, SortDirection::Descending);
        assert_eq!(names(&entries), vec!["b.txt", "a.txt", "zdir", "adir"]);
    }

    #[test]
    fn size_places_directories_below_empty_files() {
        let dir = tempdir().unwrap();
        let mut entries = fixture(dir.path());

        sort_entries(&mut entries, SortKey::Size, SortDirection::Ascending);
        assert_eq!(names(&entries), vec!["zdir", "adir", "a.txt", "b.txt"]);
    }

    #[test]
    fn modified_ties_within_a_second_keep_listing_order() {
        let dir = tempdir().unwrap();
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        for (name, nanos) in [("late", 900_000_000), ("early", 100_000_000)] {
            let file = fs::File::create(dir.path().join(name)).unwrap();
            file.set_modified(base + Duration::from_nanos(nanos)).unwrap();
        }
        let mut entries: Vec<_> = ["late", "early"]
            .iter()
            .map(|n| EntryDescriptor::from_path(&dir.path().join(n)).unwrap())
            .collect();

        sort_entries(&mut entries, SortKey::Modified, SortDirection::Ascending);
        assert_eq!(names(&entries), vec!["late", "early"]);
    }

    #[test]
    fn name_is_case_sensitive_lexicographic() {
        let dir = tempdir().unwrap();
        let mut entries = fixture(dir.path());

        sort_entries(&mut entries, SortKey::Name, SortDirection::Ascending);
        assert_eq!(names(&entries), vec!["a.txt", "adir", "b.txt", "zdir"]);
    }
}
