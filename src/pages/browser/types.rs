#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Kind,
    Name,
    Size,
    Modified,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "kind" | "type" => Some(SortKey::Kind),
            "name" => Some(SortKey::Name),
            "size" => Some(SortKey::Size),
            "modified" | "date" => Some(SortKey::Modified),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}
