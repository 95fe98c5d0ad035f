use std::path::PathBuf;
use tracing::debug;

/// Filesystem roots offered for direct navigation, in the order the platform reports them.
pub fn discover_roots() -> Vec<PathBuf> {
    let roots = platform_roots();
    debug!(count = roots.len(), "discovered filesystem roots");
    roots
}

#[cfg(windows)]
fn platform_roots() -> Vec<PathBuf> {
    (b'A'..=b'Z')
        .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
        .filter(|root| root.exists())
        .collect()
}

#[cfg(not(windows))]
fn platform_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("/")]
}
