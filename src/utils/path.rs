//! Path normalization helpers.

use std::path::{Path, PathBuf};

/// Normalize a path to an absolute form.
///
/// Canonicalizes when the path exists; otherwise joins relative paths
/// onto the current working directory without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_absolute_nonexistent() {
        let path = Path::new("/nonexistent/site/public");
        assert_eq!(normalize_path(path), PathBuf::from("/nonexistent/site/public"));
    }

    #[test]
    fn test_normalize_relative_nonexistent() {
        let normalized = normalize_path(Path::new("does-not-exist/data"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("does-not-exist/data"));
    }
}
