//! Path helpers
//!
//! Headers in the output show each file the way the walk reached it, minus
//! any leading `./` component.

use std::path::{Component, Path, PathBuf};

/// Path of a visited entry as written in its block header
pub fn display_path(path: &Path) -> String {
    let mut components = path.components().peekable();
    while let Some(Component::CurDir) = components.peek() {
        components.next();
    }

    let cleaned: PathBuf = components.collect();
    if cleaned.as_os_str().is_empty() {
        return ".".to_string();
    }
    cleaned.to_string_lossy().into_owned()
}

/// Whether the file name ends with the given suffix (case-sensitive)
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}

/// Whether two paths point at the same file on disk
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_strips_leading_curdir() {
        assert_eq!(display_path(Path::new("./a.txt")), "a.txt");
        assert_eq!(display_path(Path::new("./src/main.rs")), "src/main.rs");
    }

    #[test]
    fn test_display_path_keeps_absolute() {
        assert_eq!(display_path(Path::new("/srv/x/a.txt")), "/srv/x/a.txt");
    }

    #[test]
    fn test_display_path_keeps_relative_root() {
        assert_eq!(display_path(Path::new("docs/intro.md")), "docs/intro.md");
        assert_eq!(display_path(Path::new("../sibling/a.go")), "../sibling/a.go");
    }

    #[test]
    fn test_display_path_bare_curdir() {
        assert_eq!(display_path(Path::new(".")), ".");
    }

    #[test]
    fn test_has_suffix_is_case_sensitive() {
        assert!(has_suffix(Path::new("cmd/main.go"), ".go"));
        assert!(!has_suffix(Path::new("cmd/main.GO"), ".go"));
    }

    #[test]
    fn test_has_suffix_matches_whole_name() {
        assert!(has_suffix(Path::new("notes.txt"), "s.txt"));
        assert!(has_suffix(Path::new("Makefile"), "file"));
        assert!(has_suffix(Path::new("anything"), ""));
    }

    #[test]
    fn test_is_same_file() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("out.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(is_same_file(&file, &temp.path().join(".").join("out.txt")));
        assert!(!is_same_file(&file, &temp.path().join("missing.txt")));
    }
}
