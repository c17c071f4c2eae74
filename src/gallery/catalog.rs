// SPDX-License-Identifier: MPL-2.0
//! Catalog scanning: finds the image files that make up the photo wall.
//!
//! The scan is non-recursive and name-sorted so the catalog is stable across
//! launches; the per-launch randomness comes from the shuffle, not the scan.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// File extensions accepted into the catalog (lowercase).
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Checks whether a path has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Scans a directory for supported image files, sorted by file name.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_catalog(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to create test file");
        path
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("b.JPEG")));
        assert!(is_supported_image(Path::new("c.Png")));
        assert!(!is_supported_image(Path::new("d.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn scan_catalog_finds_images_sorted_by_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let b = create_file(temp_dir.path(), "b.png");
        let a = create_file(temp_dir.path(), "a.jpg");
        let c = create_file(temp_dir.path(), "c.webp");
        create_file(temp_dir.path(), "notes.txt");

        let catalog = scan_catalog(temp_dir.path()).expect("scan failed");

        assert_eq!(catalog, vec![a, b, c]);
    }

    #[test]
    fn scan_catalog_skips_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("nested.jpg")).expect("failed to create dir");
        let img = create_file(temp_dir.path(), "only.png");

        let catalog = scan_catalog(temp_dir.path()).expect("scan failed");

        assert_eq!(catalog, vec![img]);
    }

    #[test]
    fn scan_catalog_returns_empty_for_empty_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let catalog = scan_catalog(temp_dir.path()).expect("scan failed");
        assert!(catalog.is_empty());
    }

    #[test]
    fn scan_catalog_errors_on_missing_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does-not-exist");
        assert!(scan_catalog(&missing).is_err());
    }
}
