//! Read-only discovery of the generated test tree

use crate::error::{WaveError, WaveResult};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// All directories under `root` at any depth, as relative paths.
///
/// Deduplicated and sorted so repeated runs visit folders in the same
/// order. An existing but empty root yields an empty list; a missing root
/// is an error.
pub fn subfolders_recursive(root: &Path) -> WaveResult<Vec<String>> {
    if !root.is_dir() {
        return Err(WaveError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut folders = BTreeSet::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        if entry.file_type().is_dir() {
            if let Ok(relative) = entry.path().strip_prefix(root) {
                folders.insert(relative.to_string_lossy().into_owned());
            }
        }
    }

    Ok(folders.into_iter().collect())
}

/// File names directly inside `folder` with the given extension.
///
/// A missing folder yields an empty list, not an error. Does not recurse.
/// Names come back sorted.
pub fn immediate_files_with_extension(folder: &Path, extension: &str) -> Vec<String> {
    let Ok(entries) = fs::read_dir(folder) else {
        return Vec::new();
    };

    let mut files: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|found| found == extension)
        })
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_subfolders_lists_every_folder_once() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Folder1")).unwrap();
        fs::create_dir_all(dir.path().join("Folder2")).unwrap();
        fs::write(dir.path().join("Folder1/Test1Test.php"), "<?php").unwrap();
        fs::write(dir.path().join("Folder1/Helper.php"), "<?php").unwrap();
        fs::write(dir.path().join("Folder2/Test2Test.php"), "<?php").unwrap();

        let folders = subfolders_recursive(dir.path()).unwrap();
        assert_eq!(folders, vec!["Folder1".to_string(), "Folder2".to_string()]);
    }

    #[test]
    fn test_subfolders_descends_into_nested_folders() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Outer/Inner")).unwrap();

        let folders = subfolders_recursive(dir.path()).unwrap();
        let inner = Path::new("Outer").join("Inner");
        assert_eq!(
            folders,
            vec!["Outer".to_string(), inner.to_string_lossy().into_owned()]
        );
    }

    #[test]
    fn test_subfolders_empty_root_is_valid() {
        let dir = tempdir().unwrap();
        assert!(subfolders_recursive(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_subfolders_missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let error = subfolders_recursive(&missing).unwrap_err();
        assert!(matches!(error, WaveError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_immediate_files_filters_by_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Test1Test.php"), "<?php").unwrap();
        fs::write(dir.path().join("Helper.php"), "<?php").unwrap();
        fs::write(dir.path().join("notes.txt"), "notes").unwrap();

        let files = immediate_files_with_extension(dir.path(), "php");
        assert_eq!(files, vec!["Helper.php".to_string(), "Test1Test.php".to_string()]);
    }

    #[test]
    fn test_immediate_files_does_not_recurse() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Nested")).unwrap();
        fs::write(dir.path().join("Nested/DeepTest.php"), "<?php").unwrap();

        assert!(immediate_files_with_extension(dir.path(), "php").is_empty());
    }

    #[test]
    fn test_immediate_files_missing_folder_is_empty() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(immediate_files_with_extension(&missing, "php").is_empty());
    }
}
