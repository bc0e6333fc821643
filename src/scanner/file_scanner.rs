//! Swift file scanning and collection

use anyhow::Result;
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File-name suffix selecting the files to report on
pub const SWIFT_SUFFIX: &str = ".swift";

lazy_static! {
    /// Directory names skipped during traversal, at any nesting depth.
    ///
    /// Matched by exact name, not by suffix: a directory named
    /// `Assets.xcassets` is still walked, only one named `.xcassets` is not.
    static ref EXCLUDED_DIRS: HashSet<&'static str> =
        [".git", ".build", "DerivedData", ".xcassets"].into_iter().collect();
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| EXCLUDED_DIRS.contains(name))
            .unwrap_or(false)
}

/// Collect all Swift files under a source root
///
/// # Arguments
/// * `root` - Source directory to scan
/// * `verbose` - Report skipped directories on stderr
///
/// # Returns
/// Lexicographically sorted vector of file paths relative to `root`
pub fn collect_swift_files(root: &Path, verbose: bool) -> Result<Vec<PathBuf>> {
    let mut swift_files = Vec::new();

    let walker = WalkDir::new(root).follow_links(false).into_iter();
    for entry in walker.filter_entry(|e| {
        if is_excluded_dir(e) {
            if verbose {
                eprintln!("Skipping excluded directory: {}", e.path().display());
            }
            return false;
        }
        true
    }) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_swift = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(SWIFT_SUFFIX))
            .unwrap_or(false);
        if is_swift {
            swift_files.push(entry.path().strip_prefix(root)?.to_path_buf());
        }
    }

    swift_files.sort();
    Ok(swift_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap();
    }

    #[test]
    fn test_collects_only_swift_files() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("AppMain.swift"));
        touch(&temp_dir.path().join("README.md"));
        touch(&temp_dir.path().join("Info.plist"));

        let files = collect_swift_files(temp_dir.path(), false).unwrap();
        assert_eq!(files, vec![PathBuf::from("AppMain.swift")]);
    }

    #[test]
    fn test_returns_sorted_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("Views/MapScreen.swift"));
        touch(&temp_dir.path().join("Models/Report.swift"));
        touch(&temp_dir.path().join("AppMain.swift"));

        let files = collect_swift_files(temp_dir.path(), false).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("AppMain.swift"),
                PathBuf::from("Models/Report.swift"),
                PathBuf::from("Views/MapScreen.swift"),
            ]
        );
    }

    #[test]
    fn test_excluded_dirs_skipped_at_any_depth() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("Sources/Feature/View.swift"));
        touch(&temp_dir.path().join(".git/hooks/Hook.swift"));
        touch(&temp_dir.path().join("Sources/.build/Generated.swift"));
        touch(&temp_dir.path().join("Sources/DerivedData/Stale.swift"));

        let files = collect_swift_files(temp_dir.path(), false).unwrap();
        assert_eq!(files, vec![PathBuf::from("Sources/Feature/View.swift")]);
    }

    #[test]
    fn test_exclusion_is_by_exact_name() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("Assets.xcassets/Contents.swift"));

        let files = collect_swift_files(temp_dir.path(), false).unwrap();
        assert_eq!(files, vec![PathBuf::from("Assets.xcassets/Contents.swift")]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("NoSuchApp");

        assert!(collect_swift_files(&missing, false).is_err());
    }
}
