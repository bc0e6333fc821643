//! Machine-readable scan manifest

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::setup_guide::{group_by_directory, parent_folders};

/// Serializable snapshot of a completed scan
#[derive(Debug, Serialize, Deserialize)]
pub struct SetupManifest {
    pub project_name: String,
    pub source_root: PathBuf,
    pub file_count: usize,
    pub groups: BTreeMap<String, Vec<String>>,
    pub folders_to_add: Vec<String>,
}

impl SetupManifest {
    /// Build a manifest from the scanner's sorted relative paths
    pub fn from_scan(project_name: &str, source_root: &Path, files: &[PathBuf]) -> Self {
        Self {
            project_name: project_name.to_string(),
            source_root: source_root.to_path_buf(),
            file_count: files.len(),
            groups: group_by_directory(files),
            folders_to_add: parent_folders(files).into_iter().collect(),
        }
    }
}

/// Write the manifest as pretty-printed JSON
pub fn write_manifest<W: Write>(out: &mut W, manifest: &SetupManifest) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, manifest).context("Failed to serialize manifest")?;
    writeln!(out)?;
    Ok(())
}

/// Write the manifest to a file
pub fn write_manifest_file(path: &Path, manifest: &SetupManifest) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create manifest file {}", path.display()))?;
    write_manifest(&mut file, manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_round_trips() {
        let files = vec![
            PathBuf::from("Views/MapScreen.swift"),
            PathBuf::from("AppMain.swift"),
        ];
        let manifest = SetupManifest::from_scan("SpotFinder", Path::new("/work/SpotFinder"), &files);

        let mut buf = Vec::new();
        write_manifest(&mut buf, &manifest).unwrap();
        let parsed: SetupManifest = serde_json::from_slice(&buf).unwrap();

        assert_eq!(parsed.project_name, "SpotFinder");
        assert_eq!(parsed.file_count, 2);
        assert_eq!(parsed.groups["Views"], vec!["MapScreen.swift"]);
        assert_eq!(parsed.groups["Root"], vec!["AppMain.swift"]);
        assert_eq!(parsed.folders_to_add, vec!["Views".to_string()]);
    }
}
