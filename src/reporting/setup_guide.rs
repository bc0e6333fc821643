//! Setup guide formatting
//!
//! Groups discovered files by parent directory and renders the manual
//! integration steps the user performs in Xcode.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::pbxproj::generate_object_id;

/// Group key for files with no parent directory component
pub const ROOT_GROUP: &str = "Root";

const BANNER: &str = "============================================================";

/// Everything the guide interpolates besides the file list
#[derive(Debug, Clone)]
pub struct GuideContext {
    /// Resolved project root, printed in the `cd` step
    pub project_dir: PathBuf,
    /// App target name, used for the .xcodeproj and navigator folder
    pub project_name: String,
    /// Append a generated pbxproj object ID to each listed file
    pub suggest_ids: bool,
}

/// Partition relative file paths by their parent-directory component
///
/// Paths with no directory component fall into the [`ROOT_GROUP`] sentinel.
/// Keys iterate in sorted order; member lists keep the input order.
pub fn group_by_directory(files: &[PathBuf]) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for path in files {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        let dir_name = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_else(|| ROOT_GROUP.to_string());
        groups.entry(dir_name).or_default().push(name);
    }

    groups
}

/// Distinct non-root parent directories observed in the file list
pub fn parent_folders(files: &[PathBuf]) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|path| path.parent())
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.to_string_lossy().into_owned())
        .collect()
}

/// Write the full setup guide
///
/// # Arguments
/// * `out` - Destination writer (stdout or a guide file)
/// * `ctx` - Project name, resolved path, and rendering options
/// * `files` - Sorted relative paths from the scanner
pub fn write_guide<W: Write>(out: &mut W, ctx: &GuideContext, files: &[PathBuf]) -> Result<()> {
    writeln!(out, "📱 {} - Xcode Project Setup Helper\n", ctx.project_name)?;
    writeln!(out, "{}", BANNER)?;

    writeln!(out, "\n✅ Found {} Swift files:\n", files.len())?;

    for (dir_name, names) in group_by_directory(files) {
        writeln!(out, "📁 {}", dir_name)?;
        for name in &names {
            if ctx.suggest_ids {
                writeln!(out, "   └─ {} ({})", name, generate_object_id())?;
            } else {
                writeln!(out, "   └─ {}", name)?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", BANNER)?;
    writeln!(out, "\n⚠️  MANUAL STEPS REQUIRED:\n")?;
    writeln!(out, "Since modifying .pbxproj files programmatically is complex,")?;
    writeln!(out, "please follow these steps in Xcode:\n")?;

    writeln!(out, "1️⃣  Open Xcode:")?;
    writeln!(out, "   cd {}", ctx.project_dir.display())?;
    writeln!(out, "   open {}.xcodeproj\n", ctx.project_name)?;

    writeln!(out, "2️⃣  Add files to project:")?;
    writeln!(
        out,
        "   • Right-click on '{}' folder in Project Navigator",
        ctx.project_name
    )?;
    writeln!(out, "   • Select 'Add Files to {}...'", ctx.project_name)?;
    writeln!(out, "   • Select these folders:")?;
    for dir_name in parent_folders(files) {
        writeln!(out, "     ✓ {}", dir_name)?;
    }
    writeln!(out, "   • Check 'Copy items if needed'")?;
    writeln!(out, "   • Check '{}' target", ctx.project_name)?;
    writeln!(out, "   • Click 'Add'\n")?;

    writeln!(out, "3️⃣  Delete old files:")?;
    writeln!(out, "   • Find 'ContentView.swift' in navigator")?;
    writeln!(out, "   • Right-click → Delete → Move to Trash\n")?;

    writeln!(out, "4️⃣  Verify Info.plist:")?;
    writeln!(out, "   • Check that Info.plist exists in {} folder", ctx.project_name)?;
    writeln!(out, "   • Should contain location permission descriptions\n")?;

    writeln!(out, "5️⃣  Build and run:")?;
    writeln!(out, "   • Select a simulator (iOS 17+)")?;
    writeln!(out, "   • Press Cmd + R\n")?;

    writeln!(out, "{}", BANNER)?;
    writeln!(out, "\n📚 For detailed instructions, see:")?;
    writeln!(out, "   • SETUP_GUIDE.md")?;
    writeln!(out, "   • README.md\n")?;

    writeln!(out, "✨ Project structure is ready!")?;
    writeln!(out, "   Just follow the manual steps above to complete setup.\n")?;

    Ok(())
}

/// Write the setup guide to a file
pub fn write_guide_file(path: &Path, ctx: &GuideContext, files: &[PathBuf]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create guide file {}", path.display()))?;
    write_guide(&mut file, ctx, files)
}
