use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

// Import from our modularized library
use xcode_setup_rs::prelude::*;

/// Project root scanned when no directory argument is given
const DEFAULT_PROJECT_DIR: &str = ".";

#[derive(Parser)]
#[command(name = "xcode_setup_rs")]
#[command(about = "Scans Swift sources and prints Xcode project setup steps", long_about = None)]
struct Cli {
    /// Project root directory containing the .xcodeproj
    #[arg(default_value = DEFAULT_PROJECT_DIR)]
    project_dir: PathBuf,

    /// App target name (default: basename of the project directory)
    #[arg(short = 'n', long)]
    project_name: Option<String>,

    /// Write the guide to a file in addition to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit a machine-readable JSON manifest instead of the text guide
    #[arg(long)]
    json: bool,

    /// Print a generated pbxproj object ID next to each file
    #[arg(long)]
    suggest_ids: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_dir = cli.project_dir.canonicalize().with_context(|| {
        format!("Project directory not found: {}", cli.project_dir.display())
    })?;

    let project_name = match cli.project_name {
        Some(name) => name,
        None => project_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .context("Project directory has no usable name; pass --project-name")?,
    };

    // App sources live in a folder named after the target, next to the .xcodeproj
    let source_root = project_dir.join(&project_name);

    let swift_files = collect_swift_files(&source_root, cli.verbose)
        .with_context(|| format!("Failed to scan {}", source_root.display()))?;

    if swift_files.is_empty() {
        println!("No Swift files found under {}", source_root.display());
        return Ok(());
    }

    let stdout = io::stdout();

    if cli.json {
        let manifest = SetupManifest::from_scan(&project_name, &source_root, &swift_files);
        write_manifest(&mut stdout.lock(), &manifest)?;

        if let Some(ref output) = cli.output {
            write_manifest_file(output, &manifest)?;
            eprintln!("Manifest saved to: {}", output.display());
        }
        return Ok(());
    }

    let ctx = GuideContext {
        project_dir,
        project_name,
        suggest_ids: cli.suggest_ids,
    };

    write_guide(&mut stdout.lock(), &ctx, &swift_files)?;

    if let Some(ref output) = cli.output {
        write_guide_file(output, &ctx, &swift_files)?;
        println!("Guide saved to: {}", output.display());
    }

    Ok(())
}
