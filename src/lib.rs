//! Xcode Project Setup Helper Library
//!
//! Scans an iOS project's Swift sources and produces manual setup
//! instructions for adding them to the Xcode project file.

pub mod scanner;
pub mod reporting;
pub mod pbxproj;

pub use scanner::file_scanner;
pub use reporting::setup_guide;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::scanner::file_scanner::{collect_swift_files, SWIFT_SUFFIX};
    pub use crate::reporting::setup_guide::{
        group_by_directory, parent_folders, write_guide, write_guide_file, GuideContext,
        ROOT_GROUP,
    };
    pub use crate::reporting::manifest::{write_manifest, write_manifest_file, SetupManifest};
    pub use crate::pbxproj::generate_object_id;
}
