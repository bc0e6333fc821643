//! File scanning and collection functionality

pub mod file_scanner;

pub use file_scanner::{collect_swift_files, SWIFT_SUFFIX};
