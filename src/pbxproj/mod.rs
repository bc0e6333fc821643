//! Helpers for hand-editing Xcode project files

pub mod object_id;

pub use object_id::generate_object_id;
