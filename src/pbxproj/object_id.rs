//! Xcode object identifier generation

use uuid::Uuid;

/// Length of a project.pbxproj object identifier
const OBJECT_ID_LEN: usize = 24;

/// Generate a unique 24-character hex string for Xcode
///
/// Xcode identifies every entry in project.pbxproj with a 96-bit
/// uppercase-hex object ID. Fresh IDs let a new file be referenced from the
/// PBXBuildFile and PBXFileReference sections by hand.
pub fn generate_object_id() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    hex[..OBJECT_ID_LEN].to_string()
}
