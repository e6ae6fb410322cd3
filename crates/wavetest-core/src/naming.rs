//! Route name to test file derivation
//!
//! Dotted route names map onto the `tests/Feature` layout: the first
//! dot-segment names the folder, the remaining segments collapse into the
//! file name. `admin-panel.user-management.list` becomes
//! `AdminPanel/UserManagementListTest.php`.

use crate::error::{WaveError, WaveResult};

/// Suffix carried by every generated test class and file name.
pub const TEST_SUFFIX: &str = "Test";

/// Folder and file name derived from a route name.
///
/// `file` already carries the `Test` suffix and no extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFileName {
    pub folder: String,
    pub file: String,
}

/// Derive the target folder and file name for a route name.
///
/// Fails unless the name has at least two dot-segments and every segment
/// survives PascalCasing (a leading, trailing, or doubled `.` or `-`
/// leaves an empty piece behind and is rejected rather than producing
/// garbage identifiers).
pub fn derive_test_file(route_name: &str) -> WaveResult<TestFileName> {
    let segments: Vec<&str> = route_name.split('.').collect();
    if segments.len() < 2 {
        return Err(WaveError::invalid_route_name(route_name));
    }

    let folder = pascal_case(segments[0])
        .ok_or_else(|| WaveError::invalid_route_name(route_name))?;

    let mut file = String::new();
    for segment in &segments[1..] {
        let part = pascal_case(segment)
            .ok_or_else(|| WaveError::invalid_route_name(route_name))?;
        file.push_str(&part);
    }
    file.push_str(TEST_SUFFIX);

    Ok(TestFileName { folder, file })
}

/// Capitalize each hyphen piece and join with no separator.
///
/// Returns `None` when the segment or any piece is empty.
fn pascal_case(segment: &str) -> Option<String> {
    if segment.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(segment.len());
    for piece in segment.split('-') {
        let mut chars = piece.chars();
        let first = chars.next()?;
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    Some(out)
}
