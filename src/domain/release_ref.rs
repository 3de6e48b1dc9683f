//! Mapping of version tags onto release branches.

use crate::domain::AppError;

const RELEASE_PREFIX: &str = "release-";

/// Derive the release branch ref for a version tag.
///
/// `v1.11.7` becomes `release-1.11`. Only the first `v` is dropped and the
/// string is split on `.` without further validation, so pre-release tags
/// such as `v1.12.0-beta.1` still map onto `release-1.12`.
pub fn release_branch_for(version: &str) -> Result<String, AppError> {
    let stripped = version.replacen('v', "", 1);
    let segments: Vec<&str> = stripped.split('.').collect();

    if segments.len() < 2 {
        return Err(AppError::UnrecognizedVersion(version.to_string()));
    }

    Ok(format!("{}{}.{}", RELEASE_PREFIX, segments[0], segments[1]))
}
