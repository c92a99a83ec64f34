//! Package name grammar errors

use super::RemokError;

/// Creates a malformed package name error
pub fn malformed(name: impl Into<String>, reason: impl Into<String>) -> RemokError {
    RemokError::MalformedName {
        name: name.into(),
        reason: reason.into(),
    }
}
