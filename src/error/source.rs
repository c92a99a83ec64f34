//! Package listing errors

use super::RemokError;

/// Creates a listing failed error
pub fn listing_failed(command: impl Into<String>, reason: impl Into<String>) -> RemokError {
    RemokError::ListingFailed {
        command: command.into(),
        reason: reason.into(),
    }
}
