//! Configuration errors

use super::RemokError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> RemokError {
    RemokError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> RemokError {
    RemokError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> RemokError {
    RemokError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
