//! Client error types.

use std::fmt;

use clubevents_core::{DateError, DirectoryError, GalleryError};

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// Content file could not be read or parsed.
    Content(String),
    /// Event content failed validation.
    Directory(DirectoryError),
    /// Gallery content failed validation.
    Gallery(GalleryError),
    /// IO error.
    Io(std::io::Error),
    /// No event with the requested id.
    NotFound(String),
    /// A command-line argument could not be interpreted.
    InvalidArgument(String),
    /// Action failed (open, copy, etc).
    Action(String),
    /// Output could not be rendered.
    Output(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Content(msg) => write!(f, "content error: {}", msg),
            Self::Directory(err) => write!(f, "invalid event directory: {}", err),
            Self::Gallery(err) => write!(f, "invalid gallery: {}", err),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::NotFound(id) => write!(f, "no event with id {:?}", id),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Self::Action(msg) => write!(f, "action failed: {}", msg),
            Self::Output(msg) => write!(f, "output error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Directory(err) => Some(err),
            Self::Gallery(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<DirectoryError> for ClientError {
    fn from(err: DirectoryError) -> Self {
        Self::Directory(err)
    }
}

impl From<GalleryError> for ClientError {
    fn from(err: GalleryError) -> Self {
        Self::Gallery(err)
    }
}

impl From<DateError> for ClientError {
    fn from(err: DateError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
