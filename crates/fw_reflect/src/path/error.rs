use thiserror::Error;

/// A field path could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid field path {path:?} at offset {offset}: {reason}")]
pub struct PathParseError {
    /// Byte offset of the offending segment.
    pub offset: usize,
    pub path: String,
    pub reason: &'static str,
}

impl PathParseError {
    #[inline]
    pub(super) fn new(path: &str, offset: usize, reason: &'static str) -> Self {
        Self {
            offset,
            path: path.to_owned(),
            reason,
        }
    }
}
