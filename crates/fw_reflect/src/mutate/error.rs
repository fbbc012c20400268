use core::fmt;

use thiserror::Error;

use crate::coerce::CoerceError;
use crate::path::PathParseError;
use crate::registry::ConversionError;

/// The operation that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Set,
    Unset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Set => "set",
            Action::Unset => "unset",
        })
    }
}

/// Error returned by [`set_string`](crate::set_string) and
/// [`unset`](crate::unset).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    #[error(transparent)]
    Parse(#[from] PathParseError),
    #[error("field {path} not found in {type_name}")]
    NotFound {
        path: String,
        type_name: &'static str,
    },
    #[error("cannot {action} field {path:?} (marked immutable)")]
    Immutable { path: String, action: Action },
    #[error("cannot set field {path:?}: unhandled type {type_path:?}")]
    UnhandledType {
        path: String,
        type_path: &'static str,
    },
    #[error("cannot set field {path:?}: {source}")]
    Conversion {
        path: String,
        #[source]
        source: ConversionError,
    },
}

impl FieldError {
    pub(super) fn from_coerce(path: &str, err: CoerceError) -> Self {
        let path = path.to_owned();
        match err {
            CoerceError::Conversion(source) => Self::Conversion { path, source },
            CoerceError::UnhandledType { type_path } => Self::UnhandledType { path, type_path },
        }
    }

    /// The path the failed operation was addressed to.
    pub fn path(&self) -> &str {
        match self {
            Self::Parse(err) => &err.path,
            Self::NotFound { path, .. }
            | Self::Immutable { path, .. }
            | Self::UnhandledType { path, .. }
            | Self::Conversion { path, .. } => path,
        }
    }
}
