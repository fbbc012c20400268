use core::fmt;

use thiserror::Error;

/// The shape of a reflected value.
///
/// The walker descends into every kind except [`ReflectKind::Opaque`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A struct with named fields, see [`Struct`](crate::ops::Struct).
    Struct,
    /// A value that may be absent, see [`Optional`](crate::ops::Optional).
    Optional,
    /// A growable sequence, see [`List`](crate::ops::List).
    List,
    /// A key-value collection, see [`Map`](crate::ops::Map).
    Map,
    /// A leaf value: scalars, strings and domain value types.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReflectKind::Struct => "struct",
            ReflectKind::Optional => "optional",
            ReflectKind::List => "list",
            ReflectKind::Map => "map",
            ReflectKind::Opaque => "opaque",
        })
    }
}

/// Returned by the `as_*` casts of [`TypeInfo`](crate::info::TypeInfo).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}
