use crate::info::{Type, TypeInfo, Typed};

/// A named member of a reflected struct.
///
/// `name` is the external name used in field paths (e.g. `maxPods`), while
/// `ident` is the Rust identifier (e.g. `max_pods`).
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    ident: &'static str,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
    immutable: bool,
}

impl NamedField {
    /// Create a writable field of type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str, ident: &'static str) -> Self {
        Self {
            name,
            ident,
            ty: Type::of::<T>(),
            type_info: T::type_info,
            immutable: false,
        }
    }

    /// Mark the field as immutable. Paths reaching it, or anything below it,
    /// cannot be set or unset.
    #[inline]
    pub fn with_immutable(mut self, immutable: bool) -> Self {
        self.immutable = immutable;
        self
    }

    /// The external name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The Rust identifier.
    #[inline]
    pub fn ident(&self) -> &'static str {
        self.ident
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub fn is_immutable(&self) -> bool {
        self.immutable
    }
}
