use crate::Reflect;
use crate::info::{DefaultFn, Type, TypePath};
use crate::registry::ParseFn;

/// Type information of a leaf value.
///
/// An opaque type may declare how to build itself from text. Coercion falls
/// back to this when no parser is registered for the type.
#[derive(Debug)]
pub struct OpaqueInfo {
    ty: Type,
    default: DefaultFn,
    from_text: Option<ParseFn>,
}

impl OpaqueInfo {
    #[inline]
    pub fn new<T: TypePath + Reflect + Default>() -> Self {
        Self {
            ty: Type::of::<T>(),
            default: super::type_info::default_fn::<T>,
            from_text: None,
        }
    }

    #[inline]
    pub fn with_from_text(mut self, from_text: ParseFn) -> Self {
        self.from_text = Some(from_text);
        self
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn from_text(&self) -> Option<ParseFn> {
        self.from_text
    }

    pub(super) fn default_fn(&self) -> DefaultFn {
        self.default
    }
}
