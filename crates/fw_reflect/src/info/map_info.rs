use crate::Reflect;
use crate::info::{DefaultFn, Type, TypeInfo, TypePath, Typed};

/// Type information of a key-value collection, such as `BTreeMap<K, V>`.
///
/// Keys never appear in field paths; only values are walked.
#[derive(Debug)]
pub struct MapInfo {
    ty: Type,
    default: DefaultFn,
    key_ty: Type,
    value_ty: Type,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    #[inline]
    pub fn new<T: TypePath + Reflect + Default, K: TypePath, V: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            default: super::type_info::default_fn::<T>,
            key_ty: Type::of::<K>(),
            value_ty: Type::of::<V>(),
            value_info: V::type_info,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn key_ty(&self) -> &Type {
        &self.key_ty
    }

    #[inline]
    pub fn value_ty(&self) -> &Type {
        &self.value_ty
    }

    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }

    pub(super) fn default_fn(&self) -> DefaultFn {
        self.default
    }
}
