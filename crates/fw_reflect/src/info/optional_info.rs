use crate::Reflect;
use crate::info::{DefaultFn, Type, TypeInfo, TypePath, Typed};

/// Type information of a value that may be absent, such as `Option<T>`.
#[derive(Debug)]
pub struct OptionalInfo {
    ty: Type,
    default: DefaultFn,
    inner_ty: Type,
    inner_info: fn() -> &'static TypeInfo,
}

impl OptionalInfo {
    #[inline]
    pub fn new<T: TypePath + Reflect + Default, Inner: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            default: super::type_info::default_fn::<T>,
            inner_ty: Type::of::<Inner>(),
            inner_info: Inner::type_info,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn inner_ty(&self) -> &Type {
        &self.inner_ty
    }

    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner_info)()
    }

    pub(super) fn default_fn(&self) -> DefaultFn {
        self.default
    }
}
