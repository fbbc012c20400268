use crate::Reflect;
use crate::info::{DefaultFn, Type, TypeInfo, TypePath, Typed};

/// Type information of a growable sequence, such as `Vec<T>`.
#[derive(Debug)]
pub struct ListInfo {
    ty: Type,
    default: DefaultFn,
    item_ty: Type,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    #[inline]
    pub fn new<T: TypePath + Reflect + Default, Item: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            default: super::type_info::default_fn::<T>,
            item_ty: Type::of::<Item>(),
            item_info: Item::type_info,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    pub(super) fn default_fn(&self) -> DefaultFn {
        self.default
    }
}
