//! Containers for static storage of type information.
//!
//! A `static CELL` inside a generic function is shared by every
//! instantiation, so generic types key their entries by [`TypeId`].

use alloc::collections::BTreeMap;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// Storage for a non-generic type's [`TypeInfo`].
///
/// ```
/// use fw_reflect::impls::NonGenericTypeInfoCell;
/// use fw_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// #[derive(Default)]
/// struct Token(String);
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "demo::Token" }
///     fn type_name() -> &'static str { "Token" }
/// }
///
/// # use fw_reflect::Reflect;
/// # impl Reflect for Token {
/// #     fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
/// #         *self = value.take::<Self>()?;
/// #         Ok(())
/// #     }
/// #     fn reset(&mut self) { *self = Self::default(); }
/// #     fn reflect_kind(&self) -> fw_reflect::info::ReflectKind { fw_reflect::info::ReflectKind::Opaque }
/// #     fn reflect_ref(&self) -> fw_reflect::ops::ReflectRef<'_> { fw_reflect::ops::ReflectRef::Opaque(self) }
/// #     fn reflect_mut(&mut self) -> fw_reflect::ops::ReflectMut<'_> { fw_reflect::ops::ReflectMut::Opaque(self) }
/// # }
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert_eq!(Token::type_info().type_name(), "Token");
/// ```
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// Storage for per-instantiation data of a generic type.
///
/// Entries are leaked on first use and live for the rest of the program.
pub struct GenericTypeCell<T: TypedProperty>(RwLock<BTreeMap<TypeId, &'static T>>);

pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(BTreeMap::new()))
    }

    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *map.entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)))
    }
}
