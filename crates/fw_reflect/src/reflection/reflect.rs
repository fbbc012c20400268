use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The core trait of the engine: a value whose shape can be inspected and
/// mutated at runtime.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by the
/// built-in impls. Every reflected type has a zero value, restored by
/// [`Reflect::reset`].
///
/// # Examples
///
/// ```
/// use fw_reflect::{Reflect, ops::ReflectMut};
///
/// let mut value: Option<i32> = Some(3);
/// let reflected: &mut dyn Reflect = &mut value;
///
/// assert!(matches!(reflected.reflect_mut(), ReflectMut::Optional(_)));
/// reflected.reset();
/// assert_eq!(value, None);
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Overwrite `self` with `value`.
    ///
    /// Returns the value back if its type differs from `Self`.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Restore the zero value.
    fn reset(&mut self);

    fn reflect_kind(&self) -> ReflectKind;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

impl dyn Reflect {
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcast a boxed value, handing it back on mismatch.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        Ok(any
            .downcast::<T>()
            .unwrap_or_else(|_| unreachable!("type is already checked")))
    }

    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.reflect_kind(), self.reflect_type_path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements the kind-dependent methods of [`Reflect`] for a `Default` type.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reset(&mut self) {
            *self = <Self as ::core::default::Default>::default();
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use crate::Reflect;

    #[test]
    fn downcast_and_take() {
        let mut value: Box<dyn Reflect> = Box::new(7_u8);
        assert!(value.is::<u8>());
        assert!(!value.is::<i8>());

        *value.downcast_mut::<u8>().unwrap() += 1;
        assert_eq!(value.downcast_ref::<u8>(), Some(&8));

        let value = value.take::<i8>().unwrap_err();
        assert_eq!(value.take::<u8>().unwrap(), 8);
    }

    #[test]
    fn set_rejects_other_types() {
        let mut target = String::from("old");
        let rejected = target.set(Box::new(5_i32)).unwrap_err();
        assert!(rejected.is::<i32>());
        assert_eq!(target, "old");

        target.set(Box::new(String::from("new"))).unwrap();
        assert_eq!(target, "new");
    }

    #[test]
    fn debug_names_kind_and_type() {
        let value: &dyn Reflect = &Some(1_i32);
        assert_eq!(format!("{value:?}"), "optional(core::option::Option<i32>)");
    }
}
