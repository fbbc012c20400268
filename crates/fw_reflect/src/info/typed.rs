use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect), which
/// stores the info in a [`NonGenericTypeInfoCell`]. Built-in generic
/// containers use a [`GenericTypeInfoCell`] instead.
///
/// # Examples
///
/// ```
/// use fw_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect, Default)]
/// struct Kubelet {
///     max_pods: Option<i32>,
/// }
///
/// let info: &'static TypeInfo = <Kubelet as Typed>::type_info();
/// let field = info.as_struct().unwrap().field("maxPods").unwrap();
/// assert_eq!(field.ident(), "max_pods");
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], implemented for every `T: Typed`.
pub trait DynamicTyped {
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
