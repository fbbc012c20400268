use crate::Reflect;
use crate::info::TypeInfo;

/// A value that may be absent. Implemented for `Option<T>`.
pub trait Optional: Reflect {
    fn is_none(&self) -> bool;

    fn value(&self) -> Option<&dyn Reflect>;

    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Store `value` as the present value.
    ///
    /// Returns it back if it is not of the inner type.
    fn replace(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Make the value absent.
    fn clear(&mut self);

    fn inner_info(&self) -> &'static TypeInfo;
}
