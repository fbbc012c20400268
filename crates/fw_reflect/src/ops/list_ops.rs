use crate::Reflect;
use crate::info::TypeInfo;

/// A growable sequence. Implemented for `Vec<T>`.
pub trait List: Reflect {
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Append `value`, returning it back if it is not of the item type.
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter_mut(&mut self) -> Box<dyn Iterator<Item = &mut dyn Reflect> + '_>;

    fn item_info(&self) -> &'static TypeInfo;
}
