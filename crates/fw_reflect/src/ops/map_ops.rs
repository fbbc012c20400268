use crate::Reflect;
use crate::info::TypeInfo;

/// A key-value collection. Implemented for `BTreeMap` and `HashMap`.
///
/// Keys are not addressable by field paths, so only value access is exposed.
pub trait Map: Reflect {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn values(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_>;

    fn values_mut(&mut self) -> Box<dyn Iterator<Item = &mut dyn Reflect> + '_>;

    fn value_info(&self) -> &'static TypeInfo;
}
