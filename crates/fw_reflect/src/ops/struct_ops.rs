use crate::Reflect;
use crate::info::StructInfo;

/// A struct with named fields.
///
/// Field indices follow the order of [`StructInfo`]. Names are external
/// names. Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
pub trait Struct: Reflect {
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// The static description of this struct.
    fn struct_info(&self) -> &'static StructInfo;
}
