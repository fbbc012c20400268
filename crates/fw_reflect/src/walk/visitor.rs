use crate::info::{NamedField, TypeInfo};
use crate::{FieldPath, Reflect};

/// What the walker does after visiting a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Walk {
    /// Descend into the node's value.
    Continue,
    /// Do not descend; continue with the next sibling.
    Skip,
}

/// A struct field reached by [`walk`](crate::walk::walk).
///
/// Only valid for the duration of one [`Visitor::visit`] call.
pub struct VisitedNode<'a> {
    pub(super) path: &'a FieldPath,
    pub(super) field: &'static NamedField,
    pub(super) value: &'a mut dyn Reflect,
    pub(super) writable: bool,
}

impl<'a> VisitedNode<'a> {
    /// The dotted path of external names from the root to this field.
    #[inline]
    pub fn path(&self) -> &'a FieldPath {
        self.path
    }

    #[inline]
    pub fn field(&self) -> &'static NamedField {
        self.field
    }

    #[inline]
    pub fn value(&self) -> &dyn Reflect {
        self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut dyn Reflect {
        self.value
    }

    /// Consume the node, keeping the mutable handle.
    #[inline]
    pub fn into_value(self) -> &'a mut dyn Reflect {
        self.value
    }

    /// `false` if this field, or any field above it, is immutable.
    #[inline]
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.field.type_info()
    }
}

/// Callback invoked by [`walk`](crate::walk::walk) at every struct field.
///
/// Implemented for closures taking a [`VisitedNode`].
pub trait Visitor {
    type Error;

    fn visit(&mut self, node: VisitedNode<'_>) -> Result<Walk, Self::Error>;
}

impl<F, E> Visitor for F
where
    F: FnMut(VisitedNode<'_>) -> Result<Walk, E>,
{
    type Error = E;

    #[inline]
    fn visit(&mut self, node: VisitedNode<'_>) -> Result<Walk, E> {
        self(node)
    }
}
