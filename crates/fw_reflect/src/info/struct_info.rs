use hashbrown::HashMap;

use crate::Reflect;
use crate::info::{DefaultFn, NamedField, Type, TypePath};

/// Type information of a struct with named fields.
///
/// Fields are kept in declaration order; lookups by external name go
/// through an index map.
#[derive(Debug)]
pub struct StructInfo {
    ty: Type,
    default: DefaultFn,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    /// # Panics
    ///
    /// Two fields share an external name.
    pub fn new<T: TypePath + Reflect + Default>(fields: &[NamedField]) -> Self {
        let mut field_indices = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            let previous = field_indices.insert(field.name(), index);
            assert!(
                previous.is_none(),
                "duplicate field name `{}` in `{}`",
                field.name(),
                T::type_path(),
            );
        }

        Self {
            ty: Type::of::<T>(),
            default: super::type_info::default_fn::<T>,
            fields: fields.to_vec().into_boxed_slice(),
            field_indices,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Get a field by its external name.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.field_indices
            .get(name)
            .map(|&index| &self.fields[index])
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }

    pub(super) fn default_fn(&self) -> DefaultFn {
        self.default
    }
}
