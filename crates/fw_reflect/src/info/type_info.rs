use core::any::TypeId;

use crate::Reflect;
use crate::info::{ListInfo, MapInfo, OpaqueInfo, OptionalInfo, StructInfo};
use crate::info::{ReflectKind, ReflectKindError, Type};

/// Builds the zero value of a type.
pub type DefaultFn = fn() -> Box<dyn Reflect>;

pub(super) fn default_fn<T: Reflect + Default>() -> Box<dyn Reflect> {
    Box::new(T::default())
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a reflected type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info) or,
/// for a live value, [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped).
#[derive(Debug)]
pub enum TypeInfo {
    Struct(StructInfo),
    Optional(OptionalInfo),
    List(ListInfo),
    Map(MapInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_fn {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Cast to [`", stringify!($info), "`], failing for other kinds.")]
        #[inline]
        pub fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    pub fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Optional(_) => ReflectKind::Optional,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Build the zero value of the described type.
    pub fn new_default(&self) -> Box<dyn Reflect> {
        let default = match self {
            Self::Struct(info) => info.default_fn(),
            Self::Optional(info) => info.default_fn(),
            Self::List(info) => info.default_fn(),
            Self::Map(info) => info.default_fn(),
            Self::Opaque(info) => info.default_fn(),
        };
        default()
    }

    impl_cast_fn!(as_struct: Struct => StructInfo);
    impl_cast_fn!(as_optional: Optional => OptionalInfo);
    impl_cast_fn!(as_list: List => ListInfo);
    impl_cast_fn!(as_map: Map => MapInfo);
    impl_cast_fn!(as_opaque: Opaque => OpaqueInfo);
}

#[cfg(test)]
mod tests {
    use crate::info::{ReflectKind, Typed};
    use alloc::collections::BTreeMap;

    #[test]
    fn containers_describe_their_elements() {
        let info = <Option<Vec<u16>> as Typed>::type_info();
        assert_eq!(info.kind(), ReflectKind::Optional);

        let list = info.as_optional().unwrap().inner_info();
        assert_eq!(list.kind(), ReflectKind::List);
        assert!(list.as_list().unwrap().item_ty().is::<u16>());

        let map = <BTreeMap<String, bool> as Typed>::type_info().as_map().unwrap();
        assert!(map.key_ty().is::<String>());
        assert_eq!(map.value_info().kind(), ReflectKind::Opaque);
    }

    #[test]
    fn cast_to_wrong_kind_reports_both_kinds() {
        let err = <i32 as Typed>::type_info().as_struct().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::Opaque);
        assert_eq!(err.to_string(), "kind mismatch: expected struct, received opaque");
    }

    #[test]
    fn new_default_builds_zero_values() {
        let value = <Option<i32> as Typed>::type_info().new_default();
        assert_eq!(value.downcast_ref::<Option<i32>>(), Some(&None));

        let value = <String as Typed>::type_info().new_default();
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some(""));
    }
}
