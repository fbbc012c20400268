//! Items referenced by code generated from `fw_reflect_derive`.

pub use crate::impls::NonGenericTypeInfoCell;
pub use crate::info::{NamedField, OpaqueInfo, ReflectKind, StructInfo, TypeInfo, TypePath, Typed};
pub use crate::ops::{ReflectMut, ReflectRef, Struct};
pub use crate::registry::ConversionError;

/// Re-exports of core items, so generated code works under a shadowed prelude.
pub mod macro_utils {
    pub use alloc::boxed::Box;
    pub use core::default::Default;
    pub use core::option::Option;
    pub use core::result::Result;
    pub use alloc::string::ToString;
    pub use core::str::FromStr;
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::Reflect;
    use crate::info::TypePath;
    use crate::registry::{FromText, ParserRegistry};

    /// A registration function submitted by `#[reflect(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&mut ParserRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterParser {
        fn __register(registry: &mut ParserRegistry);
    }

    impl<T: FromText + Reflect + TypePath> __RegisterParser for T {
        #[inline]
        fn __register(registry: &mut ParserRegistry) {
            registry.register::<T>();
        }
    }

    pub(crate) fn register_parsers(registry: &mut ParserRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
