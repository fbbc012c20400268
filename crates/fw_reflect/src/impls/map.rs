use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::Map;
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_map {
    ($ty:ident < K, V $(, $s:ident)? >, $path:literal, $($bounds:tt)*) => {
        impl<K: TypePath, V: TypePath $(, $s: 'static)?> TypePath for $ty<K, V $(, $s)?> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    format!(concat!($path, "<{}, {}>"), K::type_path(), V::type_path())
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    format!(concat!(stringify!($ty), "<{}, {}>"), K::type_name(), V::type_name())
                })
            }
        }

        impl<K, V $(, $s)?> Typed for $ty<K, V $(, $s)?>
        where
            K: TypePath + Send + Sync + $($bounds)*,
            V: Typed + Reflect,
            $($s: BuildHasher + Default + Send + Sync + 'static,)?
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K, V $(, $s)?> Reflect for $ty<K, V $(, $s)?>
        where
            K: TypePath + Send + Sync + $($bounds)*,
            V: Typed + Reflect,
            $($s: BuildHasher + Default + Send + Sync + 'static,)?
        {
            impl_reflect_cast_fn!(Map);
        }

        impl<K, V $(, $s)?> Map for $ty<K, V $(, $s)?>
        where
            K: TypePath + Send + Sync + $($bounds)*,
            V: Typed + Reflect,
            $($s: BuildHasher + Default + Send + Sync + 'static,)?
        {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn values(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
                Box::new($ty::values(self).map(Reflect::as_reflect))
            }

            fn values_mut(&mut self) -> Box<dyn Iterator<Item = &mut dyn Reflect> + '_> {
                Box::new($ty::values_mut(self).map(Reflect::as_reflect_mut))
            }

            #[inline]
            fn value_info(&self) -> &'static TypeInfo {
                V::type_info()
            }
        }
    };
}

impl_reflect_map!(BTreeMap<K, V>, "alloc::collections::BTreeMap", Ord);
impl_reflect_map!(HashMap<K, V, S>, "std::collections::HashMap", Eq + Hash);
