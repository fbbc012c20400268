use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_opaque {
    ($ty:ty => $path:expr, $name:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl $crate::Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);
        }
    };
    ($($ty:ident),* $(,)?) => {
        $(impl_reflect_opaque!($ty => stringify!($ty), stringify!($ty));)*
    };
}

impl_reflect_opaque!(bool, char, f32, f64);
impl_reflect_opaque!(i8, i16, i32, i64, i128, isize);
impl_reflect_opaque!(u8, u16, u32, u64, u128, usize);
impl_reflect_opaque!(String => "alloc::string::String", "String");

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn primitives_are_opaque() {
        assert_eq!(<u16 as Typed>::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(<String as TypePath>::type_name(), "String");
        assert_eq!(<i64 as TypePath>::type_path(), "i64");
    }

    #[test]
    fn reset_restores_zero_value() {
        let mut flag = true;
        flag.reset();
        assert!(!flag);

        let mut text = String::from("x");
        text.reset();
        assert!(text.is_empty());
    }
}
