use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{OptionalInfo, TypeInfo, TypePath, Typed};
use crate::ops::Optional;
use crate::reflection::impl_reflect_cast_fn;

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| format!("core::option::Option<{}>", T::type_path()))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| format!("Option<{}>", T::type_name()))
    }
}

impl<T: Typed + Reflect> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionalInfo::new::<Self, T>()))
    }
}

impl<T: Typed + Reflect> Reflect for Option<T> {
    impl_reflect_cast_fn!(Optional);
}

impl<T: Typed + Reflect> Optional for Option<T> {
    #[inline]
    fn is_none(&self) -> bool {
        Option::is_none(self)
    }

    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }

    fn replace(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Some(value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }

    #[inline]
    fn inner_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::ReflectMut;
    use crate::{Reflect, info::TypePath};

    #[test]
    fn replace_and_clear() {
        let mut value: Option<u32> = None;

        let ReflectMut::Optional(optional) = value.reflect_mut() else {
            panic!("expected optional");
        };
        assert!(optional.is_none());
        assert!(optional.replace(Box::new(String::new())).is_err());
        optional.replace(Box::new(4_u32)).unwrap();
        assert_eq!(optional.value().and_then(|v| v.downcast_ref::<u32>()), Some(&4));

        optional.clear();
        assert_eq!(value, None);
    }

    #[test]
    fn generic_names() {
        assert_eq!(<Option<Option<bool>> as TypePath>::type_name(), "Option<Option<bool>>");
        assert_eq!(
            <Option<String> as TypePath>::type_path(),
            "core::option::Option<alloc::string::String>"
        );
    }
}
