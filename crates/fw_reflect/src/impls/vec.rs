use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::List;
use crate::reflection::impl_reflect_cast_fn;

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| format!("alloc::vec::Vec<{}>", T::type_path()))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| format!("Vec<{}>", T::type_name()))
    }
}

impl<T: Typed + Reflect> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Typed + Reflect> Reflect for Vec<T> {
    impl_reflect_cast_fn!(List);
}

impl<T: Typed + Reflect> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        Vec::push(self, value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter_mut(&mut self) -> Box<dyn Iterator<Item = &mut dyn Reflect> + '_> {
        Box::new(<[T]>::iter_mut(self).map(Reflect::as_reflect_mut))
    }

    #[inline]
    fn item_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::ops::ReflectMut;

    #[test]
    fn push_checks_item_type() {
        let mut values = vec![1_i32];

        let ReflectMut::List(list) = values.reflect_mut() else {
            panic!("expected list");
        };
        list.push(Box::new(2_i32)).unwrap();
        assert!(list.push(Box::new(3_u8)).is_err());
        assert_eq!(list.len(), 2);

        for item in list.iter_mut() {
            *item.downcast_mut::<i32>().unwrap() *= 10;
        }
        assert_eq!(values, [10, 20]);
    }
}
