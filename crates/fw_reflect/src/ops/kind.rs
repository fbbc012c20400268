use crate::Reflect;
use crate::ops::{List, Map, Optional, Struct};

/// An immutable view of a reflected value, split by kind.
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Optional(&'a dyn Optional),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Opaque(&'a dyn Reflect),
}

/// A mutable view of a reflected value, split by kind.
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Optional(&'a mut dyn Optional),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Opaque(&'a mut dyn Reflect),
}
