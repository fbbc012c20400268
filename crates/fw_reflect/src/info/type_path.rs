use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// - [`type_path`](TypePath::type_path): full path, unique per type.
/// - [`type_name`](TypePath::type_name): the path without modules, used in
///   error messages.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by the
/// built-in impls in [`impls`](crate::impls).
pub trait TypePath: 'static {
    fn type_path() -> &'static str;

    fn type_name() -> &'static str;
}

/// Dynamic dispatch for [`TypePath`], implemented for every `T: TypePath`.
pub trait DynamicTypePath {
    fn reflect_type_path(&self) -> &'static str;

    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        T::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        T::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a type together with its [`TypePath`] accessors.
///
/// Two `Type`s compare equal iff their [`TypeId`]s do.
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
}

impl Type {
    #[inline]
    pub fn of<T: TypePath>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_path: T::type_path,
            type_name: T::type_name,
        }
    }

    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
