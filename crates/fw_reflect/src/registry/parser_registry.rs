use core::any::TypeId;
use core::fmt;
use std::sync::LazyLock;

use hashbrown::HashMap;

use crate::Reflect;
use crate::info::TypePath;
use crate::registry::{FromText, TextParser};

/// `TypeId` to [`TextParser`] lookup consulted by
/// [`coerce_text`](crate::coerce::coerce_text).
///
/// [`ParserRegistry::new`] covers `String`, `bool`, `char`, integers and
/// floats. Domain value types are added with [`register`](Self::register)
/// or collected from `#[reflect(auto_register)]` types with
/// [`auto_register`](Self::auto_register).
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use fw_reflect::registry::ParserRegistry;
///
/// let registry = ParserRegistry::new();
/// let parser = registry.get(TypeId::of::<u8>()).unwrap();
///
/// let value = parser.parse("42").unwrap();
/// assert_eq!(value.downcast_ref::<u8>(), Some(&42));
/// assert!(parser.parse("256").is_err());
/// ```
pub struct ParserRegistry {
    parsers: HashMap<TypeId, TextParser>,
}

impl Default for ParserRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.parsers.values().map(|parser| parser.ty().path()))
            .finish()
    }
}

impl ParserRegistry {
    /// A registry without any parser.
    #[inline]
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// A registry with the primitive parsers.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register::<String>();
        registry.register::<bool>();
        registry.register::<char>();

        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();

        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();

        registry.register::<f32>();
        registry.register::<f64>();

        registry
    }

    /// The process-wide registry: [`new`](Self::new) followed by
    /// [`auto_register`](Self::auto_register).
    ///
    /// Built on first access and immutable afterwards.
    pub fn global() -> &'static ParserRegistry {
        static GLOBAL: LazyLock<ParserRegistry> = LazyLock::new(|| {
            let mut registry = ParserRegistry::new();
            registry.auto_register();
            registry
        });
        &GLOBAL
    }

    /// Register the [`FromText`] impl of `T`.
    ///
    /// Returns `false` and keeps the existing parser if `T` is already
    /// registered.
    pub fn register<T: FromText + Reflect + TypePath>(&mut self) -> bool {
        let type_id = TypeId::of::<T>();
        if self.parsers.contains_key(&type_id) {
            return false;
        }
        self.parsers.insert(type_id, TextParser::of::<T>());
        true
    }

    /// Insert a parser, replacing any parser of the same type.
    pub fn insert(&mut self, parser: TextParser) -> Option<TextParser> {
        let previous = self.parsers.insert(parser.ty().id(), parser);
        if previous.is_some() {
            log::debug!("replaced text parser of `{}`", parser.ty());
        }
        previous
    }

    #[inline]
    pub fn remove(&mut self, type_id: TypeId) -> Option<TextParser> {
        self.parsers.remove(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TextParser> {
        self.parsers.get(&type_id)
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.parsers.contains_key(&type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TextParser> {
        self.parsers.values()
    }

    /// Register every type marked `#[reflect(auto_register)]` in the
    /// final binary.
    ///
    /// Returns `false` when the `auto_register` feature is disabled, in
    /// which case nothing is registered.
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::register_parsers(self);
            true
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }
}
