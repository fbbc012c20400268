use core::fmt;

use crate::Reflect;
use crate::info::{Type, TypePath};
use crate::registry::ConversionError;

/// Parses text into a boxed reflected value.
pub type ParseFn = fn(&str) -> Result<Box<dyn Reflect>, ConversionError>;

/// Build a value from its textual form.
///
/// Types implementing this can be added to a
/// [`ParserRegistry`](crate::registry::ParserRegistry). Deriving
/// `Reflect` with `#[reflect(auto_register)]` registers the impl with every
/// registry built through `auto_register`.
///
/// # Examples
///
/// ```
/// use fw_reflect::registry::{ConversionError, FromText};
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// impl FromText for Port {
///     fn from_text(text: &str) -> Result<Self, ConversionError> {
///         let text = text.strip_prefix(':').unwrap_or(text);
///         text.parse()
///             .map(Port)
///             .map_err(|_| ConversionError::new(text, "Port"))
///     }
/// }
///
/// assert_eq!(Port::from_text(":8080"), Ok(Port(8080)));
/// ```
pub trait FromText: Sized {
    fn from_text(text: &str) -> Result<Self, ConversionError>;
}

/// A type-erased [`FromText`] implementation.
#[derive(Clone, Copy)]
pub struct TextParser {
    ty: Type,
    func: ParseFn,
}

impl TextParser {
    #[inline]
    pub fn of<T: FromText + Reflect + TypePath>() -> Self {
        Self {
            ty: Type::of::<T>(),
            func: parse_boxed::<T>,
        }
    }

    /// Wrap a plain parse function for type `T`.
    ///
    /// The function must produce values of type `T`.
    #[inline]
    pub fn from_fn<T: TypePath>(func: ParseFn) -> Self {
        Self {
            ty: Type::of::<T>(),
            func,
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn parse(&self, text: &str) -> Result<Box<dyn Reflect>, ConversionError> {
        (self.func)(text)
    }
}

impl fmt::Debug for TextParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextParser").field("ty", &self.ty).finish()
    }
}

fn parse_boxed<T: FromText + Reflect>(text: &str) -> Result<Box<dyn Reflect>, ConversionError> {
    T::from_text(text).map(Reflect::into_boxed_reflect)
}
