use core::num::IntErrorKind;

use crate::info::TypePath;
use crate::registry::{ConversionError, FromText};

impl FromText for String {
    #[inline]
    fn from_text(text: &str) -> Result<Self, ConversionError> {
        Ok(text.to_owned())
    }
}

impl FromText for bool {
    fn from_text(text: &str) -> Result<Self, ConversionError> {
        match text {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(ConversionError::new(text, "bool")),
        }
    }
}

impl FromText for char {
    fn from_text(text: &str) -> Result<Self, ConversionError> {
        text.parse()
            .map_err(|_| ConversionError::new(text, "char").with_reason("expected a single character"))
    }
}

macro_rules! impl_from_text_int {
    ($($ty:ty),* $(,)?) => {$(
        impl FromText for $ty {
            fn from_text(text: &str) -> Result<Self, ConversionError> {
                text.parse::<$ty>().map_err(|err| {
                    let reason = match err.kind() {
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                            "value out of range"
                        }
                        IntErrorKind::Empty => "empty value",
                        _ => "invalid digit",
                    };
                    ConversionError::new(text, <$ty as TypePath>::type_name()).with_reason(reason)
                })
            }
        }
    )*};
}

impl_from_text_int!(i8, i16, i32, i64, i128, isize);
impl_from_text_int!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_text_float {
    ($($ty:ty),* $(,)?) => {$(
        impl FromText for $ty {
            fn from_text(text: &str) -> Result<Self, ConversionError> {
                text.parse::<$ty>()
                    .map_err(|_| ConversionError::new(text, <$ty as TypePath>::type_name()))
            }
        }
    )*};
}

impl_from_text_float!(f32, f64);
