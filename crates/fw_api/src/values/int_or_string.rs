use core::fmt;

use fw_reflect::derive::Reflect;
use fw_reflect::registry::{ConversionError, FromText};
use serde::{Deserialize, Serialize};

/// A value that is either a 32-bit integer or a string, such as
/// `maxUnavailable: 1` or `maxUnavailable: "20%"`.
///
/// Text that parses as an `i32` becomes [`Int`](Self::Int); anything else,
/// including the empty string, becomes [`String`](Self::String). Parsing
/// never fails.
///
/// ```
/// use fw_api::IntOrString;
/// use fw_reflect::registry::FromText;
///
/// assert_eq!(IntOrString::from_text("3"), Ok(IntOrString::Int(3)));
/// assert_eq!(IntOrString::from_text("25%"), Ok(IntOrString::String("25%".into())));
/// ```
#[derive(Reflect, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[reflect(opaque, auto_register)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i32),
    String(String),
}

impl Default for IntOrString {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl IntOrString {
    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            Self::String(_) => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::String(value) => Some(value),
        }
    }
}

impl From<i32> for IntOrString {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for IntOrString {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl FromText for IntOrString {
    fn from_text(text: &str) -> Result<Self, ConversionError> {
        Ok(match text.parse::<i32>() {
            Ok(value) => Self::Int(value),
            Err(_) => Self::String(text.to_owned()),
        })
    }
}

impl fmt::Display for IntOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use fw_reflect::registry::FromText;

    use super::IntOrString;

    #[test]
    fn text_picks_the_variant() {
        assert_eq!(IntOrString::from_text("-7").unwrap(), IntOrString::Int(-7));
        assert_eq!(IntOrString::from_text("").unwrap(), IntOrString::from(""));
        // Out of i32 range stays textual.
        assert_eq!(
            IntOrString::from_text("3000000000").unwrap(),
            IntOrString::from("3000000000")
        );
        assert_eq!(IntOrString::from_text("10%").unwrap().as_str(), Some("10%"));
    }

    #[test]
    fn serde_untagged() {
        let values: Vec<IntOrString> = serde_json::from_str(r#"[1, "50%"]"#).unwrap();
        assert_eq!(values, [IntOrString::Int(1), IntOrString::from("50%")]);
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[1,"50%"]"#);
    }
}
