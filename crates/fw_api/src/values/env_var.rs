use fw_reflect::derive::Reflect;
use fw_reflect::registry::{ConversionError, FromText};
use serde::{Deserialize, Serialize};

/// An environment variable passed to a component.
///
/// The text form is `NAME=value`. Only the first `=` separates, and a text
/// without `=` is a name with an empty value.
#[derive(Reflect, Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[reflect(auto_register)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvVar {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl FromText for EnvVar {
    fn from_text(text: &str) -> Result<Self, ConversionError> {
        let (name, value) = text.split_once('=').unwrap_or((text, ""));
        Ok(Self::new(name, value))
    }
}
