use alloc::borrow::Cow;

use thiserror::Error;

/// The text could not be interpreted as a value of the expected type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot interpret {text:?} value as {expected}{}", fmt_reason(.reason))]
pub struct ConversionError {
    pub text: String,
    pub expected: &'static str,
    pub reason: Option<Cow<'static, str>>,
}

fn fmt_reason(reason: &Option<Cow<'static, str>>) -> String {
    match reason {
        Some(reason) => format!(": {reason}"),
        None => String::new(),
    }
}

impl ConversionError {
    #[inline]
    pub fn new(text: &str, expected: &'static str) -> Self {
        Self {
            text: text.to_owned(),
            expected,
            reason: None,
        }
    }

    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Cow<'static, str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ConversionError;

    #[test]
    fn message_quotes_the_text() {
        let err = ConversionError::new("maybe", "bool");
        assert_eq!(err.to_string(), r#"cannot interpret "maybe" value as bool"#);

        let err = ConversionError::new("70000", "u16").with_reason("number too large to fit in target type");
        assert_eq!(
            err.to_string(),
            r#"cannot interpret "70000" value as u16: number too large to fit in target type"#
        );
    }
}
