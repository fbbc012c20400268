use alloc::borrow::Cow;
use core::fmt;
use core::str::FromStr;

use crate::path::PathParseError;

/// An ordered sequence of external field names.
///
/// Parsed paths are never empty. The walker builds paths incrementally and
/// borrows the `'static` names from type info, so no allocation happens per
/// visited field.
///
/// # Examples
///
/// ```
/// use fw_reflect::FieldPath;
///
/// let target = FieldPath::parse("spec.kubelet.maxPods").unwrap();
/// let parent: FieldPath = "spec.kubelet".parse().unwrap();
///
/// assert!(target.has_prefix_match(&parent));
/// assert!(!parent.has_prefix_match(&target));
/// assert!(target.matches(&"spec.kubelet.maxPods".parse().unwrap()));
/// assert_eq!(target.to_string(), "spec.kubelet.maxPods");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Cow<'static, str>>,
}

impl FieldPath {
    pub const SEPARATOR: char = '.';

    /// Parse a dotted path.
    ///
    /// Fails on empty text, empty segments and segments containing
    /// whitespace.
    pub fn parse(text: &str) -> Result<Self, PathParseError> {
        if text.is_empty() {
            return Err(PathParseError::new(text, 0, "empty path"));
        }

        let mut segments = Vec::new();
        let mut offset = 0;
        for segment in text.split(Self::SEPARATOR) {
            if segment.is_empty() {
                return Err(PathParseError::new(text, offset, "empty segment"));
            }
            if let Some(index) = segment.find(char::is_whitespace) {
                return Err(PathParseError::new(
                    text,
                    offset + index,
                    "whitespace in segment",
                ));
            }
            segments.push(Cow::Owned(segment.to_owned()));
            offset += segment.len() + Self::SEPARATOR.len_utf8();
        }

        Ok(Self { segments })
    }

    /// The empty path, where walks start.
    #[inline]
    pub(crate) const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, segment: &'static str) {
        self.segments.push(Cow::Borrowed(segment));
    }

    #[inline]
    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(AsRef::as_ref)
    }

    #[inline]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(AsRef::as_ref)
    }

    /// Both paths have the same segments.
    #[inline]
    pub fn matches(&self, other: &FieldPath) -> bool {
        self.segments == other.segments
    }

    /// `other` is a prefix of, or equal to, `self`.
    ///
    /// `self` is the fixed target and `other` the current position of a
    /// walk; a `false` result means nothing below `other` can reach `self`.
    pub fn has_prefix_match(&self, other: &FieldPath) -> bool {
        other.len() <= self.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a == b)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index != 0 {
                fmt::Write::write_char(f, Self::SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = PathParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
