//! Conversion of text into the concrete type of a reflected value.
//!
//! [`coerce_text`] dispatches on the shape of the destination:
//!
//! 1. List: the text is split on `,` and every token becomes a new item,
//!    appended after the existing ones. No item is appended unless every
//!    token converts.
//! 2. Map or struct with empty text: nothing happens.
//! 3. Optional: a default inner value is built, coerced, and stored.
//! 4. A parser registered in the [`ParserRegistry`] for the exact type.
//! 5. The "from text" capability of an [`OpaqueInfo`](crate::info::OpaqueInfo).
//!
//! Anything else is an [`CoerceError::UnhandledType`].

use thiserror::Error;

use crate::Reflect;
use crate::info::TypeInfo;
use crate::ops::ReflectMut;
use crate::registry::{ConversionError, ParserRegistry};

/// Delimiter between the items of a list value.
pub const LIST_SEPARATOR: char = ',';

/// Failure of [`coerce_text`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoerceError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error("unhandled type {type_path:?}")]
    UnhandledType { type_path: &'static str },
}

/// Convert `text` and store it into `dest`.
///
/// # Examples
///
/// ```
/// use fw_reflect::{coerce::coerce_text, registry::ParserRegistry};
///
/// let registry = ParserRegistry::new();
///
/// let mut sans = vec!["a".to_owned()];
/// coerce_text(&registry, &mut sans, "b,c").unwrap();
/// assert_eq!(sans, ["a", "b", "c"]);
///
/// let mut max_pods: Option<i32> = None;
/// coerce_text(&registry, &mut max_pods, "110").unwrap();
/// assert_eq!(max_pods, Some(110));
///
/// let mut enabled = false;
/// assert!(coerce_text(&registry, &mut enabled, "maybe").is_err());
/// ```
pub fn coerce_text(
    registry: &ParserRegistry,
    dest: &mut dyn Reflect,
    text: &str,
) -> Result<(), CoerceError> {
    let type_id = dest.ty_id();
    let type_info = dest.reflect_type_info();

    match dest.reflect_mut() {
        ReflectMut::List(list) => {
            let item_info = list.item_info();
            let items = text
                .split(LIST_SEPARATOR)
                .map(|token| new_coerced(registry, item_info, token))
                .collect::<Result<Vec<_>, _>>()?;
            for item in items {
                list.push(item).map_err(|_| unhandled(item_info))?;
            }
            Ok(())
        }
        ReflectMut::Map(_) | ReflectMut::Struct(_) if text.is_empty() => Ok(()),
        ReflectMut::Optional(optional) => {
            let inner_info = optional.inner_info();
            let inner = new_coerced(registry, inner_info, text)?;
            optional.replace(inner).map_err(|_| unhandled(inner_info))
        }
        _ => {
            let parsed = if let Some(parser) = registry.get(type_id) {
                parser.parse(text)?
            } else if let TypeInfo::Opaque(opaque) = type_info
                && let Some(from_text) = opaque.from_text()
            {
                from_text(text)?
            } else {
                return Err(unhandled(type_info));
            };
            dest.set(parsed).map_err(|_| unhandled(type_info))
        }
    }
}

/// Build a default value described by `info` and coerce `text` into it.
pub(crate) fn new_coerced(
    registry: &ParserRegistry,
    info: &'static TypeInfo,
    text: &str,
) -> Result<Box<dyn Reflect>, CoerceError> {
    let mut value = info.new_default();
    coerce_text(registry, &mut *value, text)?;
    Ok(value)
}

#[inline]
fn unhandled(info: &'static TypeInfo) -> CoerceError {
    CoerceError::UnhandledType {
        type_path: info.type_path(),
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;

    use super::{CoerceError, coerce_text};
    use crate::derive::Reflect;
    use crate::registry::ParserRegistry;

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Taint {
        key: String,
    }

    #[derive(Reflect, Default, Debug, PartialEq, Clone, Copy)]
    enum Role {
        #[default]
        Node,
        ControlPlane,
        #[reflect(rename = "apiserver")]
        ApiServer,
    }

    #[test]
    fn lists_append_and_accumulate() {
        let registry = ParserRegistry::new();
        let mut values: Vec<u16> = Vec::new();

        coerce_text(&registry, &mut values, "1,2,3").unwrap();
        coerce_text(&registry, &mut values, "1,2,3").unwrap();
        assert_eq!(values, [1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn failing_token_leaves_list_untouched() {
        let registry = ParserRegistry::new();
        let mut values = vec![7_u16];

        let err = coerce_text(&registry, &mut values, "1,x,3").unwrap_err();
        assert!(matches!(err, CoerceError::Conversion(ref e) if e.text == "x"));
        assert_eq!(values, [7]);
    }

    #[test]
    fn empty_text_on_composites_is_a_no_op() {
        let registry = ParserRegistry::new();

        let mut labels = BTreeMap::from([("k".to_owned(), "v".to_owned())]);
        coerce_text(&registry, &mut labels, "").unwrap();
        assert_eq!(labels.len(), 1);

        let mut taint = Taint { key: "a".to_owned() };
        coerce_text(&registry, &mut taint, "").unwrap();
        assert_eq!(taint.key, "a");
    }

    #[test]
    fn non_empty_text_on_composites_is_unhandled() {
        let registry = ParserRegistry::new();
        let mut taint = Taint::default();

        let err = coerce_text(&registry, &mut taint, "key").unwrap_err();
        assert!(matches!(err, CoerceError::UnhandledType { type_path } if type_path.ends_with("Taint")));
    }

    #[test]
    fn empty_string_in_a_list_is_one_item() {
        let registry = ParserRegistry::new();

        let mut names: Vec<String> = Vec::new();
        coerce_text(&registry, &mut names, "").unwrap();
        assert_eq!(names, [""]);

        let mut counts: Vec<i32> = Vec::new();
        assert!(coerce_text(&registry, &mut counts, "").is_err());
        assert!(counts.is_empty());
    }

    #[test]
    fn optionals_are_allocated() {
        let registry = ParserRegistry::new();

        let mut nested: Option<Option<bool>> = None;
        coerce_text(&registry, &mut nested, "true").unwrap();
        assert_eq!(nested, Some(Some(true)));

        let mut list: Option<Vec<String>> = None;
        coerce_text(&registry, &mut list, "a,b").unwrap();
        assert_eq!(list, Some(vec!["a".to_owned(), "b".to_owned()]));
    }

    #[test]
    fn enums_fall_back_to_variant_names() {
        let registry = ParserRegistry::new();
        let mut role = Role::default();

        coerce_text(&registry, &mut role, "ControlPlane").unwrap();
        assert_eq!(role, Role::ControlPlane);

        coerce_text(&registry, &mut role, "apiserver").unwrap();
        assert_eq!(role, Role::ApiServer);

        let err = coerce_text(&registry, &mut role, "Bastion").unwrap_err();
        assert!(matches!(err, CoerceError::Conversion(ref e) if e.expected == "Role"));
        assert_eq!(role, Role::ApiServer);
    }

    #[test]
    fn registry_without_parser_is_unhandled() {
        let registry = ParserRegistry::empty();
        let mut value = 0_i32;

        assert_eq!(
            coerce_text(&registry, &mut value, "1"),
            Err(CoerceError::UnhandledType { type_path: "i32" })
        );
    }
}
