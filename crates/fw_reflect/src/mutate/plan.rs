//! Read-only checks run before a set touches the target.
//!
//! The setter allocates absent optional structs on its way down. These
//! functions answer, without mutating anything, whether such a walk ends
//! on at least one field and whether it would meet an absent optional that
//! cannot be allocated.

use crate::info::TypeInfo;
use crate::mutate::FieldError;
use crate::ops::ReflectRef;
use crate::{FieldPath, Reflect};

/// Whether setting `rest` below `value` reaches at least one live or
/// allocatable field.
///
/// `path` is the path of `value` and is restored before returning.
///
/// # Errors
///
/// [`FieldError::UnhandledType`] if any branch crosses an absent optional
/// whose inner type is not a struct.
pub(super) fn reachable(
    value: &dyn Reflect,
    path: &mut FieldPath,
    rest: &[&str],
) -> Result<bool, FieldError> {
    match value.reflect_ref() {
        ReflectRef::Struct(target) => {
            let Some((first, rest)) = rest.split_first() else {
                return Ok(false);
            };
            let (Some(field), Some(child)) = (target.struct_info().field(first), target.field(first))
            else {
                return Ok(false);
            };
            if rest.is_empty() {
                return Ok(true);
            }

            path.push(field.name());
            let result = match child.reflect_ref() {
                ReflectRef::Optional(optional) if optional.is_none() => {
                    allocatable(optional.inner_info(), path, rest)
                }
                _ => reachable(child, path, rest),
            };
            path.pop();
            result
        }
        ReflectRef::Optional(optional) => match optional.value() {
            Some(inner) => reachable(inner, path, rest),
            None => Ok(false),
        },
        ReflectRef::List(list) => {
            let mut found = false;
            for index in 0..list.len() {
                if let Some(item) = list.get(index) {
                    found |= reachable(item, path, rest)?;
                }
            }
            Ok(found)
        }
        ReflectRef::Map(map) => {
            let mut found = false;
            for value in map.values() {
                found |= reachable(value, path, rest)?;
            }
            Ok(found)
        }
        ReflectRef::Opaque(_) => Ok(false),
    }
}

/// Whether `rest` reaches a field inside a freshly allocated `info`, the
/// inner type of the absent optional at `path`.
///
/// Inside a default value optionals are absent and collections empty, so
/// only chains of structs and optional structs lead anywhere.
pub(super) fn allocatable(
    info: &'static TypeInfo,
    path: &mut FieldPath,
    rest: &[&str],
) -> Result<bool, FieldError> {
    let TypeInfo::Struct(info) = info else {
        return Err(FieldError::UnhandledType {
            path: path.to_string(),
            type_path: info.type_path(),
        });
    };
    let Some((first, rest)) = rest.split_first() else {
        return Ok(false);
    };
    let Some(field) = info.field(first) else {
        return Ok(false);
    };
    if rest.is_empty() {
        return Ok(true);
    }

    path.push(field.name());
    let result = match field.type_info() {
        info @ TypeInfo::Struct(_) => allocatable(info, path, rest),
        TypeInfo::Optional(optional) => allocatable(optional.inner_info(), path, rest),
        TypeInfo::List(_) | TypeInfo::Map(_) | TypeInfo::Opaque(_) => Ok(false),
    };
    path.pop();
    result
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;

    use super::{allocatable, reachable};
    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::mutate::FieldError;
    use crate::FieldPath;

    #[derive(Reflect, Default)]
    struct Hook {
        name: String,
    }

    #[derive(Reflect, Default)]
    struct Inner {
        hooks: Vec<Hook>,
        maybe: Option<Vec<Hook>>,
        deeper: Option<Leaf>,
    }

    #[derive(Reflect, Default)]
    struct Leaf {
        value: Option<i32>,
    }

    #[derive(Reflect, Default)]
    struct Outer {
        inner: Option<Inner>,
        items: Vec<Inner>,
        by_name: BTreeMap<String, Hook>,
    }

    fn check(value: &Outer, path: &str) -> Result<bool, FieldError> {
        let segments: Vec<&str> = path.split('.').collect();
        let mut root = FieldPath::default();
        let result = reachable(value, &mut root, &segments);
        assert!(root.is_empty());
        result
    }

    #[test]
    fn absent_structs_count_as_reachable() {
        let outer = Outer::default();
        assert_eq!(check(&outer, "inner.deeper.value"), Ok(true));
        assert_eq!(check(&outer, "inner.hooks"), Ok(true));
    }

    #[test]
    fn empty_collections_end_the_walk() {
        let mut outer = Outer::default();
        assert_eq!(check(&outer, "inner.hooks.name"), Ok(false));
        assert_eq!(check(&outer, "items.deeper.value"), Ok(false));
        assert_eq!(check(&outer, "byName.name"), Ok(false));

        outer.items.push(Inner::default());
        outer.by_name.insert("a".to_owned(), Hook::default());
        assert_eq!(check(&outer, "items.deeper.value"), Ok(true));
        assert_eq!(check(&outer, "byName.name"), Ok(true));
    }

    #[test]
    fn absent_non_structs_are_reported_with_their_path() {
        let outer = Outer::default();
        let err = check(&outer, "inner.maybe.name").unwrap_err();
        assert_eq!(
            err,
            FieldError::UnhandledType {
                path: "inner.maybe".to_owned(),
                type_path: <Vec<Hook> as crate::info::TypePath>::type_path(),
            }
        );

        let outer = Outer {
            items: vec![
                Inner {
                    maybe: Some(vec![Hook::default()]),
                    ..Default::default()
                },
                Inner::default(),
            ],
            ..Default::default()
        };
        assert!(matches!(
            check(&outer, "items.maybe.name"),
            Err(FieldError::UnhandledType { .. })
        ));
    }

    #[test]
    fn allocatable_follows_optional_structs_only() {
        let mut path = FieldPath::default();
        assert_eq!(
            allocatable(Inner::type_info(), &mut path, &["deeper", "value"]),
            Ok(true)
        );
        assert_eq!(
            allocatable(Inner::type_info(), &mut path, &["hooks", "name"]),
            Ok(false)
        );
        assert!(path.is_empty());
    }
}
