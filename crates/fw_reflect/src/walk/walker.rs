use crate::ops::ReflectMut;
use crate::walk::{VisitedNode, Visitor, Walk};
use crate::{FieldPath, Reflect};

/// Visit every struct field reachable from `root`, depth first, in
/// declaration order.
///
/// - Struct fields are visited, then descended into on [`Walk::Continue`].
/// - A present optional is descended into. The optional field itself was
///   visited first, so a visitor may fill a `None` before the walker
///   looks at it.
/// - List items and map values are descended into under the path of the
///   container; they are not visited themselves.
/// - Opaque values are leaves.
///
/// The root is not visited. The first error aborts the walk. Changes the
/// visitor made before the error are kept; callers that need an
/// all-or-nothing update check the value first.
///
/// # Examples
///
/// ```
/// use fw_reflect::derive::Reflect;
/// use fw_reflect::walk::{walk, VisitedNode, Walk};
///
/// #[derive(Reflect, Default)]
/// struct Kubelet {
///     max_pods: Option<i32>,
/// }
///
/// #[derive(Reflect, Default)]
/// struct Spec {
///     kubelet: Option<Kubelet>,
///     version: String,
/// }
///
/// let mut spec = Spec { kubelet: Some(Kubelet::default()), ..Default::default() };
/// let mut paths = Vec::new();
///
/// walk(&mut spec, &mut |node: VisitedNode<'_>| {
///     paths.push(node.path().to_string());
///     Ok::<_, ()>(Walk::Continue)
/// })
/// .unwrap();
///
/// assert_eq!(paths, ["kubelet", "kubelet.maxPods", "version"]);
/// ```
pub fn walk<V: Visitor + ?Sized>(root: &mut dyn Reflect, visitor: &mut V) -> Result<(), V::Error> {
    let mut path = FieldPath::root();
    walk_value(root, &mut path, true, visitor)
}

fn walk_value<V: Visitor + ?Sized>(
    value: &mut dyn Reflect,
    path: &mut FieldPath,
    writable: bool,
    visitor: &mut V,
) -> Result<(), V::Error> {
    match value.reflect_mut() {
        ReflectMut::Struct(target) => {
            let info = target.struct_info();
            for (index, field) in info.iter().enumerate() {
                let Some(child) = target.field_at_mut(index) else {
                    continue;
                };
                let writable = writable && !field.is_immutable();

                path.push(field.name());
                let flow = visitor.visit(VisitedNode {
                    path: &*path,
                    field,
                    value: &mut *child,
                    writable,
                });
                let result = match flow {
                    Ok(Walk::Continue) => walk_value(child, path, writable, visitor),
                    Ok(Walk::Skip) => Ok(()),
                    Err(err) => Err(err),
                };
                path.pop();
                result?;
            }
        }
        ReflectMut::Optional(target) => {
            if let Some(inner) = target.value_mut() {
                walk_value(inner, path, writable, visitor)?;
            }
        }
        ReflectMut::List(target) => {
            for item in target.iter_mut() {
                walk_value(item, path, writable, visitor)?;
            }
        }
        ReflectMut::Map(target) => {
            for value in target.values_mut() {
                walk_value(value, path, writable, visitor)?;
            }
        }
        ReflectMut::Opaque(_) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;

    use crate::derive::Reflect;
    use crate::walk::{VisitedNode, Walk, walk};

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Hook {
        name: String,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Meta {
        #[reflect(immutable)]
        name: String,
        labels: BTreeMap<String, String>,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Root {
        metadata: Meta,
        hooks: Vec<Hook>,
        extra: Option<Hook>,
        by_name: BTreeMap<String, Hook>,
    }

    fn collect(root: &mut Root) -> Vec<(String, bool)> {
        let mut seen = Vec::new();
        walk(root, &mut |node: VisitedNode<'_>| {
            seen.push((node.path().to_string(), node.is_writable()));
            Ok::<_, ()>(Walk::Continue)
        })
        .unwrap();
        seen
    }

    #[test]
    fn containers_are_transparent() {
        let mut root = Root {
            hooks: vec![Hook::default(), Hook::default()],
            by_name: BTreeMap::from([("a".to_owned(), Hook::default())]),
            ..Default::default()
        };

        let paths: Vec<String> = collect(&mut root).into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            paths,
            [
                "metadata",
                "metadata.name",
                "metadata.labels",
                "hooks",
                "hooks.name",
                "hooks.name",
                "extra",
                "byName",
                "byName.name",
            ]
        );
    }

    #[test]
    fn immutability_is_inherited() {
        let mut root = Root::default();
        let seen = collect(&mut root);
        assert!(seen.contains(&("metadata".to_owned(), true)));
        assert!(seen.contains(&("metadata.name".to_owned(), false)));
    }

    #[test]
    fn skip_prunes_and_errors_abort() {
        let mut root = Root {
            hooks: vec![Hook::default()],
            ..Default::default()
        };

        let mut visited = 0;
        walk(&mut root, &mut |_: VisitedNode<'_>| {
            visited += 1;
            Ok::<_, ()>(Walk::Skip)
        })
        .unwrap();
        assert_eq!(visited, 4);

        let result = walk(&mut root, &mut |node: VisitedNode<'_>| {
            if node.path().to_string() == "hooks" {
                Err("stop")
            } else {
                Ok(Walk::Continue)
            }
        });
        assert_eq!(result, Err("stop"));
    }

    #[test]
    fn visitor_can_fill_a_none_before_descent() {
        let mut root = Root::default();
        let mut paths = Vec::new();

        walk(&mut root, &mut |mut node: VisitedNode<'_>| {
            paths.push(node.path().to_string());
            if node.path().to_string() == "extra" {
                node.value_mut()
                    .set(Box::new(Some(Hook { name: "late".to_owned() })))
                    .unwrap();
            }
            Ok::<_, ()>(Walk::Continue)
        })
        .unwrap();

        assert!(paths.iter().any(|p| p == "extra.name"));
        assert_eq!(root.extra.unwrap().name, "late");
    }
}
