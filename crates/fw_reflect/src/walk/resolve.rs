use crate::FieldPath;
use crate::info::{NamedField, StructInfo, TypeInfo};

/// The schema location a [`FieldPath`] refers to.
#[derive(Clone, Copy, Debug)]
pub struct Resolution {
    field: &'static NamedField,
    immutable: bool,
}

impl Resolution {
    /// The last field of the path.
    #[inline]
    pub fn field(&self) -> &'static NamedField {
        self.field
    }

    /// Type info of the addressed field.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.field.type_info()
    }

    /// Whether the field, or any field on the way to it, is immutable.
    #[inline]
    pub fn is_immutable(&self) -> bool {
        self.immutable
    }
}

/// Resolve `path` against the schema rooted at `root`.
///
/// Optionals, lists and maps are looked through, the way
/// [`walk`](crate::walk::walk) descends into them. Returns `None` if some
/// segment names no field.
///
/// # Examples
///
/// ```
/// use fw_reflect::{derive::Reflect, info::Typed, walk::resolve};
///
/// #[derive(Reflect, Default)]
/// struct Hook {
///     name: String,
/// }
///
/// #[derive(Reflect, Default)]
/// struct Spec {
///     hooks: Vec<Hook>,
/// }
///
/// let root = Spec::type_info();
/// let found = resolve(root, &"hooks.name".parse().unwrap()).unwrap();
/// assert_eq!(found.field().ident(), "name");
/// assert!(resolve(root, &"hooks.image".parse().unwrap()).is_none());
/// ```
pub fn resolve(root: &'static TypeInfo, path: &FieldPath) -> Option<Resolution> {
    let mut current = root;
    let mut resolved: Option<Resolution> = None;

    for segment in path.segments() {
        let field = container_struct(current)?.field(segment)?;
        let immutable = resolved.is_some_and(|r| r.immutable) || field.is_immutable();
        resolved = Some(Resolution { field, immutable });
        current = field.type_info();
    }

    resolved
}

/// The struct reached by looking through containers, if any.
pub(super) fn container_struct(mut info: &'static TypeInfo) -> Option<&'static StructInfo> {
    loop {
        info = match info {
            TypeInfo::Struct(info) => return Some(info),
            TypeInfo::Optional(info) => info.inner_info(),
            TypeInfo::List(info) => info.item_info(),
            TypeInfo::Map(info) => info.value_info(),
            TypeInfo::Opaque(_) => return None,
        };
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;

    use crate::derive::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::walk::resolve;

    #[derive(Reflect, Default)]
    struct Leaf {
        value: Option<u8>,
    }

    #[derive(Reflect, Default)]
    struct Locked {
        leaf: Leaf,
    }

    #[derive(Reflect, Default)]
    struct Root {
        leaves: BTreeMap<String, Option<Leaf>>,
        #[reflect(immutable)]
        locked: Locked,
        count: u32,
    }

    #[test]
    fn looks_through_containers() {
        let found = resolve(Root::type_info(), &"leaves.value".parse().unwrap()).unwrap();
        assert_eq!(found.type_info().kind(), ReflectKind::Optional);
        assert!(!found.is_immutable());
    }

    #[test]
    fn immutability_propagates_down() {
        let found = resolve(Root::type_info(), &"locked.leaf.value".parse().unwrap()).unwrap();
        assert!(found.is_immutable());
        assert_eq!(found.field().name(), "value");
    }

    #[test]
    fn unknown_or_too_deep_paths_fail() {
        let root = Root::type_info();
        assert!(resolve(root, &"missing".parse().unwrap()).is_none());
        assert!(resolve(root, &"count.value".parse().unwrap()).is_none());
        assert!(resolve(root, &"locked.Leaf".parse().unwrap()).is_none());
    }
}
