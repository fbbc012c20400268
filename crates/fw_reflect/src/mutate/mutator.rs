use crate::coerce::{self, coerce_text};
use crate::info::TypeInfo;
use crate::mutate::{Action, FieldError, plan};
use crate::ops::ReflectMut;
use crate::registry::ParserRegistry;
use crate::walk::{self, Resolution, VisitedNode, Visitor, Walk};
use crate::{FieldPath, Reflect};

// -----------------------------------------------------------------------------
// FieldMutator

/// Sets and unsets fields of reflected values, converting text through a
/// [`ParserRegistry`].
///
/// Both operations resolve the path against the target's type info first,
/// so an unknown or immutable path fails before anything is modified.
///
/// # Examples
///
/// ```
/// use fw_reflect::{FieldMutator, derive::Reflect, registry::ParserRegistry};
///
/// #[derive(Reflect, Default)]
/// struct Networking {
///     non_masquerade_cidr: String,
///     mtu: Option<u32>,
/// }
///
/// let registry = ParserRegistry::new();
/// let mutator = FieldMutator::new(&registry);
/// let mut networking = Networking::default();
///
/// mutator.set_string(&mut networking, "nonMasqueradeCidr", "100.64.0.0/10").unwrap();
/// mutator.set_string(&mut networking, "mtu", "9001").unwrap();
/// assert_eq!(networking.mtu, Some(9001));
///
/// mutator.unset(&mut networking, "mtu").unwrap();
/// assert_eq!(networking.mtu, None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FieldMutator<'r> {
    registry: &'r ParserRegistry,
}

impl FieldMutator<'static> {
    /// A mutator using [`ParserRegistry::global`].
    #[inline]
    pub fn global() -> Self {
        Self::new(ParserRegistry::global())
    }
}

impl<'r> FieldMutator<'r> {
    #[inline]
    pub fn new(registry: &'r ParserRegistry) -> Self {
        Self { registry }
    }

    #[inline]
    pub fn registry(&self) -> &'r ParserRegistry {
        self.registry
    }

    /// Convert `value` and store it into every field addressed by `path`.
    ///
    /// Missing optional structs on the way to the field are allocated.
    /// List fields get the comma-separated items of `value` appended.
    ///
    /// # Errors
    ///
    /// - [`FieldError::Parse`]: `path` is malformed.
    /// - [`FieldError::NotFound`]: no such field in the schema, or no live
    ///   field (e.g. the path crosses an empty list).
    /// - [`FieldError::Immutable`]: the field, or a field above it, is
    ///   immutable.
    /// - [`FieldError::Conversion`], [`FieldError::UnhandledType`]: `value`
    ///   cannot be stored into the field's type.
    ///
    /// On error `target` is left unmodified. The value is converted and
    /// the live paths are checked before the first field is written, and
    /// optional structs are only allocated on branches that end on a field.
    pub fn set_string(
        &self,
        target: &mut dyn Reflect,
        path: &str,
        value: &str,
    ) -> Result<(), FieldError> {
        let field_path = FieldPath::parse(path)?;
        let root = target.reflect_type_info();
        let resolution = check_path(root, path, &field_path, Action::Set)?;

        coerce::new_coerced(self.registry, resolution.type_info(), value)
            .map_err(|err| FieldError::from_coerce(path, err))?;

        let segments: Vec<&str> = field_path.segments().collect();
        if !plan::reachable(&*target, &mut FieldPath::root(), &segments)? {
            return Err(not_found(path, root));
        }

        let mut setter = Setter {
            registry: self.registry,
            target: &field_path,
            text: path,
            value,
            count: 0,
        };
        walk::walk(target, &mut setter)?;

        if setter.count == 0 {
            return Err(not_found(path, root));
        }
        log::debug!(
            "set field `{path}` of {} ({} match(es))",
            root.type_name(),
            setter.count,
        );
        Ok(())
    }

    /// Reset every field addressed by `path` to its zero value.
    ///
    /// Nothing is allocated. If the path exists in the schema but not in
    /// the live value, for instance because an optional on the way is
    /// `None`, the field is already unset and `Ok(())` is returned.
    ///
    /// # Errors
    ///
    /// [`FieldError::Parse`], [`FieldError::NotFound`] and
    /// [`FieldError::Immutable`], as for [`set_string`](Self::set_string).
    /// All three are found from the schema before the walk, so `target` is
    /// left unmodified.
    pub fn unset(&self, target: &mut dyn Reflect, path: &str) -> Result<(), FieldError> {
        let field_path = FieldPath::parse(path)?;
        let root = target.reflect_type_info();
        check_path(root, path, &field_path, Action::Unset)?;

        let mut unsetter = Unsetter {
            target: &field_path,
            text: path,
            count: 0,
        };
        walk::walk(target, &mut unsetter)?;

        if unsetter.count == 0 {
            log::debug!("field `{path}` of {} is not present", root.type_name());
        } else {
            log::debug!(
                "unset field `{path}` of {} ({} match(es))",
                root.type_name(),
                unsetter.count,
            );
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Free functions

/// Set the field at `path` from text, using [`ParserRegistry::global`].
///
/// See [`FieldMutator::set_string`].
///
/// # Examples
///
/// ```
/// use fw_reflect::{FieldError, derive::Reflect};
///
/// #[derive(Reflect, Default)]
/// struct Kubelet {
///     max_pods: Option<i32>,
///     anonymous_auth: Option<bool>,
/// }
///
/// #[derive(Reflect, Default)]
/// struct Spec {
///     kubelet: Option<Kubelet>,
/// }
///
/// let mut spec = Spec::default();
/// fw_reflect::set_string(&mut spec, "kubelet.maxPods", "110").unwrap();
/// assert_eq!(spec.kubelet.as_ref().unwrap().max_pods, Some(110));
///
/// let err = fw_reflect::set_string(&mut spec, "kubelet.anonymousAuth", "maybe").unwrap_err();
/// assert!(matches!(err, FieldError::Conversion { .. }));
/// assert_eq!(spec.kubelet.unwrap().anonymous_auth, None);
/// ```
#[inline]
pub fn set_string(target: &mut dyn Reflect, path: &str, value: &str) -> Result<(), FieldError> {
    FieldMutator::global().set_string(target, path, value)
}

/// Reset the field at `path` to its zero value.
///
/// See [`FieldMutator::unset`].
#[inline]
pub fn unset(target: &mut dyn Reflect, path: &str) -> Result<(), FieldError> {
    FieldMutator::global().unset(target, path)
}

// -----------------------------------------------------------------------------
// Visitors

struct Setter<'a> {
    registry: &'a ParserRegistry,
    target: &'a FieldPath,
    text: &'a str,
    value: &'a str,
    count: usize,
}

impl Visitor for Setter<'_> {
    type Error = FieldError;

    fn visit(&mut self, node: VisitedNode<'_>) -> Result<Walk, FieldError> {
        let path = node.path();
        if !self.target.has_prefix_match(path) {
            return Ok(Walk::Skip);
        }

        let writable = node.is_writable();
        let value = node.into_value();

        if self.target.matches(path) {
            if !writable {
                return Err(immutable(self.text, Action::Set));
            }
            coerce_text(self.registry, value, self.value)
                .map_err(|err| FieldError::from_coerce(self.text, err))?;
            self.count += 1;
            return Ok(Walk::Skip);
        }

        if let ReflectMut::Optional(optional) = value.reflect_mut()
            && optional.is_none()
        {
            if !writable {
                return Err(immutable(&path.to_string(), Action::Set));
            }
            let inner_info = optional.inner_info();
            let rest: Vec<&str> = self.target.segments().skip(path.len()).collect();
            if !plan::allocatable(inner_info, &mut path.clone(), &rest)? {
                return Ok(Walk::Skip);
            }
            optional
                .replace(inner_info.new_default())
                .map_err(|_| FieldError::UnhandledType {
                    path: path.to_string(),
                    type_path: inner_info.type_path(),
                })?;
            log::trace!("allocated `{path}` ({})", inner_info.type_name());
        }

        Ok(Walk::Continue)
    }
}

struct Unsetter<'a> {
    target: &'a FieldPath,
    text: &'a str,
    count: usize,
}

impl Visitor for Unsetter<'_> {
    type Error = FieldError;

    fn visit(&mut self, node: VisitedNode<'_>) -> Result<Walk, FieldError> {
        let path = node.path();
        if !self.target.has_prefix_match(path) {
            return Ok(Walk::Skip);
        }
        if !self.target.matches(path) {
            return Ok(Walk::Continue);
        }
        if !node.is_writable() {
            return Err(immutable(self.text, Action::Unset));
        }

        node.into_value().reset();
        self.count += 1;
        Ok(Walk::Skip)
    }
}

// -----------------------------------------------------------------------------
// Helpers

fn check_path(
    root: &'static TypeInfo,
    text: &str,
    path: &FieldPath,
    action: Action,
) -> Result<Resolution, FieldError> {
    let resolution = walk::resolve(root, path).ok_or_else(|| not_found(text, root))?;
    if resolution.is_immutable() {
        return Err(immutable(text, action));
    }
    Ok(resolution)
}

#[inline]
fn not_found(path: &str, root: &'static TypeInfo) -> FieldError {
    FieldError::NotFound {
        path: path.to_owned(),
        type_name: root.type_name(),
    }
}

#[inline]
fn immutable(path: &str, action: Action) -> FieldError {
    FieldError::Immutable {
        path: path.to_owned(),
        action,
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;

    use crate::derive::Reflect;
    use crate::mutate::{Action, FieldError, FieldMutator};
    use crate::registry::ParserRegistry;

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct Scalars {
        text: String,
        flag: bool,
        small: i8,
        wide: i64,
        unsigned: u16,
        size: usize,
        ratio: f64,
    }

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct C {
        value: Option<i32>,
    }

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct B {
        c: Option<C>,
    }

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct A {
        b: Option<B>,
        enabled: Option<bool>,
        hooks: Vec<Hook>,
        maybe: Option<Vec<Hook>>,
    }

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct Hook {
        name: String,
    }

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct Meta {
        #[reflect(immutable)]
        name: String,
        #[reflect(immutable)]
        owner: Option<B>,
    }

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct Root {
        metadata: Meta,
        scalars: Scalars,
        a: Option<A>,
        sans: Vec<String>,
        ports: Vec<u16>,
        hooks: Vec<Hook>,
        maybe_hooks: Option<Vec<Hook>>,
        labels: BTreeMap<String, String>,
        #[reflect(rename = "kubeAPIServer")]
        kube_api_server: Option<C>,
        #[reflect(skip)]
        internal: u8,
    }

    fn with_mutator(f: impl FnOnce(FieldMutator<'_>)) {
        let registry = ParserRegistry::new();
        f(FieldMutator::new(&registry));
    }

    #[test]
    fn scalars_are_parsed() {
        with_mutator(|m| {
            let mut root = Root::default();
            m.set_string(&mut root, "scalars.text", "hello world").unwrap();
            m.set_string(&mut root, "scalars.flag", "True").unwrap();
            m.set_string(&mut root, "scalars.small", "-12").unwrap();
            m.set_string(&mut root, "scalars.wide", "9000000000").unwrap();
            m.set_string(&mut root, "scalars.unsigned", "65535").unwrap();
            m.set_string(&mut root, "scalars.size", "3").unwrap();
            m.set_string(&mut root, "scalars.ratio", "0.5").unwrap();

            assert_eq!(
                root.scalars,
                Scalars {
                    text: "hello world".to_owned(),
                    flag: true,
                    small: -12,
                    wide: 9_000_000_000,
                    unsigned: 65535,
                    size: 3,
                    ratio: 0.5,
                }
            );
        });
    }

    #[test]
    fn lists_accumulate() {
        with_mutator(|m| {
            let mut root = Root::default();
            m.set_string(&mut root, "sans", "a,b,c").unwrap();
            assert_eq!(root.sans, ["a", "b", "c"]);

            m.set_string(&mut root, "sans", "a,b,c").unwrap();
            assert_eq!(root.sans.len(), 6);

            m.set_string(&mut root, "ports", "80,443").unwrap();
            assert_eq!(root.ports, [80, 443]);
        });
    }

    #[test]
    fn unset_restores_zero_value() {
        with_mutator(|m| {
            let mut root = Root::default();
            m.set_string(&mut root, "scalars.wide", "5").unwrap();
            m.set_string(&mut root, "sans", "x,y").unwrap();
            m.set_string(&mut root, "a.enabled", "false").unwrap();

            m.unset(&mut root, "scalars.wide").unwrap();
            m.unset(&mut root, "sans").unwrap();
            m.unset(&mut root, "a.enabled").unwrap();

            assert_eq!(root.scalars.wide, 0);
            assert!(root.sans.is_empty());
            assert_eq!(root.a, Some(A::default()));
        });
    }

    #[test]
    fn missing_structs_are_allocated() {
        with_mutator(|m| {
            let mut root = Root::default();
            m.set_string(&mut root, "a.b.c.value", "7").unwrap();

            let c = root.a.unwrap().b.unwrap().c.unwrap();
            assert_eq!(c.value, Some(7));
        });
    }

    #[test]
    fn existing_structs_are_kept() {
        with_mutator(|m| {
            let mut root = Root {
                a: Some(A {
                    enabled: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            };
            m.set_string(&mut root, "a.b.c.value", "1").unwrap();
            assert_eq!(root.a.as_ref().unwrap().enabled, Some(true));
        });
    }

    #[test]
    fn renamed_fields_use_their_external_name() {
        with_mutator(|m| {
            let mut root = Root::default();
            m.set_string(&mut root, "kubeAPIServer.value", "3").unwrap();
            assert_eq!(root.kube_api_server, Some(C { value: Some(3) }));

            let err = m.set_string(&mut root, "kubeApiServer.value", "3").unwrap_err();
            assert!(matches!(err, FieldError::NotFound { .. }));
        });
    }

    #[test]
    fn immutable_fields_are_rejected() {
        with_mutator(|m| {
            let mut root = Root::default();
            let before = root.clone();

            let err = m.set_string(&mut root, "metadata.name", "other").unwrap_err();
            assert_eq!(
                err,
                FieldError::Immutable {
                    path: "metadata.name".to_owned(),
                    action: Action::Set,
                }
            );
            assert_eq!(err.to_string(), r#"cannot set field "metadata.name" (marked immutable)"#);

            let err = m.set_string(&mut root, "metadata.owner.c.value", "1").unwrap_err();
            assert!(matches!(err, FieldError::Immutable { .. }));

            let err = m.unset(&mut root, "metadata.name").unwrap_err();
            assert_eq!(err.to_string(), r#"cannot unset field "metadata.name" (marked immutable)"#);

            assert_eq!(root, before);
        });
    }

    #[test]
    fn unknown_paths_are_not_found() {
        with_mutator(|m| {
            let mut root = Root::default();
            let before = root.clone();

            for path in ["nope", "a.b.missing", "scalars.text.deeper", "internal"] {
                let err = m.set_string(&mut root, path, "1").unwrap_err();
                assert!(matches!(err, FieldError::NotFound { .. }), "{path}: {err}");
                let err = m.unset(&mut root, path).unwrap_err();
                assert!(matches!(err, FieldError::NotFound { .. }), "{path}: {err}");
            }

            let err = m.set_string(&mut root, "a.nope", "1").unwrap_err();
            assert_eq!(err.to_string(), "field a.nope not found in Root");
            assert_eq!(root, before);
        });
    }

    #[test]
    fn malformed_paths_are_rejected() {
        with_mutator(|m| {
            let mut root = Root::default();
            let err = m.set_string(&mut root, "a..b", "1").unwrap_err();
            assert!(matches!(err, FieldError::Parse(_)));
            assert_eq!(err.path(), "a..b");
        });
    }

    #[test]
    fn conversion_failures_leave_target_untouched() {
        with_mutator(|m| {
            let mut root = Root::default();

            let err = m.set_string(&mut root, "a.enabled", "yes").unwrap_err();
            let FieldError::Conversion { path, source } = &err else {
                panic!("unexpected error: {err}");
            };
            assert_eq!(path, "a.enabled");
            assert_eq!(source.expected, "bool");
            assert_eq!(root.a, None);

            let err = m.set_string(&mut root, "a.b.c.value", "seven").unwrap_err();
            assert!(matches!(err, FieldError::Conversion { .. }));
            assert_eq!(root, Root::default());

            let err = m.set_string(&mut root, "ports", "80,http").unwrap_err();
            assert!(matches!(err, FieldError::Conversion { .. }));
            assert!(root.ports.is_empty());
        });
    }

    #[test]
    fn struct_destinations_only_accept_empty_text() {
        with_mutator(|m| {
            let mut root = Root::default();
            m.set_string(&mut root, "a.b", "").unwrap();
            assert_eq!(root.a.as_ref().unwrap().b, Some(B::default()));

            m.set_string(&mut root, "labels", "").unwrap();

            let err = m.set_string(&mut root, "scalars", "x").unwrap_err();
            assert!(matches!(err, FieldError::UnhandledType { .. }));
        });
    }

    #[test]
    fn list_elements_are_all_set() {
        with_mutator(|m| {
            let mut root = Root {
                hooks: vec![Hook::default(), Hook::default()],
                ..Default::default()
            };
            m.set_string(&mut root, "hooks.name", "fix").unwrap();
            assert!(root.hooks.iter().all(|hook| hook.name == "fix"));

            root.hooks.clear();
            let err = m.set_string(&mut root, "hooks.name", "fix").unwrap_err();
            assert!(matches!(err, FieldError::NotFound { .. }));
        });
    }

    #[test]
    fn only_structs_are_allocated_on_the_way() {
        with_mutator(|m| {
            let mut root = Root::default();
            let err = m.set_string(&mut root, "maybeHooks.name", "x").unwrap_err();
            assert_eq!(
                err,
                FieldError::UnhandledType {
                    path: "maybeHooks".to_owned(),
                    type_path: <Vec<Hook> as crate::info::TypePath>::type_path(),
                }
            );
            assert_eq!(root.maybe_hooks, None);
        });
    }

    #[test]
    fn failed_sets_allocate_nothing() {
        with_mutator(|m| {
            let mut root = Root::default();

            let err = m.set_string(&mut root, "a.hooks.name", "x").unwrap_err();
            assert!(matches!(err, FieldError::NotFound { .. }), "{err}");
            assert_eq!(root, Root::default());

            let err = m.set_string(&mut root, "a.maybe.name", "x").unwrap_err();
            assert_eq!(
                err,
                FieldError::UnhandledType {
                    path: "a.maybe".to_owned(),
                    type_path: <Vec<Hook> as crate::info::TypePath>::type_path(),
                }
            );
            assert_eq!(root, Root::default());
        });
    }

    #[test]
    fn dead_branches_stay_unallocated() {
        with_mutator(|m| {
            let mut root = Root {
                a: Some(A {
                    hooks: vec![Hook::default()],
                    ..Default::default()
                }),
                ..Default::default()
            };
            m.set_string(&mut root, "a.hooks.name", "x").unwrap();

            let a = root.a.as_ref().unwrap();
            assert_eq!(a.hooks[0].name, "x");
            assert_eq!(a.b, None);
            assert_eq!(a.maybe, None);
        });
    }

    #[test]
    fn unset_never_allocates() {
        with_mutator(|m| {
            let mut root = Root::default();
            m.unset(&mut root, "a.b.c.value").unwrap();
            m.unset(&mut root, "hooks.name").unwrap();
            assert_eq!(root, Root::default());
        });
    }
}
