use core::any::TypeId;

use crate::FieldPath;
use crate::info::TypeInfo;
use crate::walk::resolve::container_struct;

/// Every field path addressable in the schema rooted at `root`, depth first
/// in declaration order.
///
/// A struct that contains itself (through an optional or a list) is not
/// expanded again below its own occurrence.
///
/// # Examples
///
/// ```
/// use fw_reflect::{derive::Reflect, info::Typed, walk::schema_paths};
///
/// #[derive(Reflect, Default)]
/// struct Kubelet {
///     max_pods: Option<i32>,
/// }
///
/// #[derive(Reflect, Default)]
/// struct Spec {
///     kubelet: Option<Kubelet>,
///     channel: String,
/// }
///
/// let paths: Vec<String> = schema_paths(Spec::type_info())
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(paths, ["kubelet", "kubelet.maxPods", "channel"]);
/// ```
pub fn schema_paths(root: &'static TypeInfo) -> Vec<FieldPath> {
    let mut paths = Vec::new();
    let mut stack = Vec::new();
    let mut path = FieldPath::root();
    collect(root, &mut path, &mut stack, &mut paths);
    paths
}

fn collect(
    info: &'static TypeInfo,
    path: &mut FieldPath,
    stack: &mut Vec<TypeId>,
    paths: &mut Vec<FieldPath>,
) {
    let Some(info) = container_struct(info) else {
        return;
    };
    let type_id = info.ty().id();
    if stack.contains(&type_id) {
        return;
    }

    stack.push(type_id);
    for field in info.iter() {
        path.push(field.name());
        paths.push(path.clone());
        collect(field.type_info(), path, stack, paths);
        path.pop();
    }
    stack.pop();
}
