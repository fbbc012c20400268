use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate the [`syn::Path`] under which a workspace crate is reachable from
/// the crate currently being compiled.
///
/// Generated code must name `fw_reflect` items, but a schema crate may depend
/// on `fw_reflect` directly or only on the `fieldwalk` facade.
///
/// # Example
///
/// ```rust
/// # use fw_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("fw_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. The requested crate is listed in `dependencies`: `::crate_name`.
/// 2. The name begins with `fw_` and the caller depends on `fieldwalk`:
///    `::fieldwalk::short_name` (e.g. `fw_reflect` -> `::fieldwalk::reflect`).
/// 3. Repeat 1-2 in `dev-dependencies`.
/// 4. Otherwise `::crate_name`.
///
/// A crate that needs to reference itself from doc tests declares
/// `extern crate self as fw_reflect;` so both spellings resolve.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "fieldwalk";
const CRATE_PREFIX: &str = "fw_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if !deps.contains_key(FACADE_NAME) {
            return None;
        }

        let mut path = Self::parse_str::<syn::Path>(&format!("::{FACADE_NAME}"));
        path.segments.push(Self::parse_str(module));
        Some(path)
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from
    /// this crate's Cargo.toml. See the type documentation for the order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Obtain the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// Manifests are cached per path and re-read when the file's modification
    /// time changes. Call once per macro invocation and keep the result.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use toml_edit::Document;

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        format!("::{}", segments.join("::"))
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency_is_used_as_is() {
        let m = manifest("[dependencies]\nfw_reflect = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("fw_reflect")), "::fw_reflect");
    }

    #[test]
    fn facade_dependency_maps_prefixed_crates() {
        let m = manifest("[dependencies]\nfieldwalk = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("fw_reflect")), "::fieldwalk::reflect");
    }

    #[test]
    fn dev_dependencies_are_searched_second() {
        let m = manifest("[dev-dependencies]\nfieldwalk = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("fw_reflect")), "::fieldwalk::reflect");
    }

    #[test]
    fn unknown_crate_falls_back_to_absolute_path() {
        let m = manifest("[dependencies]\nserde = \"1\"\n");
        assert_eq!(path_string(&m.get_crate_path("fw_reflect")), "::fw_reflect");
    }
}
